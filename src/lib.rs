//! EduBot: a desktop study companion that answers from a fixed knowledge base.

pub mod ai;
pub mod config;
pub mod core;
pub mod gui;
pub mod logger;
pub mod services;
pub mod ui;
