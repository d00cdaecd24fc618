pub mod knowledge;
pub mod quiz;

pub use knowledge::KnowledgeBase;
pub use quiz::{QuizDeck, QuizItem};
