pub mod keywords;
pub mod responder;

pub use keywords::Category;
pub use responder::{QuickAction, Reply, Responder};
