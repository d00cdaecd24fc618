pub mod agent;
pub mod progress;

pub use agent::{AgentEvent, AgentRequest, ChatMessage, EduAgent};
pub use progress::SessionProgress;
