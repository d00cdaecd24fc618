use crate::ai::{QuickAction, Responder};
use crate::config::Config;
use crate::core::SessionProgress;
use crate::services::QuizItem;
use chrono::Local;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

/// One line of the conversation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub sender: String,
    pub text: String,
    /// Local time, HH:MM
    pub timestamp: String,
}

impl ChatMessage {
    pub fn new(sender: &str, text: &str) -> Self {
        Self {
            sender: sender.to_string(),
            text: text.to_string(),
            timestamp: Local::now().format("%H:%M").to_string(),
        }
    }
}

/// Work handed to the agent from the UI
#[derive(Debug, Clone)]
pub enum AgentRequest {
    Message(String),
    Quick(QuickAction),
}

/// Result sent back to the UI thread
#[derive(Debug, Clone)]
pub struct AgentEvent {
    pub text: String,
    pub progress: SessionProgress,
}

pub struct EduAgent {
    bot_name: String,
    responder: Responder,
    progress: SessionProgress,
    current_quiz: Option<QuizItem>,
    conversation_history: VecDeque<ChatMessage>,
    history_limit: usize,
}

impl EduAgent {
    pub fn new(config: &Config, responder: Responder) -> Self {
        Self {
            bot_name: config.bot_name.clone(),
            responder,
            progress: SessionProgress::new(),
            current_quiz: None,
            conversation_history: VecDeque::new(),
            history_limit: config.history_limit,
        }
    }

    /// Processes one user line. Blank input is rejected and touches nothing.
    pub fn submit(&mut self, user_input: &str) -> Option<String> {
        let user_input = user_input.trim();
        if user_input.is_empty() {
            return None;
        }

        let reply = self
            .responder
            .reply(user_input, &mut self.progress, &mut rand::thread_rng());

        if let Some(item) = reply.quiz {
            self.current_quiz = Some(item);
        }

        self.remember(ChatMessage::new("You", user_input));
        self.remember(ChatMessage::new(&self.bot_name, &reply.text));

        log::info!(
            "💬 Replied to message ({:?}), {}",
            reply.category,
            self.progress.summary()
        );
        Some(reply.text)
    }

    pub fn quick(&mut self, action: QuickAction) -> String {
        let reply = self
            .responder
            .quick_reply(action, &mut self.progress, &mut rand::thread_rng());

        if let Some(item) = reply.quiz {
            self.current_quiz = Some(item);
        }

        self.remember(ChatMessage::new(&self.bot_name, &reply.text));
        log::info!("⚡ Quick action {:?}, {}", action, self.progress.summary());
        reply.text
    }

    pub fn handle(&mut self, request: &AgentRequest) -> Option<String> {
        match request {
            AgentRequest::Message(text) => self.submit(text),
            AgentRequest::Quick(action) => Some(self.quick(*action)),
        }
    }

    fn remember(&mut self, message: ChatMessage) {
        self.conversation_history.push_back(message);
        while self.conversation_history.len() > self.history_limit {
            self.conversation_history.pop_front();
        }
    }

    pub fn progress(&self) -> &SessionProgress {
        &self.progress
    }

    /// Last quiz item asked. Answers are not checked against it.
    pub fn current_quiz(&self) -> Option<&QuizItem> {
        self.current_quiz.as_ref()
    }

    pub fn get_history(&self) -> Vec<ChatMessage> {
        self.conversation_history.iter().cloned().collect()
    }

    /// Drops the conversation; progress counters are kept
    pub fn clear_history(&mut self) {
        self.conversation_history.clear();
        log::info!("🗑️  Conversation history cleared");
    }
}

/// Runs one request: waits out the thinking delay, then computes the reply.
///
/// The lock is taken only after the delay so the UI can still be drawn.
pub async fn process_request(
    agent: Arc<Mutex<EduAgent>>,
    request: AgentRequest,
    delay: Duration,
) -> Option<AgentEvent> {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    let mut agent = agent.lock().await;
    let text = agent.handle(&request)?;
    Some(AgentEvent {
        text,
        progress: agent.progress().clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::KnowledgeBase;

    fn agent_with_limit(history_limit: usize) -> EduAgent {
        let config = Config {
            history_limit,
            ..Config::from_lookup(|_| None)
        };
        let responder = Responder::new(Arc::new(KnowledgeBase::embedded().unwrap()));
        EduAgent::new(&config, responder)
    }

    #[test]
    fn blank_input_is_rejected() {
        let mut agent = agent_with_limit(10);
        assert_eq!(agent.submit("   \t "), None);
        assert_eq!(agent.submit(""), None);
        assert_eq!(agent.progress().questions_asked(), 0);
        assert!(agent.get_history().is_empty());
    }

    #[test]
    fn submit_updates_progress_and_history() {
        let mut agent = agent_with_limit(10);

        agent.submit("hello").unwrap();
        agent.submit("help with algebra").unwrap();
        agent.submit("physics please").unwrap();

        assert_eq!(agent.progress().questions_asked(), 3);
        assert_eq!(agent.progress().topics_count(), 2);

        let history = agent.get_history();
        assert_eq!(history.len(), 6);
        assert_eq!(history[0].sender, "You");
        assert_eq!(history[0].text, "hello");
        assert_eq!(history[1].sender, "EduBot");
        assert_eq!(history[1].timestamp.len(), 5);
    }

    #[test]
    fn quiz_request_becomes_current_quiz() {
        let mut agent = agent_with_limit(10);
        assert!(agent.current_quiz().is_none());

        let text = agent.submit("give me a challenge").unwrap();
        let item = agent.current_quiz().expect("quiz stored");
        assert!(text.contains(&item.question));

        agent.quick(QuickAction::Quiz);
        assert!(agent.current_quiz().is_some());
    }

    #[test]
    fn history_is_bounded() {
        let mut agent = agent_with_limit(4);
        for _ in 0..5 {
            agent.submit("purple elephant");
        }
        let history = agent.get_history();
        assert_eq!(history.len(), 4);
        assert_eq!(agent.progress().questions_asked(), 5);
    }

    #[test]
    fn clearing_history_keeps_progress() {
        let mut agent = agent_with_limit(10);
        agent.submit("ancient rome");
        agent.clear_history();
        assert!(agent.get_history().is_empty());
        assert_eq!(agent.progress().summary(), "Questions: 1 | Topics: 1");
    }

    #[tokio::test]
    async fn process_returns_reply_with_progress_snapshot() {
        let agent = Arc::new(Mutex::new(agent_with_limit(10)));

        let event = process_request(
            Arc::clone(&agent),
            AgentRequest::Message("tell me about chemistry".into()),
            Duration::ZERO,
        )
        .await
        .unwrap();
        assert!(event.text.starts_with("🧪 **Chemistry Insights:**"));
        assert_eq!(event.progress.summary(), "Questions: 1 | Topics: 1");

        let event = process_request(
            Arc::clone(&agent),
            AgentRequest::Quick(QuickAction::History),
            Duration::from_millis(5),
        )
        .await
        .unwrap();
        assert!(event.text.contains("Historical Thinking Skills"));
        assert_eq!(event.progress.summary(), "Questions: 1 | Topics: 2");
    }

    #[tokio::test]
    async fn process_skips_blank_messages() {
        let agent = Arc::new(Mutex::new(agent_with_limit(10)));
        let event = process_request(agent, AgentRequest::Message("  ".into()), Duration::ZERO).await;
        assert!(event.is_none());
    }
}
