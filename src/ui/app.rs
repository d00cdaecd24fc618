//! Main application structure and lifecycle management
use crate::ai::QuickAction;
use crate::config::Config;
use crate::core::agent::{process_request, AgentEvent, AgentRequest};
use crate::core::{ChatMessage, EduAgent, SessionProgress};
use eframe::egui;
use std::sync::mpsc as std_mpsc;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

pub const USER_SENDER: &str = "You";
pub const READY_STATUS: &str = "Ready to learn! Ask me anything...";
pub const IDLE_STATUS: &str = "Ready to help! Ask me anything...";

pub struct EduBotApp {
    pub config: Config,
    pub agent: Arc<Mutex<EduAgent>>,
    pub messages: Vec<ChatMessage>,
    pub input_text: String,
    pub status: String,
    pub is_thinking: bool,
    pub progress: SessionProgress,
    pub response_receiver: std_mpsc::Receiver<Option<AgentEvent>>,
    pub response_sender: std_mpsc::Sender<Option<AgentEvent>>,
    pub style_initialized: bool,
}

impl EduBotApp {
    pub fn new(config: Config, agent: EduAgent, welcome: &str) -> Self {
        let (sender, receiver) = std_mpsc::channel();
        let messages = vec![ChatMessage::new(&config.bot_name, welcome)];

        Self {
            config,
            agent: Arc::new(Mutex::new(agent)),
            messages,
            input_text: String::new(),
            status: READY_STATUS.to_string(),
            is_thinking: false,
            progress: SessionProgress::new(),
            response_receiver: receiver,
            response_sender: sender,
            style_initialized: false,
        }
    }

    /// Sends the typed line to the agent; blank input is ignored
    pub fn send_message(&mut self, ctx: &egui::Context) {
        let user_input = self.input_text.trim().to_string();
        if user_input.is_empty() || self.is_thinking {
            return;
        }

        self.input_text.clear();
        self.push_message(ChatMessage::new(USER_SENDER, &user_input));
        // shown now; the agent's snapshot arrives with the reply
        self.progress.record_question();

        let delay = self.config.thinking_delay;
        self.dispatch(ctx, AgentRequest::Message(user_input), delay);
    }

    /// Quick actions answer right away, without the thinking pause
    pub fn run_quick_action(&mut self, ctx: &egui::Context, action: QuickAction) {
        if self.is_thinking {
            return;
        }
        log::debug!("🔘 Quick action button: {:?}", action);
        self.dispatch(ctx, AgentRequest::Quick(action), Duration::ZERO);
    }

    fn dispatch(&mut self, ctx: &egui::Context, request: AgentRequest, delay: Duration) {
        self.is_thinking = true;
        self.status = format!("🤖 {} is thinking...", self.config.bot_name);

        let agent = Arc::clone(&self.agent);
        let sender = self.response_sender.clone();
        let ctx_clone = ctx.clone();

        tokio::spawn(async move {
            let event = process_request(agent, request, delay).await;

            if let Err(e) = sender.send(event) {
                log::error!("Failed to deliver reply to the UI: {}", e);
            }

            ctx_clone.request_repaint();
        });
    }

    /// Drains finished replies; called from the UI thread every frame
    pub fn process_responses(&mut self) {
        while let Ok(event) = self.response_receiver.try_recv() {
            if let Some(event) = event {
                let message = ChatMessage::new(&self.config.bot_name, &event.text);
                self.push_message(message);
                self.progress = event.progress;
            }
            self.is_thinking = false;
            self.status = IDLE_STATUS.to_string();
        }
    }

    /// Keeps at most `history_limit` messages on screen, oldest dropped first
    fn push_message(&mut self, message: ChatMessage) {
        self.messages.push(message);
        let overflow = self.messages.len().saturating_sub(self.config.history_limit);
        if overflow > 0 {
            self.messages.drain(..overflow);
        }
    }

    /// Clears the visible conversation and the agent's history.
    /// Progress counters survive. Ignored while a reply is pending.
    pub fn clear_conversation(&mut self) {
        if self.is_thinking {
            return;
        }
        self.messages.clear();

        let agent = Arc::clone(&self.agent);
        tokio::spawn(async move {
            agent.lock().await.clear_history();
        });
    }
}
