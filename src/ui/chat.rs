//! Chat history and input line rendering
use super::app::USER_SENDER;
use super::widgets;
use crate::core::ChatMessage;
use eframe::egui;

pub const MESSAGE_SPACING: f32 = 8.0;
pub const SEND_BUTTON_LABEL: &str = "Send 📤";

/// Renders the scrolling message history
///
/// # Arguments
/// * `ui` - Central panel ui
/// * `messages` - Conversation so far, oldest first
/// * `bot_name` - Label used for bot messages
/// * `is_thinking` - Whether a reply is pending
pub fn draw_messages(ui: &mut egui::Ui, messages: &[ChatMessage], bot_name: &str, is_thinking: bool) {
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for message in messages {
                let is_user = message.sender == USER_SENDER;

                let (header_color, text_color, icon) = if is_user {
                    (widgets::USER_COLOR, widgets::USER_TEXT_COLOR, "👤")
                } else {
                    (widgets::BOT_COLOR, widgets::BOT_TEXT_COLOR, "🤖")
                };

                ui.label(
                    egui::RichText::new(format!("[{}] {} {}:", message.timestamp, icon, message.sender))
                        .color(header_color)
                        .strong(),
                );
                ui.label(egui::RichText::new(&message.text).color(text_color).size(14.0));
                ui.add_space(MESSAGE_SPACING);
            }

            if is_thinking {
                ui.label(
                    egui::RichText::new(format!("⏳ {} is typing...", bot_name))
                        .color(widgets::MUTED_COLOR)
                        .italics(),
                );
            }
        });
}

/// Renders the input line with its send button.
///
/// Returns true when the user asked to send, by Enter or by click.
pub fn draw_input_row(ui: &mut egui::Ui, input_text: &mut String, is_thinking: bool) -> bool {
    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
        let clicked = ui
            .add_enabled(!is_thinking, egui::Button::new(SEND_BUTTON_LABEL))
            .clicked();

        let response = ui.add(
            egui::TextEdit::singleline(input_text)
                .hint_text("Ask me anything...")
                .desired_width(ui.available_width()),
        );

        // Send on Enter
        let enter_pressed =
            response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if enter_pressed {
            response.request_focus();
        }

        clicked || enter_pressed
    })
    .inner
}
