use crate::ui::buttons::{self, ToolbarAction};
use crate::ui::{chat, widgets, EduBotApp};
use eframe::egui;
use std::time::Duration;

impl eframe::App for EduBotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.style_initialized {
            widgets::apply_theme(ctx);
            self.style_initialized = true;
        }

        self.process_responses();

        egui::TopBottomPanel::top("header")
            .frame(widgets::panel_frame(widgets::PANEL_FILL))
            .show(ctx, |ui| {
                widgets::draw_header(ui, &self.config.bot_name);
                ui.add_space(4.0);
                widgets::draw_status_bar(ui, &self.status, &self.progress.summary());
            });

        let mut toolbar_action = None;
        let mut send_requested = false;

        egui::TopBottomPanel::bottom("input")
            .frame(widgets::panel_frame(widgets::PANEL_FILL))
            .show(ctx, |ui| {
                send_requested = chat::draw_input_row(ui, &mut self.input_text, self.is_thinking);
                ui.add_space(4.0);
                toolbar_action = buttons::draw_toolbar(ui, !self.is_thinking);
            });

        egui::CentralPanel::default()
            .frame(widgets::panel_frame(widgets::CHAT_FILL))
            .show(ctx, |ui| {
                chat::draw_messages(ui, &self.messages, &self.config.bot_name, self.is_thinking);
            });

        if send_requested {
            self.send_message(ctx);
        }

        match toolbar_action {
            Some(ToolbarAction::Quick(action)) => self.run_quick_action(ctx, action),
            Some(ToolbarAction::Clear) => self.clear_conversation(),
            None => {}
        }

        if self.is_thinking {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
