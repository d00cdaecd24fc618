//! Header, status line and colour theme
use eframe::egui;

pub const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(0x1a, 0x1a, 0x2e);
pub const PANEL_FILL: egui::Color32 = egui::Color32::from_rgb(0x16, 0x21, 0x3e);
pub const CHAT_FILL: egui::Color32 = egui::Color32::from_rgb(0x0f, 0x14, 0x19);
pub const USER_COLOR: egui::Color32 = egui::Color32::from_rgb(0x4c, 0xaf, 0x50);
pub const USER_TEXT_COLOR: egui::Color32 = egui::Color32::from_rgb(0xe8, 0xf5, 0xe8);
pub const BOT_COLOR: egui::Color32 = egui::Color32::from_rgb(0x21, 0x96, 0xf3);
pub const BOT_TEXT_COLOR: egui::Color32 = egui::Color32::from_rgb(0xe3, 0xf2, 0xfd);
pub const MUTED_COLOR: egui::Color32 = egui::Color32::from_rgb(150, 150, 150);

pub const PANEL_PADDING: f32 = 8.0;

/// Dark theme, applied once on the first frame
pub fn apply_theme(ctx: &egui::Context) {
    ctx.set_visuals(egui::Visuals::dark());

    let mut style = (*ctx.style()).clone();
    style.visuals.panel_fill = BACKGROUND;
    style.visuals.window_fill = PANEL_FILL;
    style.visuals.extreme_bg_color = PANEL_FILL;
    ctx.set_style(style);
}

pub fn panel_frame(fill: egui::Color32) -> egui::Frame {
    egui::Frame::default().fill(fill).inner_margin(PANEL_PADDING)
}

/// Title line
pub fn draw_header(ui: &mut egui::Ui, bot_name: &str) {
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new(format!("🤖 {} - Interactive Learning Assistant", bot_name))
                .size(20.0)
                .strong(),
        );
    });
}

/// Status text on the left, progress counters on the right
pub fn draw_status_bar(ui: &mut egui::Ui, status: &str, progress_summary: &str) {
    ui.horizontal(|ui| {
        ui.label(status);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(egui::RichText::new(progress_summary).strong());
        });
    });
}
