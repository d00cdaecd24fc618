//! Quick action toolbar
use crate::ai::QuickAction;
use eframe::egui;

pub const CLEAR_BUTTON_LABEL: &str = "🗑 Clear";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    Quick(QuickAction),
    Clear,
}

/// Renders one button per quick action plus the clear button.
///
/// Every button is disabled while a reply is pending.
pub fn draw_toolbar(ui: &mut egui::Ui, enabled: bool) -> Option<ToolbarAction> {
    let mut clicked = None;

    ui.horizontal_wrapped(|ui| {
        for action in QuickAction::ALL {
            if ui
                .add_enabled(enabled, egui::Button::new(action.button_label()))
                .clicked()
            {
                clicked = Some(ToolbarAction::Quick(action));
            }
        }

        ui.separator();

        if ui
            .add_enabled(enabled, egui::Button::new(CLEAR_BUTTON_LABEL))
            .clicked()
        {
            clicked = Some(ToolbarAction::Clear);
        }
    });

    clicked
}
