//! # Styling Module
//!
//! Global style setup and small shared drawing helpers.

use eframe::egui;

use crate::ui::components::theme::colors;

/// Apply the app-wide visual style: light mode, institutional palette,
/// slightly rounded widgets.
pub fn setup_app_style(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals = egui::Visuals::light();
    style.visuals.panel_fill = colors::BACKGROUND;
    style.visuals.window_fill = colors::CARD_BACKGROUND;
    style.visuals.selection.bg_fill = colors::ACTIVE_BACKGROUND;
    style.visuals.hyperlink_color = colors::TEXT_HEADING;
    style.visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.5, colors::HOVER_BORDER);

    style.spacing.button_padding = egui::vec2(12.0, 6.0);
    style.spacing.item_spacing = egui::vec2(8.0, 8.0);

    ctx.set_style(style);
}

/// Draw a white card background with a subtle border, used by every
/// content section.
pub fn draw_card_background(ui: &mut egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, egui::Rounding::same(10.0), colors::CARD_BACKGROUND);
    ui.painter().rect_stroke(
        rect,
        egui::Rounding::same(10.0),
        egui::Stroke::new(1.0, colors::CARD_BORDER),
    );
}
