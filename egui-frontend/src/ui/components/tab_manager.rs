//! # Tab Manager Module
//!
//! This module handles the main content routing and tab management for
//! the scheduler app.
//!
//! ## Key Functions:
//! - `render_main_content()` - Routes to the active tab's content
//! - `draw_tab_toggle_buttons()` - Dashboard/Schedule/Users toggles
//!
//! ## Tab Flow:
//! - MainTab::Dashboard -> Stat cards, chart, mini calendar
//! - MainTab::Schedule  -> Full month calendar
//! - MainTab::Users     -> User administration table

use eframe::egui;

use crate::ui::app_state::SchedulerApp;
use crate::ui::components::theme::colors;
use crate::ui::state::MainTab;

impl SchedulerApp {
    /// Render the main content area
    pub fn render_main_content(&mut self, ui: &mut egui::Ui) {
        ui.vertical(|ui| {
            // Reserve space for bottom margin before drawing content
            let mut available_rect = ui.available_rect_before_wrap();
            available_rect.max.y -= 30.0;

            match self.core.current_tab {
                MainTab::Dashboard => {
                    self.draw_dashboard_section(ui, available_rect);
                }
                MainTab::Schedule => {
                    self.draw_calendar_section(ui, available_rect);
                }
                MainTab::Users => {
                    self.draw_users_section(ui, available_rect);
                }
            }

            ui.add_space(30.0);
        });
    }

    /// Draw the Dashboard/Schedule/Users toggle buttons
    pub fn draw_tab_toggle_buttons(&mut self, ui: &mut egui::Ui) {
        // Right-to-left layout, so draw in reverse order
        for tab in [MainTab::Users, MainTab::Schedule, MainTab::Dashboard] {
            let is_active = self.core.current_tab == tab;

            let (fill, text_color) = if is_active {
                (colors::ACTIVE_BACKGROUND, colors::TEXT_WHITE)
            } else {
                (colors::INACTIVE_BACKGROUND, colors::TEXT_PRIMARY)
            };

            let button = egui::Button::new(
                egui::RichText::new(tab.label())
                    .font(egui::FontId::new(14.0, egui::FontFamily::Proportional))
                    .color(text_color),
            )
            .fill(fill)
            .stroke(egui::Stroke::new(1.0, colors::CARD_BORDER))
            .rounding(egui::Rounding::same(6.0))
            .min_size(egui::vec2(90.0, 32.0));

            if ui.add(button).clicked() && !is_active {
                log::info!("📑 Switching to {} tab", tab.label());
                self.core.current_tab = tab;
                // Refresh the data behind the tab being opened
                match tab {
                    MainTab::Dashboard => self.reload_dashboard(),
                    MainTab::Schedule => self.reload_appointments(),
                    MainTab::Users => self.reload_users(),
                }
            }

            ui.add_space(8.0);
        }
    }
}
