//! # App Coordinator Module
//!
//! This module contains the main application coordination logic,
//! handling the primary update loop and overall application lifecycle.
//!
//! ## Key Functions:
//! - `eframe::App::update()` - Main application update loop
//! - `render_loading_screen()` - Spinner while the first data loads
//!
//! ## Application Flow:
//! 1. Drain completed background fetches into app state
//! 2. Route to the login/register screens when unauthenticated
//! 3. Render header, tab subheader, and the active tab's content
//! 4. Render any active modals

use eframe::egui;

use crate::ui::app_state::SchedulerApp;
use crate::ui::state::{MainTab, Screen};

impl eframe::App for SchedulerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply results of any finished background requests first so
        // this frame renders the freshest state.
        self.process_fetch_responses();

        // Keep repainting while anything is in flight so responses are
        // picked up promptly.
        if self.any_request_in_flight() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        // Feedback messages dismiss themselves after a few seconds
        if self.ui.error_message.is_some() || self.ui.success_message.is_some() {
            if self.ui.message_expired() {
                self.ui.clear_messages();
            } else {
                ctx.request_repaint_after(std::time::Duration::from_secs(1));
            }
        }

        match self.core.screen {
            Screen::Login => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    self.render_login_screen(ui);
                });
                return;
            }
            Screen::Register => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    self.render_register_screen(ui);
                });
                return;
            }
            Screen::Main => {}
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            let full_rect = ui.available_rect_before_wrap();

            if self.ui.loading {
                self.render_loading_screen(ui);
                return;
            }

            // Three-layer layout: header, tab subheader, content
            let header_height = 80.0;
            let subheader_height = 50.0;

            let header_rect = egui::Rect::from_min_size(
                full_rect.min,
                egui::vec2(full_rect.width(), header_height),
            );

            let subheader_rect = egui::Rect::from_min_size(
                egui::pos2(full_rect.min.x, full_rect.min.y + header_height),
                egui::vec2(full_rect.width(), subheader_height),
            );

            let content_y = full_rect.min.y + header_height + subheader_height;
            let content_rect = egui::Rect::from_min_size(
                egui::pos2(full_rect.min.x, content_y),
                egui::vec2(
                    full_rect.width(),
                    full_rect.height() - header_height - subheader_height,
                ),
            );

            // Layer 1: Header
            ui.allocate_ui_at_rect(header_rect, |ui| {
                self.render_header(ui);
            });

            // Layer 2: Subheader (tab-specific controls + tab toggles)
            ui.allocate_ui_at_rect(subheader_rect, |ui| {
                ui.horizontal(|ui| {
                    ui.add_space(20.0); // Left padding

                    self.draw_tab_specific_controls(ui);

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.add_space(20.0); // Right padding
                        self.draw_tab_toggle_buttons(ui);
                    });
                });
            });

            // Layer 3: Content
            ui.allocate_ui_at_rect(content_rect, |ui| {
                self.render_messages(ui);
                self.render_main_content(ui);
            });
        });

        // Render modals above everything else
        self.render_profile_modal(ctx);
        self.render_delete_confirmation(ctx);
    }
}

impl SchedulerApp {
    /// Render the loading screen
    pub fn render_loading_screen(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(100.0);
            ui.spinner();
            ui.label("Loading...");
        });
    }

    /// Whether any background request is still running
    fn any_request_in_flight(&self) -> bool {
        self.ui.loading
            || self.auth.in_flight
            || self.calendar.loading
            || self.dashboard.loading
            || self.users.loading
            || self.users.deleting_id.is_some()
            || self.modals.profile_form.is_saving
    }

    /// Draw tab-specific controls for the subheader
    fn draw_tab_specific_controls(&mut self, ui: &mut egui::Ui) {
        match self.core.current_tab {
            MainTab::Schedule => {
                self.draw_calendar_navigation_controls(ui);
            }
            MainTab::Dashboard | MainTab::Users => {}
        }
    }

    /// Draw schedule month navigation controls
    fn draw_calendar_navigation_controls(&mut self, ui: &mut egui::Ui) {
        use crate::ui::components::theme::colors;

        ui.horizontal(|ui| {
            let prev_button = egui::Button::new("<")
                .fill(egui::Color32::from_rgba_unmultiplied(255, 255, 255, 100))
                .stroke(egui::Stroke::new(1.5, colors::HOVER_BORDER))
                .rounding(egui::Rounding::same(6.0))
                .min_size(egui::vec2(35.0, 35.0));

            if ui.add(prev_button).clicked() {
                self.navigate_to_previous_month();
            }

            ui.add_space(15.0);

            // Current month and year display
            let month_year_text = format!(
                "{} {}",
                self.calendar.cursor.month_name(),
                self.calendar.cursor.year
            );
            ui.add(
                egui::Label::new(
                    egui::RichText::new(month_year_text)
                        .font(egui::FontId::new(16.0, egui::FontFamily::Proportional))
                        .color(colors::TEXT_PRIMARY)
                        .strong(),
                )
                .selectable(false),
            );

            ui.add_space(15.0);

            let next_button = egui::Button::new(">")
                .fill(egui::Color32::from_rgba_unmultiplied(255, 255, 255, 100))
                .stroke(egui::Stroke::new(1.5, colors::HOVER_BORDER))
                .rounding(egui::Rounding::same(6.0))
                .min_size(egui::vec2(35.0, 35.0));

            if ui.add(next_button).clicked() {
                self.navigate_to_next_month();
            }

            ui.add_space(15.0);

            if ui.button("Today").clicked() {
                self.navigate_to_today();
            }

            ui.add_space(15.0);

            self.draw_year_selector(ui);
        });
    }

    /// Year picker covering the surrounding decade in each direction
    fn draw_year_selector(&mut self, ui: &mut egui::Ui) {
        let current_year = self.calendar.cursor.year;
        let mut chosen_year = current_year;

        egui::ComboBox::from_id_source("schedule_year_selector")
            .selected_text(current_year.to_string())
            .width(80.0)
            .show_ui(ui, |ui| {
                for year in (current_year - 10)..=(current_year + 10) {
                    ui.selectable_value(&mut chosen_year, year, year.to_string());
                }
            });

        if chosen_year != current_year {
            self.navigate_to_year(chosen_year);
        }
    }
}
