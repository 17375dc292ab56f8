//! # Profile Modal
//!
//! This module contains the profile editing modal for the signed-in
//! user.
//!
//! ## Responsibilities:
//! - Display and edit first name, last name, and email
//! - Form validation before submission
//! - Save via the API on a background thread

use eframe::egui;

use crate::ui::app_state::SchedulerApp;
use crate::ui::components::theme::colors;

impl SchedulerApp {
    /// Render the profile modal
    pub fn render_profile_modal(&mut self, ctx: &egui::Context) {
        if !self.modals.show_profile_modal {
            return;
        }

        egui::Area::new(egui::Id::new("profile_modal_overlay"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                // Dark semi-transparent backdrop
                let screen_rect = ctx.screen_rect();
                ui.painter().rect_filled(
                    screen_rect,
                    egui::Rounding::ZERO,
                    egui::Color32::from_rgba_unmultiplied(0, 0, 0, 128),
                );

                ui.allocate_ui_at_rect(screen_rect, |ui| {
                    ui.centered_and_justified(|ui| {
                        egui::Frame::window(&ui.style())
                            .fill(colors::CARD_BACKGROUND)
                            .stroke(egui::Stroke::new(2.0, colors::HOVER_BORDER))
                            .rounding(egui::Rounding::same(12.0))
                            .inner_margin(egui::Margin::same(25.0))
                            .show(ui, |ui| {
                                ui.set_min_size(egui::vec2(420.0, 360.0));
                                ui.set_max_size(egui::vec2(420.0, 360.0));

                                ui.vertical_centered(|ui| {
                                    ui.add_space(10.0);
                                    ui.label(
                                        egui::RichText::new("👤 My Profile")
                                            .font(egui::FontId::new(
                                                24.0,
                                                egui::FontFamily::Proportional,
                                            ))
                                            .strong()
                                            .color(colors::TEXT_HEADING),
                                    );
                                    ui.add_space(15.0);

                                    self.render_profile_form(ui);

                                    ui.add_space(20.0);
                                    self.render_profile_buttons(ui);
                                    ui.add_space(10.0);
                                });
                            });
                    });
                });
            });
    }

    /// Render the profile form fields
    fn render_profile_form(&mut self, ui: &mut egui::Ui) {
        ui.vertical(|ui| {
            ui.set_width(ui.available_width() - 40.0);

            ui.label(egui::RichText::new("First name").strong().color(colors::TEXT_PRIMARY));
            ui.add(
                egui::TextEdit::singleline(&mut self.modals.profile_form.first_name)
                    .desired_width(ui.available_width()),
            );

            ui.add_space(10.0);
            ui.label(egui::RichText::new("Last name").strong().color(colors::TEXT_PRIMARY));
            ui.add(
                egui::TextEdit::singleline(&mut self.modals.profile_form.last_name)
                    .desired_width(ui.available_width()),
            );

            ui.add_space(10.0);
            ui.label(egui::RichText::new("Email").strong().color(colors::TEXT_PRIMARY));
            ui.add(
                egui::TextEdit::singleline(&mut self.modals.profile_form.email)
                    .desired_width(ui.available_width()),
            );

            if let Some(error) = &self.modals.profile_form.error {
                ui.add_space(8.0);
                ui.colored_label(colors::DANGER, format!("❌ {}", error));
            }
        });
    }

    /// Render the save/cancel buttons
    fn render_profile_buttons(&mut self, ui: &mut egui::Ui) {
        let has_changes = self
            .core
            .current_user
            .as_ref()
            .map(|user| self.modals.profile_form.has_changes(user))
            .unwrap_or(false);
        let is_saving = self.modals.profile_form.is_saving;
        let save_enabled = has_changes && !is_saving;

        ui.horizontal(|ui| {
            let button_width = 100.0;
            let spacing = 20.0;
            let offset = (ui.available_width() - button_width * 2.0 - spacing) / 2.0;
            if offset > 0.0 {
                ui.add_space(offset);
            }

            let save_text = if is_saving { "Saving..." } else { "Save" };
            let save_button = egui::Button::new(
                egui::RichText::new(save_text)
                    .color(if save_enabled {
                        colors::TEXT_WHITE
                    } else {
                        egui::Color32::from_rgb(160, 160, 160)
                    })
                    .font(egui::FontId::new(15.0, egui::FontFamily::Proportional)),
            )
            .fill(if save_enabled {
                colors::ACTIVE_BACKGROUND
            } else {
                egui::Color32::from_rgb(220, 220, 220)
            })
            .rounding(egui::Rounding::same(8.0))
            .min_size(egui::vec2(button_width, 36.0));

            if ui.add(save_button).clicked() && save_enabled {
                self.save_profile();
            }

            ui.add_space(spacing);

            let cancel_button = egui::Button::new(
                egui::RichText::new("Cancel")
                    .color(colors::TEXT_PRIMARY)
                    .font(egui::FontId::new(15.0, egui::FontFamily::Proportional)),
            )
            .fill(egui::Color32::from_rgb(245, 245, 245))
            .stroke(egui::Stroke::new(1.0, colors::CARD_BORDER))
            .rounding(egui::Rounding::same(8.0))
            .min_size(egui::vec2(button_width, 36.0));

            if ui.add(cancel_button).clicked() {
                log::info!("❌ Closing profile modal");
                self.modals.show_profile_modal = false;
            }
        });
    }

    /// Validate and submit the profile update
    fn save_profile(&mut self) {
        let Some(user) = self.core.current_user.clone() else {
            return;
        };

        match self.modals.profile_form.to_request() {
            Ok(request) => {
                self.modals.profile_form.error = None;
                self.modals.profile_form.is_saving = true;
                self.fetcher.save_profile(user.id, request);
            }
            Err(message) => {
                self.modals.profile_form.error = Some(message);
            }
        }
    }
}
