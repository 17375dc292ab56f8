//! # Header Module
//!
//! This module handles rendering the application header: the app
//! title, the signed-in user, and the profile/logout actions.
//!
//! ## Key Functions:
//! - `render_header()` - Main header rendering
//! - `render_messages()` - Success/error message display

use eframe::egui;

use crate::ui::app_state::SchedulerApp;
use crate::ui::components::theme::colors;
use crate::ui::state::ModalState;

impl SchedulerApp {
    /// Render the header
    pub fn render_header(&mut self, ui: &mut egui::Ui) {
        let header_height = 60.0;

        let frame = egui::Frame::none()
            .fill(colors::CARD_BACKGROUND)
            .inner_margin(egui::Margin::symmetric(10.0, 10.0));

        frame.show(ui, |ui| {
            ui.allocate_ui_with_layout(
                egui::vec2(ui.available_width(), header_height - 20.0),
                egui::Layout::top_down(egui::Align::LEFT),
                |ui| {
                    ui.horizontal(|ui| {
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new("Appointment Scheduler")
                                    .font(egui::FontId::new(28.0, egui::FontFamily::Proportional))
                                    .strong()
                                    .color(colors::TEXT_HEADING),
                            )
                            .selectable(false),
                        );

                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.button("Logout").clicked() {
                                self.logout();
                            }

                            ui.add_space(10.0);

                            if let Some(user) = self.core.current_user.clone() {
                                let profile_label = format!("👤 {}", user.full_name());
                                if ui.button(profile_label).clicked() {
                                    self.open_profile_modal();
                                }

                                ui.add_space(10.0);

                                ui.add(
                                    egui::Label::new(
                                        egui::RichText::new(user.role.label())
                                            .font(egui::FontId::new(
                                                14.0,
                                                egui::FontFamily::Proportional,
                                            ))
                                            .color(colors::TEXT_SECONDARY),
                                    )
                                    .selectable(false),
                                );
                            }
                        });
                    });
                },
            );
        });
    }

    /// Open the profile modal pre-filled with the current user's data
    pub fn open_profile_modal(&mut self) {
        if let Some(user) = &self.core.current_user {
            log::info!("👤 Opening profile modal");
            self.modals = ModalState {
                show_profile_modal: true,
                profile_form: crate::ui::state::modal_state::ProfileForm::from_user(user),
            };
        }
    }

    /// Render error and success messages
    pub fn render_messages(&self, ui: &mut egui::Ui) {
        if let Some(error) = &self.ui.error_message {
            ui.colored_label(egui::Color32::RED, format!("❌ {}", error));
        }
        if let Some(success) = &self.ui.success_message {
            ui.colored_label(egui::Color32::GREEN, format!("✅ {}", success));
        }
    }
}
