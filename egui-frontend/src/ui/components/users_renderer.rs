//! # Users Renderer Module
//!
//! This module renders the user administration tab: a table of every
//! registered account with role badges and per-row delete actions.
//!
//! ## Key Functions:
//! - `draw_users_section()` - Users view with loading/error states
//! - `draw_users_table()` - Header row plus striped user rows
//!
//! Deleting goes through a confirmation modal; the row's button only
//! arms it.

use eframe::egui;
use shared::UserRole;

use crate::ui::app_state::SchedulerApp;
use crate::ui::components::styling::draw_card_background;
use crate::ui::components::theme::colors;

impl SchedulerApp {
    /// Draw the users section
    pub fn draw_users_section(&mut self, ui: &mut egui::Ui, available_rect: egui::Rect) {
        let content_margin = 20.0;
        let content_rect = egui::Rect::from_min_size(
            available_rect.min + egui::vec2(content_margin, 0.0),
            available_rect.size() - egui::vec2(content_margin * 2.0, content_margin),
        );

        draw_card_background(ui, content_rect);

        let inner_rect = content_rect.shrink(12.0);
        ui.allocate_ui_at_rect(inner_rect, |ui| {
            if self.users.loading {
                ui.vertical_centered(|ui| {
                    ui.add_space(inner_rect.height() / 3.0);
                    ui.spinner();
                    ui.label("Loading users...");
                });
                return;
            }

            if let Some(error) = self.users.error.clone() {
                ui.vertical_centered(|ui| {
                    ui.add_space(inner_rect.height() / 3.0);
                    ui.colored_label(colors::DANGER, format!("❌ {}", error));
                    ui.add_space(10.0);
                    if ui.button("Retry").clicked() {
                        self.reload_users();
                    }
                });
                return;
            }

            ui.label(
                egui::RichText::new(format!("Registered Users ({})", self.users.users.len()))
                    .font(egui::FontId::new(16.0, egui::FontFamily::Proportional))
                    .strong()
                    .color(colors::TEXT_HEADING),
            );
            ui.add_space(8.0);

            self.draw_users_table(ui);
        });
    }

    /// Header row plus one striped row per user
    fn draw_users_table(&mut self, ui: &mut egui::Ui) {
        let name_width = ui.available_width() * 0.3;
        let email_width = ui.available_width() * 0.35;
        let role_width = ui.available_width() * 0.15;

        ui.horizontal(|ui| {
            for (label, width) in [
                ("Name", name_width),
                ("Email", email_width),
                ("Role", role_width),
            ] {
                ui.allocate_ui(egui::vec2(width, 20.0), |ui| {
                    ui.label(
                        egui::RichText::new(label)
                            .strong()
                            .color(colors::TEXT_HEADING),
                    );
                });
            }
        });
        ui.separator();

        let users = self.users.users.clone();
        let current_user_id = self
            .core
            .current_user
            .as_ref()
            .map(|u| u.id.clone())
            .unwrap_or_default();

        egui::ScrollArea::vertical()
            .id_source("users_table")
            .show(ui, |ui| {
                for (index, user) in users.iter().enumerate() {
                    let row_rect = egui::Rect::from_min_size(
                        ui.cursor().min,
                        egui::vec2(ui.available_width(), 30.0),
                    );
                    if index % 2 == 1 {
                        ui.painter().rect_filled(
                            row_rect,
                            egui::Rounding::ZERO,
                            egui::Color32::from_rgb(248, 248, 248),
                        );
                    }

                    ui.horizontal(|ui| {
                        ui.allocate_ui(egui::vec2(name_width, 24.0), |ui| {
                            ui.label(user.full_name());
                        });
                        ui.allocate_ui(egui::vec2(email_width, 24.0), |ui| {
                            ui.label(&user.email);
                        });
                        ui.allocate_ui(egui::vec2(role_width, 24.0), |ui| {
                            draw_role_badge(ui, user.role);
                        });

                        // The signed-in admin cannot delete themselves
                        let deletable = user.id != current_user_id;
                        let deleting = self.users.deleting_id.as_deref() == Some(&user.id);

                        if deleting {
                            ui.spinner();
                        } else if deletable {
                            let delete_button = egui::Button::new(
                                egui::RichText::new("Delete")
                                    .color(colors::TEXT_WHITE)
                                    .font(egui::FontId::new(
                                        12.0,
                                        egui::FontFamily::Proportional,
                                    )),
                            )
                            .fill(colors::DANGER)
                            .rounding(egui::Rounding::same(5.0));

                            if ui.add(delete_button).clicked() {
                                log::info!("🗑️ Arming delete for user {}", user.id);
                                self.users.pending_delete = Some(user.clone());
                            }
                        }
                    });
                }

                if users.is_empty() {
                    ui.add_space(20.0);
                    ui.vertical_centered(|ui| {
                        ui.label(
                            egui::RichText::new("No users found").color(colors::TEXT_SECONDARY),
                        );
                    });
                }
            });
    }
}

/// Colored role badge
fn draw_role_badge(ui: &mut egui::Ui, role: UserRole) {
    let (fill, text) = match role {
        UserRole::Admin => (colors::ACTIVE_BACKGROUND, colors::TEXT_WHITE),
        UserRole::Faculty => (colors::GOLD, colors::TEXT_WHITE),
        UserRole::Student => (colors::INACTIVE_BACKGROUND, colors::TEXT_PRIMARY),
    };

    let badge = egui::Button::new(
        egui::RichText::new(role.label())
            .font(egui::FontId::new(12.0, egui::FontFamily::Proportional))
            .color(text),
    )
    .fill(fill)
    .stroke(egui::Stroke::NONE)
    .rounding(egui::Rounding::same(10.0))
    .sense(egui::Sense::hover());

    ui.add(badge);
}
