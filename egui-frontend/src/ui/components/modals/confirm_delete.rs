//! # Delete Confirmation Modal
//!
//! Confirmation dialog shown before a user account is deleted.

use eframe::egui;

use crate::ui::app_state::SchedulerApp;
use crate::ui::components::theme::colors;

impl SchedulerApp {
    /// Render the delete confirmation modal
    pub fn render_delete_confirmation(&mut self, ctx: &egui::Context) {
        let Some(user) = self.users.pending_delete.clone() else {
            return;
        };

        egui::Area::new(egui::Id::new("confirm_delete_overlay"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
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
                            .stroke(egui::Stroke::new(2.0, colors::DANGER))
                            .rounding(egui::Rounding::same(12.0))
                            .inner_margin(egui::Margin::same(25.0))
                            .show(ui, |ui| {
                                ui.set_min_size(egui::vec2(380.0, 160.0));
                                ui.set_max_size(egui::vec2(380.0, 160.0));

                                ui.vertical_centered(|ui| {
                                    ui.label(
                                        egui::RichText::new("Delete user?")
                                            .font(egui::FontId::new(
                                                20.0,
                                                egui::FontFamily::Proportional,
                                            ))
                                            .strong()
                                            .color(colors::DANGER),
                                    );
                                    ui.add_space(10.0);
                                    ui.label(format!(
                                        "This will permanently remove {} ({}).",
                                        user.full_name(),
                                        user.email
                                    ));
                                    ui.add_space(20.0);

                                    ui.horizontal(|ui| {
                                        let offset = (ui.available_width() - 220.0) / 2.0;
                                        if offset > 0.0 {
                                            ui.add_space(offset);
                                        }

                                        let delete_button = egui::Button::new(
                                            egui::RichText::new("Delete")
                                                .color(colors::TEXT_WHITE),
                                        )
                                        .fill(colors::DANGER)
                                        .rounding(egui::Rounding::same(8.0))
                                        .min_size(egui::vec2(100.0, 34.0));

                                        if ui.add(delete_button).clicked() {
                                            log::info!(
                                                "🗑️ Confirmed delete for user {}",
                                                user.id
                                            );
                                            self.users.deleting_id = Some(user.id.clone());
                                            self.users.pending_delete = None;
                                            self.fetcher.delete_user(user.id.clone());
                                        }

                                        ui.add_space(20.0);

                                        if ui
                                            .add(
                                                egui::Button::new("Cancel")
                                                    .rounding(egui::Rounding::same(8.0))
                                                    .min_size(egui::vec2(100.0, 34.0)),
                                            )
                                            .clicked()
                                        {
                                            self.users.pending_delete = None;
                                        }
                                    });
                                });
                            });
                    });
                });
            });
    }
}
