//! # Dashboard Renderer Module
//!
//! This module renders the dashboard tab: aggregate stat cards, the
//! most-booked faculty bar chart, and a compact mini calendar that
//! marks days with bookings.
//!
//! ## Key Functions:
//! - `draw_dashboard_section()` - Dashboard layout with loading/error states
//! - `render_most_booked_chart()` - Bar chart via egui_plot
//! - `draw_mini_calendar()` - Compact month grid reusing the shared
//!   calendar core
//!
//! The mini calendar runs on the same `generate_month_grid` and
//! binning logic as the schedule view, so both always agree on which
//! days are booked.

use eframe::egui;
use egui_plot::{Bar, BarChart, Plot};
use shared::{appointments_on_date, CalendarDate};

use crate::ui::app_state::SchedulerApp;
use crate::ui::components::styling::draw_card_background;
use crate::ui::components::theme::colors;

impl SchedulerApp {
    /// Draw the dashboard section
    pub fn draw_dashboard_section(&mut self, ui: &mut egui::Ui, available_rect: egui::Rect) {
        let content_margin = 20.0;
        let content_rect = egui::Rect::from_min_size(
            available_rect.min + egui::vec2(content_margin, 0.0),
            available_rect.size() - egui::vec2(content_margin * 2.0, content_margin),
        );

        ui.allocate_ui_at_rect(content_rect, |ui| {
            if self.dashboard.loading && self.dashboard.stats.is_none() {
                ui.vertical_centered(|ui| {
                    ui.add_space(content_rect.height() / 3.0);
                    ui.spinner();
                    ui.label("Loading dashboard...");
                });
                return;
            }

            if let Some(error) = self.dashboard.error.clone() {
                ui.vertical_centered(|ui| {
                    ui.add_space(content_rect.height() / 3.0);
                    ui.colored_label(colors::DANGER, format!("❌ {}", error));
                    ui.add_space(10.0);
                    if ui.button("Retry").clicked() {
                        self.reload_dashboard();
                    }
                });
                return;
            }

            self.draw_stat_cards(ui);
            ui.add_space(15.0);

            // Chart on the left, mini calendar on the right
            let remaining = ui.available_rect_before_wrap();
            let chart_width = remaining.width() * 0.58;
            let calendar_width = remaining.width() - chart_width - 15.0;

            ui.horizontal(|ui| {
                let chart_rect = egui::Rect::from_min_size(
                    remaining.min,
                    egui::vec2(chart_width, remaining.height()),
                );
                draw_card_background(ui, chart_rect);
                ui.allocate_ui_at_rect(chart_rect.shrink(12.0), |ui| {
                    self.render_most_booked_chart(ui);
                });

                let calendar_rect = egui::Rect::from_min_size(
                    egui::pos2(remaining.min.x + chart_width + 15.0, remaining.min.y),
                    egui::vec2(calendar_width, remaining.height()),
                );
                draw_card_background(ui, calendar_rect);
                ui.allocate_ui_at_rect(calendar_rect.shrink(12.0), |ui| {
                    self.draw_mini_calendar(ui);
                });
            });
        });
    }

    /// Stat cards: totals by status plus active users
    fn draw_stat_cards(&mut self, ui: &mut egui::Ui) {
        let stats = self.dashboard.stats.unwrap_or_default();
        let user_count = self.users.users.len();

        let cards: [(&str, String, egui::Color32); 4] = [
            (
                "Total Appointments",
                stats.total_appointments.to_string(),
                colors::TEXT_HEADING,
            ),
            (
                "Confirmed",
                stats.confirmed_appointments.to_string(),
                crate::ui::components::theme::CURRENT_THEME.status.confirmed,
            ),
            (
                "Pending",
                stats.pending_appointments.to_string(),
                crate::ui::components::theme::CURRENT_THEME.status.pending,
            ),
            ("Registered Users", user_count.to_string(), colors::GOLD),
        ];

        let spacing = 15.0;
        let card_width =
            (ui.available_width() - spacing * (cards.len() as f32 - 1.0)) / cards.len() as f32;
        let card_height = 80.0;

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = spacing;
            for (label, value, accent) in cards {
                let (rect, _) = ui.allocate_exact_size(
                    egui::vec2(card_width, card_height),
                    egui::Sense::hover(),
                );
                draw_card_background(ui, rect);
                ui.painter().text(
                    rect.center() - egui::vec2(0.0, 12.0),
                    egui::Align2::CENTER_CENTER,
                    value,
                    egui::FontId::new(26.0, egui::FontFamily::Proportional),
                    accent,
                );
                ui.painter().text(
                    rect.center() + egui::vec2(0.0, 18.0),
                    egui::Align2::CENTER_CENTER,
                    label,
                    egui::FontId::new(13.0, egui::FontFamily::Proportional),
                    colors::TEXT_SECONDARY,
                );
            }
        });
    }

    /// Bar chart of faculty ranked by booking count
    fn render_most_booked_chart(&mut self, ui: &mut egui::Ui) {
        ui.label(
            egui::RichText::new("Most Booked Faculty")
                .font(egui::FontId::new(16.0, egui::FontFamily::Proportional))
                .strong()
                .color(colors::TEXT_HEADING),
        );

        if self.dashboard.most_booked.is_empty() {
            ui.add_space(20.0);
            ui.label(
                egui::RichText::new("No booking data yet").color(colors::TEXT_SECONDARY),
            );
            return;
        }

        let names: Vec<String> = self
            .dashboard
            .most_booked
            .iter()
            .map(|row| row.faculty_name.clone())
            .collect();

        let bars: Vec<Bar> = self
            .dashboard
            .most_booked
            .iter()
            .enumerate()
            .map(|(i, row)| {
                Bar::new(i as f64, row.appointment_count as f64)
                    .width(0.6)
                    .fill(colors::ACTIVE_BACKGROUND)
            })
            .collect();

        let chart = BarChart::new(bars);

        Plot::new("most_booked_chart")
            .show_axes([false, true])
            .show_grid([false, true])
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .x_axis_formatter(move |mark, _range| {
                let index = mark.value.round() as usize;
                if (mark.value - index as f64).abs() < 0.01 {
                    names.get(index).cloned().unwrap_or_default()
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(chart);
            });
    }

    /// Compact month grid marking days that have bookings
    fn draw_mini_calendar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.small_button("<").clicked() {
                self.dashboard.mini_cursor.previous_month();
            }
            ui.label(
                egui::RichText::new(format!(
                    "{} {}",
                    self.dashboard.mini_cursor.month_name(),
                    self.dashboard.mini_cursor.year
                ))
                .strong()
                .color(colors::TEXT_HEADING),
            );
            if ui.small_button(">").clicked() {
                self.dashboard.mini_cursor.next_month();
            }
        });

        ui.add_space(4.0);

        let today = CalendarDate::today();
        let grid = self.dashboard.mini_cursor.grid();
        let cell = (ui.available_width() / 7.0).min(34.0);

        // Day-of-week initials
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;
            for initial in ["S", "M", "T", "W", "T", "F", "S"] {
                let (rect, _) =
                    ui.allocate_exact_size(egui::vec2(cell, 16.0), egui::Sense::hover());
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    initial,
                    egui::FontId::new(11.0, egui::FontFamily::Proportional),
                    colors::TEXT_SECONDARY,
                );
            }
        });

        for week in grid.chunks(7) {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 0.0;
                for day in week {
                    let (rect, _) =
                        ui.allocate_exact_size(egui::vec2(cell, cell), egui::Sense::hover());

                    let booked =
                        !appointments_on_date(&self.calendar.appointments, day.date).is_empty();

                    if day.date == today {
                        ui.painter().rect_stroke(
                            rect.shrink(2.0),
                            egui::Rounding::same(4.0),
                            egui::Stroke::new(1.5, colors::GOLD),
                        );
                    }

                    let text_color = if day.is_current_month {
                        colors::TEXT_PRIMARY
                    } else {
                        egui::Color32::from_rgb(190, 190, 190)
                    };
                    ui.painter().text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        day.date.day.to_string(),
                        egui::FontId::new(11.0, egui::FontFamily::Proportional),
                        text_color,
                    );

                    // Gold dot under booked days
                    if booked && day.is_current_month {
                        ui.painter().circle_filled(
                            egui::pos2(rect.center().x, rect.max.y - 4.0),
                            2.0,
                            colors::GOLD,
                        );
                    }
                }
            });
        }
    }
}
