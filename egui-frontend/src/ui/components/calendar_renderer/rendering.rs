//! # Calendar Grid Rendering
//!
//! This module draws the schedule tab's month calendar: the Sunday-
//! first day headers, the 6x7 grid of day cells with appointment
//! chips, and the selected-day detail panel beneath it.
//!
//! ## Key Functions:
//! - `draw_calendar_section()` - Calendar view with loading/error states
//! - `draw_calendar_grid()` - The 42-cell month grid
//! - `draw_day_cell()` - One day with its chips and "+N more" row
//!
//! Day data is gathered into view models before drawing so the render
//! loop never re-queries app state mid-frame.

use eframe::egui;
use shared::{appointments_on_date, CalendarDate};

use crate::ui::app_state::SchedulerApp;
use crate::ui::components::styling::draw_card_background;
use crate::ui::components::theme::colors;

use super::styling::*;
use super::types::*;

impl SchedulerApp {
    /// Draw the schedule calendar section
    pub fn draw_calendar_section(&mut self, ui: &mut egui::Ui, available_rect: egui::Rect) {
        let content_margin = 20.0;
        let content_rect = egui::Rect::from_min_size(
            available_rect.min + egui::vec2(content_margin, 0.0),
            available_rect.size() - egui::vec2(content_margin * 2.0, content_margin),
        );

        draw_card_background(ui, content_rect);

        let inner_rect = content_rect.shrink(12.0);
        ui.allocate_ui_at_rect(inner_rect, |ui| {
            if self.calendar.loading {
                ui.vertical_centered(|ui| {
                    ui.add_space(inner_rect.height() / 3.0);
                    ui.spinner();
                    ui.label("Loading appointments...");
                });
                return;
            }

            if let Some(error) = self.calendar.error.clone() {
                ui.vertical_centered(|ui| {
                    ui.add_space(inner_rect.height() / 3.0);
                    ui.colored_label(colors::DANGER, format!("❌ {}", error));
                    ui.add_space(10.0);
                    if ui.button("Retry").clicked() {
                        self.reload_appointments();
                    }
                });
                return;
            }

            // Reserve the lower quarter for the selected-day panel
            let detail_height = (inner_rect.height() * 0.25).clamp(90.0, 160.0);
            let grid_height = inner_rect.height() - detail_height - 10.0;

            self.draw_calendar_grid(ui, inner_rect.width(), grid_height);

            ui.add_space(10.0);
            self.draw_selected_day_panel(ui);
        });
    }

    /// Draw day-of-week headers and the 42-cell month grid
    fn draw_calendar_grid(&mut self, ui: &mut egui::Ui, width: f32, height: f32) {
        let header_height = 24.0;
        let cell_width = width / GRID_COLS as f32;
        let cell_height = (height - header_height) / GRID_ROWS as f32;

        // Day-of-week headers, Sunday first
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;
            for header in DAY_HEADERS {
                let (rect, _) = ui.allocate_exact_size(
                    egui::vec2(cell_width, header_height),
                    egui::Sense::hover(),
                );
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    header,
                    egui::FontId::new(13.0, egui::FontFamily::Proportional),
                    colors::TEXT_HEADING,
                );
            }
        });

        // Gather view models up front, then render
        let days = self.collect_day_views();
        let mut interaction = None;

        for week in days.chunks(GRID_COLS) {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 0.0;
                for day in week {
                    if let Some(action) = draw_day_cell(ui, day, cell_width, cell_height) {
                        interaction = Some(action);
                    }
                }
            });
        }

        if let Some(action) = interaction {
            self.handle_day_interaction(action);
        }
    }

    /// Build the per-day view models for the displayed month
    fn collect_day_views(&self) -> Vec<CalendarDayView> {
        let today = CalendarDate::today();
        self.calendar
            .cursor
            .grid()
            .into_iter()
            .map(|cell| {
                let chips: Vec<AppointmentChip> =
                    appointments_on_date(&self.calendar.appointments, cell.date)
                        .into_iter()
                        .map(AppointmentChip::from_appointment)
                        .collect();
                CalendarDayView {
                    date: cell.date,
                    day_type: if cell.is_current_month {
                        CalendarDayType::CurrentMonth
                    } else {
                        CalendarDayType::FillerDay
                    },
                    is_today: cell.date == today,
                    is_selected: self.calendar.cursor.selected == Some(cell.date),
                    is_expanded: self.calendar.expanded_day == Some(cell.date),
                    chips,
                }
            })
            .collect()
    }

    /// Panel listing the selected day's appointments in full
    fn draw_selected_day_panel(&mut self, ui: &mut egui::Ui) {
        let Some(selected) = self.calendar.cursor.selected else {
            ui.label(
                egui::RichText::new("Select a day to see its appointments")
                    .color(colors::TEXT_SECONDARY),
            );
            return;
        };

        let appointments: Vec<_> =
            appointments_on_date(&self.calendar.appointments, selected)
                .into_iter()
                .cloned()
                .collect();

        let title = format!(
            "{} {}, {}",
            shared::calendar::month_name(selected.month),
            selected.day,
            selected.year
        );
        ui.label(
            egui::RichText::new(title)
                .font(egui::FontId::new(16.0, egui::FontFamily::Proportional))
                .strong()
                .color(colors::TEXT_HEADING),
        );

        if appointments.is_empty() {
            ui.label(
                egui::RichText::new("No appointments on this day").color(colors::TEXT_SECONDARY),
            );
            return;
        }

        egui::ScrollArea::vertical()
            .id_source("selected_day_panel")
            .show(ui, |ui| {
                for appointment in &appointments {
                    ui.horizontal(|ui| {
                        let status_color =
                            crate::ui::components::theme::CURRENT_THEME
                                .status_color(appointment.status);
                        ui.colored_label(status_color, "●");

                        if let Some(range) = appointment.time_range_label() {
                            ui.label(
                                egui::RichText::new(range).strong().color(colors::TEXT_PRIMARY),
                            );
                        }
                        ui.label(&appointment.title);

                        if let Some(faculty) = &appointment.faculty_name {
                            ui.label(
                                egui::RichText::new(format!("with {}", faculty))
                                    .color(colors::TEXT_SECONDARY),
                            );
                        }
                        ui.label(
                            egui::RichText::new(appointment.status.label())
                                .color(status_color),
                        );
                    });
                }
            });
    }
}

/// Draw one day cell, returning any interaction it produced.
fn draw_day_cell(
    ui: &mut egui::Ui,
    day: &CalendarDayView,
    width: f32,
    height: f32,
) -> Option<DayInteraction> {
    let (cell_rect, response) = ui.allocate_exact_size(
        egui::vec2(width, height),
        egui::Sense::click(),
    );

    // Background with hover and selection treatment
    let bg_color = if day.is_selected {
        crate::ui::components::theme::CURRENT_THEME
            .calendar
            .selected_background
    } else if response.hovered() {
        egui::Color32::from_rgb(247, 243, 236)
    } else {
        day.day_type.background_color(day.is_today)
    };
    ui.painter()
        .rect_filled(cell_rect, egui::Rounding::same(2.0), bg_color);

    // Border: selection beats today beats the plain outline
    if day.is_selected {
        ui.painter().rect_stroke(
            cell_rect,
            egui::Rounding::same(2.0),
            egui::Stroke::new(
                2.0,
                crate::ui::components::theme::CURRENT_THEME
                    .calendar
                    .selected_border,
            ),
        );
    } else if day.is_today {
        ui.painter().rect_stroke(
            cell_rect,
            egui::Rounding::same(2.0),
            egui::Stroke::new(2.0, day.day_type.border_color(true)),
        );
    } else {
        ui.painter().rect_stroke(
            cell_rect,
            egui::Rounding::same(2.0),
            egui::Stroke::new(0.5, day.day_type.border_color(false)),
        );
    }

    let mut interaction = None;
    if response.clicked() {
        interaction = Some(DayInteraction::Selected(day.date));
    }

    // Day number in the upper left
    let number_pos = cell_rect.min + egui::vec2(6.0, 4.0);
    ui.painter().text(
        number_pos,
        egui::Align2::LEFT_TOP,
        day.date.day.to_string(),
        egui::FontId::new(day_number_font_size(width), egui::FontFamily::Proportional),
        day.day_type.day_text_color(),
    );

    // Appointment chips below the number
    let chip_h = chip_height(height);
    let chip_font = chip_font_size(width);
    let mut chip_y = cell_rect.min.y + day_number_font_size(width) + 8.0;

    let visible = if day.is_expanded {
        day.chips.len()
    } else {
        day.chips.len().min(MAX_VISIBLE_CHIPS)
    };

    for chip in day.chips.iter().take(visible) {
        if chip_y + chip_h > cell_rect.max.y - 2.0 {
            break;
        }
        let chip_rect = egui::Rect::from_min_size(
            egui::pos2(cell_rect.min.x + 4.0, chip_y),
            egui::vec2(width - 8.0, chip_h),
        );
        ui.painter()
            .rect_filled(chip_rect, egui::Rounding::same(3.0), chip.color());
        ui.painter().text(
            chip_rect.left_center() + egui::vec2(4.0, 0.0),
            egui::Align2::LEFT_CENTER,
            truncate_label(&chip.label, width),
            egui::FontId::new(chip_font, egui::FontFamily::Proportional),
            egui::Color32::WHITE,
        );
        chip_y += chip_h + 2.0;
    }

    // Overflow row: "+N more" expands the day in place
    let hidden = day.chips.len().saturating_sub(visible);
    if hidden > 0 && chip_y + chip_h <= cell_rect.max.y {
        let more_rect = egui::Rect::from_min_size(
            egui::pos2(cell_rect.min.x + 4.0, chip_y),
            egui::vec2(width - 8.0, chip_h),
        );
        let more_response = ui.allocate_rect(more_rect, egui::Sense::click());
        ui.painter().text(
            more_rect.left_center() + egui::vec2(4.0, 0.0),
            egui::Align2::LEFT_CENTER,
            format!("+{} more", hidden),
            egui::FontId::new(chip_font, egui::FontFamily::Proportional),
            colors::TEXT_SECONDARY,
        );
        if more_response.clicked() {
            interaction = Some(DayInteraction::Expanded(day.date));
        }
    }

    interaction
}

/// Keep chip labels from spilling out of narrow cells.
fn truncate_label(label: &str, cell_width: f32) -> String {
    let max_chars = ((cell_width - 12.0) / 6.0).max(4.0) as usize;
    if label.chars().count() <= max_chars {
        label.to_string()
    } else {
        let truncated: String = label.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_label_keeps_short_labels() {
        assert_eq!(truncate_label("9:00 AM", 200.0), "9:00 AM");
    }

    #[test]
    fn test_truncate_label_shortens_long_labels() {
        let long = "9:00 AM Capstone Consultation With A Very Long Title";
        let truncated = truncate_label(long, 80.0);
        assert!(truncated.ends_with('…'));
        assert!(truncated.chars().count() < long.chars().count());
    }
}
