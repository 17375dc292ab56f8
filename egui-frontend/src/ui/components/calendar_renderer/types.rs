//! View models for the calendar grid: day cells and appointment chips.

use eframe::egui;
use shared::{Appointment, CalendarDate};

use crate::ui::components::theme::CURRENT_THEME;

/// Distinguishes days of the displayed month from the padding days of
/// the adjacent months that fill out the 6x7 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarDayType {
    /// A day in the current month being displayed
    CurrentMonth,
    /// A filler day from the previous or next month
    FillerDay,
}

impl CalendarDayType {
    /// Get the background color for this day type
    pub fn background_color(&self, is_today: bool) -> egui::Color32 {
        if is_today {
            // Warm tint so today stands out even unselected
            egui::Color32::from_rgb(252, 246, 227)
        } else {
            match self {
                CalendarDayType::CurrentMonth => CURRENT_THEME.calendar.current_month_bg,
                CalendarDayType::FillerDay => CURRENT_THEME.calendar.filler_day_bg,
            }
        }
    }

    /// Get the border color for this day type
    pub fn border_color(&self, is_today: bool) -> egui::Color32 {
        if is_today {
            CURRENT_THEME.calendar.today_border
        } else {
            match self {
                CalendarDayType::CurrentMonth => egui::Color32::from_rgb(210, 210, 210),
                CalendarDayType::FillerDay => egui::Color32::from_rgb(222, 219, 215),
            }
        }
    }

    /// Get the day number text color for this day type
    pub fn day_text_color(&self) -> egui::Color32 {
        match self {
            CalendarDayType::CurrentMonth => egui::Color32::BLACK,
            CalendarDayType::FillerDay => egui::Color32::from_rgb(150, 150, 150),
        }
    }
}

/// An appointment chip displayed inside a day cell.
#[derive(Debug, Clone)]
pub struct AppointmentChip {
    pub appointment: Appointment,
    /// Pre-formatted label, e.g. "8:00 AM Thesis Consult"
    pub label: String,
}

impl AppointmentChip {
    pub fn from_appointment(appointment: &Appointment) -> Self {
        let time = appointment
            .start_time
            .and_then(|t| t.to_local_datetime())
            .map(|dt| dt.format("%-I:%M %p").to_string());
        let label = match time {
            Some(time) => format!("{} {}", time, appointment.title),
            None => appointment.title.clone(),
        };
        Self {
            appointment: appointment.clone(),
            label,
        }
    }

    /// Chip color follows the appointment status
    pub fn color(&self) -> egui::Color32 {
        CURRENT_THEME.status_color(self.appointment.status)
    }
}

/// Everything needed to render one day cell, gathered up front so the
/// render loop does not borrow app state.
pub struct CalendarDayView {
    pub date: CalendarDate,
    pub day_type: CalendarDayType,
    pub is_today: bool,
    pub is_selected: bool,
    pub is_expanded: bool,
    pub chips: Vec<AppointmentChip>,
}

/// What the user did to a day cell this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayInteraction {
    Selected(CalendarDate),
    Expanded(CalendarDate),
}
