//! # Calendar Interactions
//!
//! Applies day-cell interactions to calendar state: selecting a day
//! and expanding a day's chip overflow.

use crate::ui::app_state::SchedulerApp;

use super::types::DayInteraction;

impl SchedulerApp {
    /// Apply a day-cell interaction from this frame's render pass
    pub fn handle_day_interaction(&mut self, interaction: DayInteraction) {
        match interaction {
            DayInteraction::Selected(date) => {
                log::info!(
                    "📅 Selected day {}-{}-{}",
                    date.year,
                    date.month + 1,
                    date.day
                );
                self.calendar.cursor.select_date(date);
                // Collapse any expanded day when selection moves away
                if self.calendar.expanded_day != Some(date) {
                    self.calendar.expanded_day = None;
                }
            }
            DayInteraction::Expanded(date) => {
                log::info!(
                    "📅 Expanding day {}-{}-{}",
                    date.year,
                    date.month + 1,
                    date.day
                );
                self.calendar.expanded_day = Some(date);
                self.calendar.cursor.select_date(date);
            }
        }
    }
}
