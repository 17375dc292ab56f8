//! # Calendar State Module
//!
//! This module contains all state related to the schedule calendar
//! view and its navigation.
//!
//! ## Responsibilities:
//! - Month cursor (displayed month, selected day)
//! - Appointment data for calendar display
//! - Calendar loading and error state, including fetch generations
//!
//! ## Purpose:
//! This isolates all calendar-specific state management, making it
//! easier to maintain and test calendar functionality independently.
//! The grid math itself lives in `shared::calendar`; this struct only
//! tracks what the view is showing.

use shared::{Appointment, CalendarDate, MonthCursor};

/// Calendar-specific state for month navigation and display
pub struct CalendarViewState {
    /// Displayed month and selected day
    pub cursor: MonthCursor,

    /// Appointments backing the current grid
    pub appointments: Vec<Appointment>,

    /// Whether an appointment fetch is in flight
    pub loading: bool,

    /// Error from the most recent fetch, shown with a Retry button
    pub error: Option<String>,

    /// Day expanded to show all appointment chips instead of two
    pub expanded_day: Option<CalendarDate>,

    /// Generation of the newest appointment fetch issued. Responses
    /// carrying an older generation are stale and get dropped.
    pub generation: u64,
}

impl CalendarViewState {
    /// Create new calendar state on the current month
    pub fn new() -> Self {
        Self {
            cursor: MonthCursor::now(),
            appointments: Vec::new(),
            loading: false,
            error: None,
            expanded_day: None,
            generation: 0,
        }
    }

    /// Advance the fetch generation, invalidating in-flight requests.
    pub fn next_generation(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Whether a response with this generation is still current.
    pub fn accepts_generation(&self, generation: u64) -> bool {
        generation == self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stale_generations_are_rejected() {
        let mut state = CalendarViewState::new();
        let first = state.next_generation();
        let second = state.next_generation();

        assert!(!state.accepts_generation(first));
        assert!(state.accepts_generation(second));
    }

    #[test]
    fn test_new_state_starts_on_current_month() {
        let state = CalendarViewState::new();
        let now = MonthCursor::now();
        assert_eq!(state.cursor.year, now.year);
        assert_eq!(state.cursor.month, now.month);
        assert!(state.cursor.selected.is_none());
        assert!(!state.loading);
    }
}
