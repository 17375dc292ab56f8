//! # Dashboard State Module
//!
//! State backing the dashboard tab: aggregate stats, the most-booked
//! faculty ranking, and the mini calendar's month cursor.

use shared::{AppointmentStats, MonthCursor, MostBookedFaculty};

pub struct DashboardState {
    /// Aggregate appointment counts for the stat cards
    pub stats: Option<AppointmentStats>,

    /// Faculty ranked by booking count, for the bar chart
    pub most_booked: Vec<MostBookedFaculty>,

    /// Mini calendar month cursor (independent from the schedule view)
    pub mini_cursor: MonthCursor,

    pub loading: bool,
    pub error: Option<String>,

    /// Generation of the newest dashboard fetch issued
    pub generation: u64,
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            stats: None,
            most_booked: Vec::new(),
            mini_cursor: MonthCursor::now(),
            loading: false,
            error: None,
            generation: 0,
        }
    }

    pub fn next_generation(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    pub fn accepts_generation(&self, generation: u64) -> bool {
        generation == self.generation
    }
}
