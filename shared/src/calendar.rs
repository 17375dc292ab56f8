//! # Calendar Core
//!
//! Pure month-grid and day-bucketing logic shared by every calendar
//! surface (the full schedule view and the dashboard mini calendar).
//!
//! ## Responsibilities:
//! - Generate the fixed 6x7 Sunday-first month grid
//! - Bucket appointments onto local calendar dates
//! - Track the displayed month and the selected day (`MonthCursor`)
//!
//! Months are 0-based (0 = January) to match the wire convention used
//! throughout the system. All functions here are pure; the cursor is
//! the only mutable state and it lives in the caller.

use chrono::{Datelike, Local, NaiveDate};

use crate::Appointment;

/// Every rendered month is exactly 6 weeks of 7 days.
pub const GRID_CELLS: usize = 42;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A calendar day as a plain value. Structural equality is what the
/// grid and the selection logic compare with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarDate {
    pub year: i32,
    /// 0-based month, 0 = January.
    pub month: u32,
    /// 1-based day of month.
    pub day: u32,
}

impl CalendarDate {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    pub fn from_naive(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month0(),
            day: date.day(),
        }
    }

    /// The system's local date.
    pub fn today() -> Self {
        Self::from_naive(Local::now().date_naive())
    }

    pub fn to_naive(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month + 1, self.day)
    }

    /// Day of week with 0 = Sunday, matching grid column order.
    pub fn weekday(self) -> u32 {
        self.to_naive()
            .map(|d| d.weekday().num_days_from_sunday())
            .unwrap_or(0)
    }
}

/// One cell of the 42-cell grid. Cells outside the displayed month are
/// rendered muted and carry real dates from the adjacent months.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCell {
    pub date: CalendarDate,
    pub is_current_month: bool,
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a month (0-based month index).
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        0 | 2 | 4 | 6 | 7 | 9 | 11 => 31,
        3 | 5 | 8 | 10 => 30,
        1 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 30,
    }
}

/// English month name for a 0-based month index.
pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES.get(month as usize).copied().unwrap_or("Unknown")
}

/// Weekday column (0 = Sunday) of the first day of the month.
pub fn first_weekday_of_month(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month + 1, 1)
        .map(|d| d.weekday().num_days_from_sunday())
        .unwrap_or(0)
}

/// Fold an arbitrary (year, signed month) pair into a canonical
/// `(year, 0..=11)` pair. `month = -1` is December of the prior year.
fn normalize_month(year: i32, month: i32) -> (i32, u32) {
    (year + month.div_euclid(12), month.rem_euclid(12) as u32)
}

/// Generate the Sunday-first month grid: leading days from the prior
/// month, the full current month, then trailing days from the next
/// month, always totalling [`GRID_CELLS`].
pub fn generate_month_grid(year: i32, month: i32) -> Vec<CalendarCell> {
    let (year, month) = normalize_month(year, month);
    let lead = first_weekday_of_month(year, month);
    let current_days = days_in_month(year, month);

    let (prev_year, prev_month) = normalize_month(year, month as i32 - 1);
    let (next_year, next_month) = normalize_month(year, month as i32 + 1);
    let prev_days = days_in_month(prev_year, prev_month);

    let mut cells = Vec::with_capacity(GRID_CELLS);

    for i in 0..lead {
        let day = prev_days - lead + 1 + i;
        cells.push(CalendarCell {
            date: CalendarDate::new(prev_year, prev_month, day),
            is_current_month: false,
        });
    }

    for day in 1..=current_days {
        cells.push(CalendarCell {
            date: CalendarDate::new(year, month, day),
            is_current_month: true,
        });
    }

    let mut day = 1;
    while cells.len() < GRID_CELLS {
        cells.push(CalendarCell {
            date: CalendarDate::new(next_year, next_month, day),
            is_current_month: false,
        });
        day += 1;
    }

    cells
}

/// All appointments whose start instant falls on `date` in the local
/// timezone, preserving input order. Appointments without a usable
/// timestamp are skipped.
pub fn appointments_on_date<'a>(
    appointments: &'a [Appointment],
    date: CalendarDate,
) -> Vec<&'a Appointment> {
    let target = date.to_naive();
    if target.is_none() {
        return Vec::new();
    }
    appointments
        .iter()
        .filter(|a| a.start_date() == target)
        .collect()
}

/// Which month the calendar is showing, plus the selected day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    pub year: i32,
    /// 0-based month, 0 = January.
    pub month: u32,
    pub selected: Option<CalendarDate>,
}

impl MonthCursor {
    /// Cursor on the system's current month with nothing selected.
    pub fn now() -> Self {
        let today = CalendarDate::today();
        Self {
            year: today.year,
            month: today.month,
            selected: None,
        }
    }

    pub fn previous_month(&mut self) {
        let (year, month) = normalize_month(self.year, self.month as i32 - 1);
        self.year = year;
        self.month = month;
    }

    pub fn next_month(&mut self) {
        let (year, month) = normalize_month(self.year, self.month as i32 + 1);
        self.year = year;
        self.month = month;
    }

    /// Jump back to the current month and select today's date.
    pub fn today(&mut self) {
        let today = CalendarDate::today();
        self.year = today.year;
        self.month = today.month;
        self.selected = Some(today);
    }

    /// Change the year, keeping the month and selection.
    pub fn select_year(&mut self, year: i32) {
        self.year = year;
    }

    pub fn select_date(&mut self, date: CalendarDate) {
        self.selected = Some(date);
    }

    pub fn month_name(&self) -> &'static str {
        month_name(self.month)
    }

    pub fn grid(&self) -> Vec<CalendarCell> {
        generate_month_grid(self.year, self.month as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AppointmentStatus, WireTimestamp};

    fn appointment(id: &str, start: Option<WireTimestamp>) -> Appointment {
        Appointment {
            id: id.to_string(),
            title: format!("Appointment {}", id),
            description: None,
            start_time: start,
            end_time: None,
            faculty_name: None,
            status: AppointmentStatus::Pending,
            has_approved: None,
            participants: vec![],
        }
    }

    #[test]
    fn test_grid_always_has_42_cells() {
        for year in [1999, 2020, 2023, 2024, 2025, 2100] {
            for month in 0..12 {
                let grid = generate_month_grid(year, month);
                assert_eq!(grid.len(), GRID_CELLS, "{}-{}", year, month);
            }
        }
    }

    #[test]
    fn test_grid_starts_on_sunday_column() {
        // March 2024 starts on a Friday, so the grid leads with five
        // February days and cell 0 must sit in the Sunday column.
        let grid = generate_month_grid(2024, 2);
        assert_eq!(grid[0].date.weekday(), 0);
        assert_eq!(grid[0].date, CalendarDate::new(2024, 1, 25));
        assert!(!grid[0].is_current_month);
        assert_eq!(grid[5].date, CalendarDate::new(2024, 2, 1));
        assert!(grid[5].is_current_month);
    }

    #[test]
    fn test_leap_february_grid() {
        // February 2024: 29 days, the 1st falls on a Thursday.
        let grid = generate_month_grid(2024, 1);
        let current: Vec<_> = grid.iter().filter(|c| c.is_current_month).collect();
        assert_eq!(current.len(), 29);
        assert_eq!(current[0].date.day, 1);
        assert_eq!(current[0].date.weekday(), 4);
        assert_eq!(current.last().unwrap().date.day, 29);
    }

    #[test]
    fn test_january_2024_grid_shape() {
        // January 1, 2024 is a Monday: one leading December cell, then
        // 31 current cells, then ten trailing February cells.
        let grid = generate_month_grid(2024, 0);
        assert_eq!(grid[0].date, CalendarDate::new(2023, 11, 31));
        assert!(!grid[0].is_current_month);
        assert_eq!(grid[1].date, CalendarDate::new(2024, 0, 1));
        assert!(grid[1].is_current_month);
        assert_eq!(grid[31].date, CalendarDate::new(2024, 0, 31));
        assert!(grid[31].is_current_month);
        assert_eq!(grid[32].date, CalendarDate::new(2024, 1, 1));
        assert!(!grid[32].is_current_month);
        assert_eq!(grid[41].date, CalendarDate::new(2024, 1, 10));
    }

    #[test]
    fn test_current_month_cells_form_one_contiguous_run() {
        for month in 0..12 {
            let grid = generate_month_grid(2025, month);
            let first = grid.iter().position(|c| c.is_current_month).unwrap();
            let last = grid.iter().rposition(|c| c.is_current_month).unwrap();
            let run = &grid[first..=last];
            assert!(run.iter().all(|c| c.is_current_month));
            assert_eq!(run.len() as u32, days_in_month(2025, month as u32));
        }
    }

    #[test]
    fn test_grid_normalizes_out_of_range_months() {
        assert_eq!(generate_month_grid(2024, -1), generate_month_grid(2023, 11));
        assert_eq!(generate_month_grid(2024, 12), generate_month_grid(2025, 0));
    }

    #[test]
    fn test_grid_is_deterministic() {
        assert_eq!(generate_month_grid(2024, 6), generate_month_grid(2024, 6));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 1), 29);
        assert_eq!(days_in_month(2023, 1), 28);
        assert_eq!(days_in_month(1900, 1), 28);
        assert_eq!(days_in_month(2000, 1), 29);
        assert_eq!(days_in_month(2024, 0), 31);
        assert_eq!(days_in_month(2024, 3), 30);
    }

    #[test]
    fn test_binning_groups_by_local_date_in_stable_order() {
        // Instants hugging the midnight boundary: 00:05 and 23:30 both
        // belong to this local day, 00:05 the next morning does not.
        let day = NaiveDate::from_ymd_opt(2024, 3, 18).unwrap();
        let next_day = day.succ_opt().unwrap();
        let just_after_midnight = day.and_hms_opt(0, 5, 0).unwrap();
        let just_before_midnight = day.and_hms_opt(23, 30, 0).unwrap();
        let next_morning = next_day.and_hms_opt(0, 5, 0).unwrap();
        let local = |dt: chrono::NaiveDateTime| {
            WireTimestamp::new(
                dt.and_local_timezone(Local).single().unwrap().timestamp(),
                0,
            )
        };

        let appointments = vec![
            appointment("a", Some(local(just_after_midnight))),
            appointment("b", Some(local(next_morning))),
            appointment("c", Some(local(just_before_midnight))),
            appointment("d", None),
        ];

        let binned = appointments_on_date(&appointments, CalendarDate::from_naive(day));
        let ids: Vec<_> = binned.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);

        let next = appointments_on_date(&appointments, CalendarDate::from_naive(next_day));
        let next_ids: Vec<_> = next.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(next_ids, vec!["b"]);
    }

    #[test]
    fn test_binning_is_idempotent() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 18).unwrap();
        let ts = day
            .and_hms_opt(8, 0, 0)
            .unwrap()
            .and_local_timezone(Local)
            .single()
            .unwrap()
            .timestamp();
        let appointments = vec![appointment("a", Some(WireTimestamp::new(ts, 0)))];
        let date = CalendarDate::from_naive(day);

        let first = appointments_on_date(&appointments, date);
        let second = appointments_on_date(&appointments, date);
        assert_eq!(first.len(), 1);
        assert_eq!(first.len(), second.len());
        assert_eq!(first[0].id, second[0].id);
    }

    #[test]
    fn test_binning_skips_invalid_timestamps() {
        let appointments = vec![
            appointment("bad", Some(WireTimestamp::new(0, 2_000_000_000))),
            appointment("none", None),
        ];
        let binned =
            appointments_on_date(&appointments, CalendarDate::new(1970, 0, 1));
        assert!(binned.is_empty());
    }

    #[test]
    fn test_each_appointment_lands_in_at_most_one_cell() {
        let day = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let ts = day
            .and_hms_opt(10, 0, 0)
            .unwrap()
            .and_local_timezone(Local)
            .single()
            .unwrap()
            .timestamp();
        let appointments = vec![appointment("a", Some(WireTimestamp::new(ts, 0)))];

        let grid = generate_month_grid(2024, 5);
        let hits = grid
            .iter()
            .filter(|cell| !appointments_on_date(&appointments, cell.date).is_empty())
            .count();
        assert_eq!(hits, 1);
    }

    #[test]
    fn test_cursor_wraps_across_year_boundaries() {
        let mut cursor = MonthCursor {
            year: 2024,
            month: 0,
            selected: None,
        };
        cursor.previous_month();
        assert_eq!((cursor.year, cursor.month), (2023, 11));
        cursor.next_month();
        assert_eq!((cursor.year, cursor.month), (2024, 0));

        cursor.month = 11;
        cursor.next_month();
        assert_eq!((cursor.year, cursor.month), (2025, 0));
    }

    #[test]
    fn test_cursor_navigation_preserves_selection() {
        let mut cursor = MonthCursor {
            year: 2024,
            month: 5,
            selected: Some(CalendarDate::new(2024, 5, 10)),
        };
        cursor.next_month();
        cursor.select_year(2030);
        assert_eq!(cursor.selected, Some(CalendarDate::new(2024, 5, 10)));
        assert_eq!((cursor.year, cursor.month), (2030, 6));
    }

    #[test]
    fn test_cursor_today_selects_system_date() {
        let mut cursor = MonthCursor {
            year: 1999,
            month: 3,
            selected: None,
        };
        cursor.today();
        let today = CalendarDate::today();
        assert_eq!((cursor.year, cursor.month), (today.year, today.month));
        assert_eq!(cursor.selected, Some(today));
    }

    #[test]
    fn test_month_names() {
        assert_eq!(month_name(0), "January");
        assert_eq!(month_name(11), "December");
        assert_eq!(month_name(12), "Unknown");
    }
}
