//! Layout constants and sizing helpers for the calendar grid.

/// Chips shown per day before collapsing into a "+N more" row.
pub const MAX_VISIBLE_CHIPS: usize = 2;

/// Rows and columns of the month grid.
pub const GRID_ROWS: usize = 6;
pub const GRID_COLS: usize = 7;

/// Day-of-week header labels, Sunday first.
pub const DAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Font size for the day number, scaled with cell width.
pub fn day_number_font_size(cell_width: f32) -> f32 {
    (cell_width * 0.16).clamp(12.0, 18.0)
}

/// Font size for appointment chips, scaled with cell width.
pub fn chip_font_size(cell_width: f32) -> f32 {
    (cell_width * 0.10).clamp(9.0, 12.0)
}

/// Height of a chip row inside a day cell.
pub fn chip_height(cell_height: f32) -> f32 {
    (cell_height * 0.18).clamp(14.0, 20.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_sizes_stay_in_bounds() {
        assert_eq!(day_number_font_size(10.0), 12.0);
        assert_eq!(day_number_font_size(500.0), 18.0);
        assert_eq!(chip_font_size(10.0), 9.0);
        assert_eq!(chip_font_size(500.0), 12.0);
    }
}
