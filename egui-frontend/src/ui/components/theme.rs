//! # Theme Configuration
//!
//! This module provides centralized color and style configuration for
//! the scheduler app. All visual styling should use these constants to
//! ensure consistency and easy theme management.
//!
//! The palette is the institutional maroon-and-gold scheme used across
//! the scheduling system's surfaces.

use eframe::egui::Color32;

/// Main theme configuration structure
#[derive(Debug, Clone)]
pub struct Theme {
    /// Interactive element colors (buttons, hover states)
    pub interactive: InteractiveColors,
    /// Background and layout colors
    pub layout: LayoutColors,
    /// Text and typography colors
    pub typography: TypographyColors,
    /// Calendar-specific colors
    pub calendar: CalendarColors,
    /// Appointment status colors
    pub status: StatusColors,
}

/// Colors for interactive elements (buttons, hover states)
#[derive(Debug, Clone)]
pub struct InteractiveColors {
    /// Primary hover border color for consistent outlines
    pub hover_border: Color32,
    /// Active/selected background color
    pub active_background: Color32,
    /// Inactive background color
    pub inactive_background: Color32,
    /// Destructive action color (delete buttons)
    pub danger: Color32,
}

/// Layout and container colors
#[derive(Debug, Clone)]
pub struct LayoutColors {
    /// Window background
    pub background: Color32,
    /// Card and container colors
    pub card_background: Color32,
    pub card_border: Color32,
}

/// Text and typography colors
#[derive(Debug, Clone)]
pub struct TypographyColors {
    /// Primary text color (main content)
    pub primary: Color32,
    /// Secondary text color (less prominent)
    pub secondary: Color32,
    /// Heading and accent text color
    pub heading: Color32,
    /// White text (for dark backgrounds)
    pub white: Color32,
}

/// Calendar-specific colors
#[derive(Debug, Clone)]
pub struct CalendarColors {
    /// Current day outline color
    pub today_border: Color32,
    /// Selected day colors
    pub selected_background: Color32,
    pub selected_border: Color32,
    /// Day-of-week header color
    pub header: Color32,
    /// Day type backgrounds
    pub current_month_bg: Color32,
    pub filler_day_bg: Color32,
}

/// Colors for appointment status chips
#[derive(Debug, Clone)]
pub struct StatusColors {
    pub confirmed: Color32,
    pub pending: Color32,
    pub cancelled: Color32,
}

/// The current active theme: institutional maroon with gold accents
pub const CURRENT_THEME: Theme = Theme {
    interactive: InteractiveColors {
        // Maroon outline used across all interactive elements
        hover_border: Color32::from_rgb(139, 0, 0),
        // Active button background (maroon)
        active_background: Color32::from_rgb(139, 0, 0),
        // Inactive button background (light gray)
        inactive_background: Color32::from_rgb(248, 248, 248),
        // Destructive actions
        danger: Color32::from_rgb(190, 40, 40),
    },
    layout: LayoutColors {
        background: Color32::from_rgb(245, 243, 240),
        card_background: Color32::WHITE,
        card_border: Color32::from_rgb(220, 220, 220),
    },
    typography: TypographyColors {
        primary: Color32::from_rgb(60, 60, 60),
        secondary: Color32::from_rgb(110, 110, 110),
        // Maroon headings
        heading: Color32::from_rgb(139, 0, 0),
        white: Color32::WHITE,
    },
    calendar: CalendarColors {
        // Gold outline marks today
        today_border: Color32::from_rgb(212, 160, 23),
        // Translucent gold, rgb(235, 215, 170) at alpha 140. Stored
        // premultiplied so the highlight blends instead of adding.
        selected_background: Color32::from_rgba_premultiplied(129, 118, 93, 140),
        selected_border: Color32::from_rgb(139, 0, 0),
        header: Color32::from_rgb(139, 0, 0),
        current_month_bg: Color32::WHITE,
        filler_day_bg: Color32::from_rgb(235, 232, 228),
    },
    status: StatusColors {
        confirmed: Color32::from_rgb(46, 125, 50),
        pending: Color32::from_rgb(212, 160, 23),
        cancelled: Color32::from_rgb(158, 158, 158),
    },
};

impl Theme {
    /// Color for an appointment status chip
    pub fn status_color(&self, status: shared::AppointmentStatus) -> Color32 {
        match status {
            shared::AppointmentStatus::Confirmed => self.status.confirmed,
            shared::AppointmentStatus::Pending => self.status.pending,
            shared::AppointmentStatus::Cancelled => self.status.cancelled,
        }
    }
}

/// Convenience constants for the most commonly used colors
pub mod colors {
    use super::CURRENT_THEME;
    use eframe::egui::Color32;

    // Interactive colors
    pub const HOVER_BORDER: Color32 = CURRENT_THEME.interactive.hover_border;
    pub const ACTIVE_BACKGROUND: Color32 = CURRENT_THEME.interactive.active_background;
    pub const INACTIVE_BACKGROUND: Color32 = CURRENT_THEME.interactive.inactive_background;
    pub const DANGER: Color32 = CURRENT_THEME.interactive.danger;

    // Typography colors
    pub const TEXT_PRIMARY: Color32 = CURRENT_THEME.typography.primary;
    pub const TEXT_SECONDARY: Color32 = CURRENT_THEME.typography.secondary;
    pub const TEXT_HEADING: Color32 = CURRENT_THEME.typography.heading;
    pub const TEXT_WHITE: Color32 = CURRENT_THEME.typography.white;

    // Layout colors
    pub const BACKGROUND: Color32 = CURRENT_THEME.layout.background;
    pub const CARD_BACKGROUND: Color32 = CURRENT_THEME.layout.card_background;
    pub const CARD_BORDER: Color32 = CURRENT_THEME.layout.card_border;

    // Accent
    pub const GOLD: Color32 = CURRENT_THEME.calendar.today_border;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_day_background_is_translucent_not_additive() {
        // Premultiplied colors with any component above alpha render
        // additively in egui. The selection highlight must blend.
        let color = CURRENT_THEME.calendar.selected_background;
        assert!(color.a() < 255);
        assert!(color.r() <= color.a());
        assert!(color.g() <= color.a());
        assert!(color.b() <= color.a());
    }
}
