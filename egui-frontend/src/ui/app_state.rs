//! # App State Module
//!
//! This module defines the central application state structure and
//! initialization logic for the scheduler app.
//!
//! ## Key Types:
//! - `SchedulerApp` - Main application state struct
//!
//! ## Key Functions:
//! - `new()` - Initialize new app instance with the API client
//! - Month navigation helpers that also trigger refetches
//!
//! ## State Management:
//! The SchedulerApp struct holds all application state in one place,
//! composed from the modular state structs in `ui::state`. This
//! follows the single source of truth principle: the session, the
//! displayed month, and every screen's data live here and nowhere
//! else.

use log::info;

use crate::api::{ApiClient, Fetcher};
use crate::ui::state::{
    AuthState, CalendarViewState, CoreAppState, DashboardState, ModalState, UIState, UsersState,
};

/// Main application struct for the egui appointment scheduler
pub struct SchedulerApp {
    /// Background fetch worker owning the API client
    pub fetcher: Fetcher,

    /// Core business state (session, screen, tab)
    pub core: CoreAppState,

    /// General UI state (loading, messages)
    pub ui: UIState,

    /// Login and registration form state
    pub auth: AuthState,

    /// Schedule calendar state
    pub calendar: CalendarViewState,

    /// Dashboard state (stats, chart, mini calendar)
    pub dashboard: DashboardState,

    /// User administration state
    pub users: UsersState,

    /// Modal visibility and form state
    pub modals: ModalState,
}

impl SchedulerApp {
    /// Create a new SchedulerApp with default values
    pub fn new(cc: &eframe::CreationContext<'_>) -> Result<Self, anyhow::Error> {
        info!("🚀 Initializing SchedulerApp");

        crate::ui::components::styling::setup_app_style(&cc.egui_ctx);

        let client = ApiClient::from_env()?;

        Ok(Self {
            fetcher: Fetcher::new(client),
            core: CoreAppState::new(),
            ui: UIState::new(),
            auth: AuthState::new(),
            calendar: CalendarViewState::new(),
            dashboard: DashboardState::new(),
            users: UsersState::new(),
            modals: ModalState::new(),
        })
    }

    /// Navigate the schedule calendar to the previous month
    pub fn navigate_to_previous_month(&mut self) {
        self.calendar.cursor.previous_month();
        self.reload_appointments();
        log::info!(
            "📅 Navigated to previous month: {} {}",
            self.calendar.cursor.month_name(),
            self.calendar.cursor.year
        );
    }

    /// Navigate the schedule calendar to the next month
    pub fn navigate_to_next_month(&mut self) {
        self.calendar.cursor.next_month();
        self.reload_appointments();
        log::info!(
            "📅 Navigated to next month: {} {}",
            self.calendar.cursor.month_name(),
            self.calendar.cursor.year
        );
    }

    /// Jump the schedule calendar back to the current month and day
    pub fn navigate_to_today(&mut self) {
        self.calendar.cursor.today();
        self.reload_appointments();
        log::info!("📅 Navigated to today");
    }

    /// Jump the schedule calendar to a different year
    pub fn navigate_to_year(&mut self, year: i32) {
        self.calendar.cursor.select_year(year);
        self.reload_appointments();
        log::info!("📅 Navigated to year {}", year);
    }
}
