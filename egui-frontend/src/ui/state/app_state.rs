//! # Core Application State
//!
//! This module contains the essential application state that forms the
//! backbone of the scheduler app.
//!
//! ## Responsibilities:
//! - Signed-in user session (explicit state, never ambient globals)
//! - Main tab navigation state
//! - Which top-level screen is showing (login, register, main)
//!
//! ## Purpose:
//! This represents the core "business state" of the application, the
//! fundamental data needed for the app to function, separate from
//! UI-specific state.

use shared::User;

/// Top-level screens of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Register,
    Main,
}

/// Tabs available in the main interface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainTab {
    Dashboard,
    Schedule,
    Users,
}

impl MainTab {
    pub fn label(self) -> &'static str {
        match self {
            MainTab::Dashboard => "Dashboard",
            MainTab::Schedule => "Schedule",
            MainTab::Users => "Users",
        }
    }
}

/// Core application state containing essential app data
pub struct CoreAppState {
    /// Currently signed-in user, if any
    pub current_user: Option<User>,

    /// Which top-level screen is showing
    pub screen: Screen,

    /// Currently active main tab
    pub current_tab: MainTab,
}

impl CoreAppState {
    /// Create new core app state, starting unauthenticated
    pub fn new() -> Self {
        Self {
            current_user: None,
            screen: Screen::Login,
            current_tab: MainTab::Dashboard, // Default to dashboard view
        }
    }

    /// Tear down the session and return to the login screen.
    pub fn clear_session(&mut self) {
        self.current_user = None;
        self.screen = Screen::Login;
        self.current_tab = MainTab::Dashboard;
    }
}
