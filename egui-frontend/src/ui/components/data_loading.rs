//! # Data Loading Module
//!
//! This module handles all data loading operations for the scheduler
//! app: kicking off background fetches and applying their results to
//! application state.
//!
//! ## Key Functions:
//! - `load_initial_data()` - Load everything after a successful login
//! - `reload_appointments()` / `reload_dashboard()` / `reload_users()`
//! - `process_fetch_responses()` - Drain the fetch channel each frame
//!
//! ## Data Flow:
//! 1. UI triggers a reload, which bumps that domain's generation and
//!    spawns a background request
//! 2. The worker thread reports back over the channel
//! 3. `process_fetch_responses()` applies the result, but only if its
//!    generation is still the newest one issued (last request wins)
//! 4. An `Unauthorized` error from any request tears down the session
//!    and returns to the login screen

use log::{info, warn};

use crate::api::{ApiError, FetchResponse};
use crate::ui::app_state::SchedulerApp;
use crate::ui::state::Screen;

impl SchedulerApp {
    /// Load all main-screen data after login
    pub fn load_initial_data(&mut self) {
        info!("📊 Loading initial data");
        self.ui.loading = false;
        if let Some(user) = &self.core.current_user {
            self.fetcher.fetch_current_user(user.id.clone());
        }
        self.reload_appointments();
        self.reload_dashboard();
        self.reload_users();
    }

    /// Fetch appointments for the schedule calendar
    pub fn reload_appointments(&mut self) {
        self.calendar.loading = true;
        self.calendar.error = None;
        let generation = self.calendar.next_generation();
        self.fetcher.fetch_appointments(generation);
    }

    /// Fetch dashboard stats and the most-booked ranking
    pub fn reload_dashboard(&mut self) {
        self.dashboard.loading = true;
        self.dashboard.error = None;
        let generation = self.dashboard.next_generation();
        self.fetcher.fetch_stats(generation);
        self.fetcher.fetch_most_booked(generation);
    }

    /// Fetch the user list for the admin table
    pub fn reload_users(&mut self) {
        self.users.loading = true;
        self.users.error = None;
        let generation = self.users.next_generation();
        self.fetcher.fetch_users(generation);
    }

    /// Apply every background response that arrived since last frame
    pub fn process_fetch_responses(&mut self) {
        for response in self.fetcher.poll() {
            self.apply_response(response);
        }
    }

    fn apply_response(&mut self, response: FetchResponse) {
        match response {
            FetchResponse::Appointments { generation, result } => {
                if !self.calendar.accepts_generation(generation) {
                    info!("📅 Dropping stale appointment response (generation {})", generation);
                    return;
                }
                self.calendar.loading = false;
                match result {
                    Ok(appointments) => {
                        info!("📅 Loaded {} appointments", appointments.len());
                        self.calendar.appointments = appointments;
                        self.calendar.error = None;
                    }
                    Err(e) => self.handle_fetch_error("appointments", e, |app, msg| {
                        app.calendar.error = Some(msg);
                    }),
                }
            }
            FetchResponse::Stats { generation, result } => {
                if !self.dashboard.accepts_generation(generation) {
                    return;
                }
                match result {
                    Ok(stats) => {
                        info!("📊 Loaded appointment stats");
                        self.dashboard.stats = Some(stats);
                        self.dashboard.loading = false;
                    }
                    Err(e) => {
                        self.dashboard.loading = false;
                        self.handle_fetch_error("stats", e, |app, msg| {
                            app.dashboard.error = Some(msg);
                        });
                    }
                }
            }
            FetchResponse::MostBooked { generation, result } => {
                if !self.dashboard.accepts_generation(generation) {
                    return;
                }
                match result {
                    Ok(ranking) => {
                        info!("📊 Loaded most-booked ranking ({} faculty)", ranking.len());
                        self.dashboard.most_booked = ranking;
                        self.dashboard.loading = false;
                    }
                    Err(e) => {
                        self.dashboard.loading = false;
                        self.handle_fetch_error("most-booked ranking", e, |app, msg| {
                            app.dashboard.error = Some(msg);
                        });
                    }
                }
            }
            FetchResponse::Users { generation, result } => {
                if !self.users.accepts_generation(generation) {
                    return;
                }
                self.users.loading = false;
                match result {
                    Ok(users) => {
                        info!("👥 Loaded {} users", users.len());
                        self.users.users = users;
                        self.users.error = None;
                    }
                    Err(e) => self.handle_fetch_error("users", e, |app, msg| {
                        app.users.error = Some(msg);
                    }),
                }
            }
            FetchResponse::Login { result } => {
                self.auth.in_flight = false;
                match result {
                    Ok(auth) => {
                        info!("✅ Logged in as {}", auth.user.full_name());
                        self.core.current_user = Some(auth.user);
                        self.core.screen = Screen::Main;
                        self.auth.error = None;
                        self.auth.password.clear();
                        self.load_initial_data();
                    }
                    Err(ApiError::Unauthorized) => {
                        self.auth.error = Some("Invalid email or password".to_string());
                    }
                    Err(e) => {
                        warn!("❌ Login failed: {}", e);
                        self.auth.error = Some(format!("Login failed: {}", e));
                    }
                }
            }
            FetchResponse::Register { result } => {
                self.auth.in_flight = false;
                match result {
                    Ok(_) => {
                        info!("✅ Registration complete");
                        self.auth.error = None;
                        self.auth.info =
                            Some("Account created. Please sign in.".to_string());
                        self.auth.register_password.clear();
                        self.auth.register_confirm_password.clear();
                        self.core.screen = Screen::Login;
                    }
                    Err(e) => {
                        warn!("❌ Registration failed: {}", e);
                        self.auth.error = Some(format!("Registration failed: {}", e));
                    }
                }
            }
            FetchResponse::ProfileSaved { result } => {
                self.modals.profile_form.is_saving = false;
                match result {
                    Ok(user) => {
                        info!("✅ Profile updated");
                        self.core.current_user = Some(user);
                        self.modals.show_profile_modal = false;
                        self.ui.set_success("Profile updated".to_string());
                    }
                    Err(e) => {
                        if e.is_unauthorized() {
                            self.expire_session();
                        } else {
                            warn!("❌ Failed to update profile: {}", e);
                            self.modals.profile_form.error =
                                Some(format!("Failed to save: {}", e));
                        }
                    }
                }
            }
            FetchResponse::UserDeleted { user_id, result } => {
                self.users.deleting_id = None;
                match result {
                    Ok(()) => {
                        info!("🗑️ Deleted user {}", user_id);
                        self.users.users.retain(|u| u.id != user_id);
                        self.ui.set_success("User deleted".to_string());
                    }
                    Err(e) => {
                        if e.is_unauthorized() {
                            self.expire_session();
                        } else {
                            warn!("❌ Failed to delete user {}: {}", user_id, e);
                            self.ui.set_error(format!("Failed to delete user: {}", e));
                        }
                    }
                }
            }
            FetchResponse::CurrentUser { result } => match result {
                Ok(user) => {
                    info!("👤 Refreshed current user {}", user.full_name());
                    self.core.current_user = Some(user);
                }
                Err(e) => {
                    if e.is_unauthorized() {
                        self.expire_session();
                    } else {
                        // Non-fatal, the login response already gave us
                        // a usable snapshot.
                        warn!("⚠️ Failed to refresh current user: {}", e);
                    }
                }
            },
            FetchResponse::LoggedOut => {
                info!("🚪 Logout complete");
            }
        }
    }

    /// Map a fetch error to either session expiry or an inline message
    fn handle_fetch_error(
        &mut self,
        what: &str,
        error: ApiError,
        set_message: impl FnOnce(&mut Self, String),
    ) {
        if error.is_unauthorized() {
            self.expire_session();
        } else {
            warn!("❌ Failed to load {}: {}", what, error);
            set_message(self, format!("Failed to load {}: {}", what, error));
        }
    }

    /// The backend rejected our credentials. Clear everything and go
    /// back to the login screen.
    pub fn expire_session(&mut self) {
        warn!("🔒 Session expired, returning to login");
        self.fetcher.client().set_token(None);
        self.core.clear_session();
        self.auth.reset_after_logout();
        self.auth.error = Some("Your session has expired. Please sign in again.".to_string());
    }

    /// User-initiated logout
    pub fn logout(&mut self) {
        info!("🚪 Logging out");
        self.fetcher.logout();
        self.core.clear_session();
        self.auth.reset_after_logout();
    }
}
