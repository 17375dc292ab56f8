//! # State Modules
//!
//! Modular application state, split by concern so each screen's state
//! can be reasoned about and tested independently.

pub mod app_state;
pub mod auth_state;
pub mod calendar_state;
pub mod dashboard_state;
pub mod modal_state;
pub mod ui_state;
pub mod users_state;

pub use app_state::{CoreAppState, MainTab, Screen};
pub use auth_state::AuthState;
pub use calendar_state::CalendarViewState;
pub use dashboard_state::DashboardState;
pub use modal_state::ModalState;
pub use ui_state::UIState;
pub use users_state::UsersState;
