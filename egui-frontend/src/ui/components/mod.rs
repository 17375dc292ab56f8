//! # UI Components
//!
//! Rendering code for every screen and widget, organized by concern.
//! Most components are `impl SchedulerApp` blocks so they can read and
//! mutate the central app state directly.

pub mod auth_screens;
pub mod calendar_renderer;
pub mod dashboard_renderer;
pub mod data_loading;
pub mod header;
pub mod modals;
pub mod styling;
pub mod tab_manager;
pub mod theme;
pub mod users_renderer;
