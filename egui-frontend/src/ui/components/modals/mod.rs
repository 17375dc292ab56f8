//! # Modals
//!
//! Overlay dialogs rendered above the main content.

pub mod confirm_delete;
pub mod profile_modal;
