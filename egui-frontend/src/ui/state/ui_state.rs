//! # UI State Module
//!
//! This module contains general UI state that affects the overall user
//! experience but is not specific to any particular component.
//!
//! ## Responsibilities:
//! - Loading states
//! - User feedback messages
//! - General UI status indicators

use std::time::{Duration, Instant};

/// How long feedback messages stay on screen.
const MESSAGE_LIFETIME: Duration = Duration::from_secs(5);

/// General UI state for loading indicators and user feedback
#[derive(Debug, Default)]
pub struct UIState {
    /// Whether the app is waiting on the initial data load
    pub loading: bool,

    /// Error message to display to the user
    pub error_message: Option<String>,

    /// Success message to display to the user
    pub success_message: Option<String>,

    /// When the current message was set, for timed dismissal
    message_set_at: Option<Instant>,
}

impl UIState {
    pub fn new() -> Self {
        Self {
            loading: false,
            error_message: None,
            success_message: None,
            message_set_at: None,
        }
    }

    /// Clear any error or success messages
    pub fn clear_messages(&mut self) {
        self.error_message = None;
        self.success_message = None;
        self.message_set_at = None;
    }

    pub fn set_error(&mut self, message: String) {
        self.error_message = Some(message);
        self.message_set_at = Some(Instant::now());
    }

    pub fn set_success(&mut self, message: String) {
        self.success_message = Some(message);
        self.message_set_at = Some(Instant::now());
    }

    /// Whether the displayed message has outlived its lifetime
    pub fn message_expired(&self) -> bool {
        self.message_set_at
            .map(|set_at| set_at.elapsed() >= MESSAGE_LIFETIME)
            .unwrap_or(false)
    }
}
