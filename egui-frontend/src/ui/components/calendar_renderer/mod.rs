//! # Calendar Renderer
//!
//! Modular calendar rendering for the schedule tab, split into:
//! - `types` - Day and chip view models
//! - `styling` - Fonts, sizing, and layout constants
//! - `rendering` - Grid and day-cell drawing
//! - `interactions` - Day selection and chip expansion

pub mod interactions;
pub mod rendering;
pub mod styling;
pub mod types;
