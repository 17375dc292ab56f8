//! # API Module
//!
//! Everything that talks to the external REST backend lives here: the
//! blocking HTTP client, the error taxonomy, and the background fetch
//! worker that keeps network calls off the UI thread.

pub mod client;
pub mod fetch;

pub use client::{ApiClient, ApiError};
pub use fetch::{FetchResponse, Fetcher};
