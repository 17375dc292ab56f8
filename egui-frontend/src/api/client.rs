//! # API Client
//!
//! Blocking HTTP client for the appointment scheduling backend.
//!
//! ## Key Functions:
//! - `login()` / `register()` / `logout()` - Session lifecycle
//! - `list_appointments()` - All faculty appointments for the calendar
//! - `appointment_stats()` / `most_booked_faculty()` - Dashboard data
//! - `list_users()` / `delete_user()` - User administration
//!
//! ## Purpose:
//! One place that knows base URLs, auth headers, and status-code
//! mapping. Every method returns `Result<T, ApiError>` so callers get
//! a uniform error taxonomy regardless of what went wrong underneath.
//!
//! The client is cheap to clone (the underlying connection pool and
//! the token are shared), which is what lets fetch worker threads
//! carry their own copy.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::{
    ApiMessage, Appointment, AppointmentStats, AuthResponse, LoginRequest, MostBookedFaculty,
    RegisterRequest, RegisterResponse, UpdateProfileRequest, User,
};
use thiserror::Error;

const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Everything that can go wrong talking to the backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP 401/403. The stored session is no longer valid and the app
    /// must return to the login screen.
    #[error("session expired or unauthorized")]
    Unauthorized,

    /// Any other non-success HTTP status.
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// Could not reach the backend at all.
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered but the payload did not match the schema.
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

/// Client for the scheduling REST API.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::blocking::Client,
    base_url: String,
    token: Arc<RwLock<Option<String>>>,
}

impl ApiClient {
    /// Build a client against the default base URL, honoring the
    /// `SCHEDULER_API_URL` environment override.
    pub fn from_env() -> anyhow::Result<Self> {
        let base_url =
            std::env::var("SCHEDULER_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    pub fn new(base_url: impl Into<String>) -> anyhow::Result<Self> {
        let base_url = base_url.into();
        let base_url = base_url.trim_end_matches('/').to_string();
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(15))
            .build()?;
        log::info!("🌐 API client targeting {}", base_url);
        Ok(Self {
            http,
            base_url,
            token: Arc::new(RwLock::new(None)),
        })
    }

    /// Store the bearer token used for subsequent requests.
    pub fn set_token(&self, token: Option<String>) {
        if let Ok(mut guard) = self.token.write() {
            *guard = token;
        }
    }

    pub fn has_token(&self) -> bool {
        self.token
            .read()
            .map(|guard| guard.is_some())
            .unwrap_or(false)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(
        &self,
        request: reqwest::blocking::RequestBuilder,
    ) -> reqwest::blocking::RequestBuilder {
        let token = self.token.read().ok().and_then(|guard| guard.clone());
        match token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::blocking::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = self
            .authorize(request)
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if status.as_u16() == 401 || status.as_u16() == 403 {
            return Err(ApiError::Unauthorized);
        }
        if !status.is_success() {
            let message = response
                .text()
                .unwrap_or_else(|_| "no response body".to_string());
            return Err(ApiError::Server {
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .text()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(self.http.get(self.url(path)))
    }

    fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        self.execute(self.http.post(self.url(path)).json(body))
    }

    // --- Auth ---

    pub fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        let response: AuthResponse = self.post("/api/auth/login", request)?;
        self.set_token(Some(response.token.clone()));
        Ok(response)
    }

    pub fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
        self.post("/api/auth/register", request)
    }

    pub fn logout(&self) -> Result<(), ApiError> {
        let result: Result<ApiMessage, ApiError> = self.post("/api/auth/logout", &());
        // Drop the token even if the backend call failed.
        self.set_token(None);
        result.map(|_| ())
    }

    pub fn get_user(&self, user_id: &str) -> Result<User, ApiError> {
        self.get(&format!("/api/auth/user/{}", user_id))
    }

    // --- Users ---

    pub fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.get("/api/users")
    }

    pub fn delete_user(&self, user_id: &str) -> Result<ApiMessage, ApiError> {
        self.execute(self.http.delete(self.url(&format!("/api/users/{}", user_id))))
    }

    pub fn update_profile(
        &self,
        user_id: &str,
        request: &UpdateProfileRequest,
    ) -> Result<User, ApiError> {
        self.execute(
            self.http
                .put(self.url(&format!("/api/users/{}", user_id)))
                .json(request),
        )
    }

    // --- Appointments ---

    pub fn list_appointments(&self) -> Result<Vec<Appointment>, ApiError> {
        self.get("/api/appointments")
    }

    pub fn most_booked_faculty(&self) -> Result<Vec<MostBookedFaculty>, ApiError> {
        self.get("/api/appointments/faculty/most-booked")
    }

    pub fn appointment_stats(&self) -> Result<AppointmentStats, ApiError> {
        self.get("/api/appointments/stats")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://localhost:9999/").unwrap();
        assert_eq!(client.url("/api/users"), "http://localhost:9999/api/users");
    }

    #[test]
    fn test_token_round_trip() {
        let client = ApiClient::new("http://localhost:9999").unwrap();
        assert!(!client.has_token());
        client.set_token(Some("abc".to_string()));
        assert!(client.has_token());
        client.set_token(None);
        assert!(!client.has_token());
    }
}
