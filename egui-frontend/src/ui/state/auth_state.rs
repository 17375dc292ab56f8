//! # Auth State Module
//!
//! Form state for the login and registration screens.

use shared::{LoginRequest, RegisterRequest, UserRole};

/// Form inputs and progress flags for the auth screens
pub struct AuthState {
    // Login form
    pub identifier: String,
    pub password: String,

    // Registration form
    pub register_first_name: String,
    pub register_last_name: String,
    pub register_email: String,
    pub register_password: String,
    pub register_confirm_password: String,
    pub register_role: UserRole,

    /// Whether a login/register request is in flight
    pub in_flight: bool,

    /// Error to display on the form
    pub error: Option<String>,

    /// Info message, e.g. "account created, please sign in"
    pub info: Option<String>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            identifier: String::new(),
            password: String::new(),
            register_first_name: String::new(),
            register_last_name: String::new(),
            register_email: String::new(),
            register_password: String::new(),
            register_confirm_password: String::new(),
            register_role: UserRole::Student,
            in_flight: false,
            error: None,
            info: None,
        }
    }

    /// Validate the login form and build the request payload.
    pub fn login_request(&self) -> Result<LoginRequest, String> {
        let identifier = self.identifier.trim();
        if identifier.is_empty() {
            return Err("Please enter your email or username".to_string());
        }
        if self.password.is_empty() {
            return Err("Please enter your password".to_string());
        }
        Ok(LoginRequest {
            identifier: identifier.to_string(),
            password: self.password.clone(),
        })
    }

    /// Validate the registration form and build the request payload.
    pub fn register_request(&self) -> Result<RegisterRequest, String> {
        let first_name = self.register_first_name.trim();
        let last_name = self.register_last_name.trim();
        let email = self.register_email.trim();

        if first_name.is_empty() || last_name.is_empty() {
            return Err("Please enter your first and last name".to_string());
        }
        if email.is_empty() || !email.contains('@') {
            return Err("Please enter a valid email address".to_string());
        }
        if self.register_password.len() < 6 {
            return Err("Password must be at least 6 characters".to_string());
        }
        if self.register_password != self.register_confirm_password {
            return Err("Passwords do not match".to_string());
        }

        Ok(RegisterRequest {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            password: self.register_password.clone(),
            role: self.register_role,
        })
    }

    /// Drop passwords and transient messages, keeping the identifier
    /// so a re-login after session expiry is one field away.
    pub fn reset_after_logout(&mut self) {
        self.password.clear();
        self.register_password.clear();
        self.register_confirm_password.clear();
        self.in_flight = false;
        self.error = None;
        self.info = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_requires_both_fields() {
        let mut auth = AuthState::new();
        assert!(auth.login_request().is_err());

        auth.identifier = "admin@example.edu".to_string();
        assert!(auth.login_request().is_err());

        auth.password = "secret".to_string();
        let request = auth.login_request().unwrap();
        assert_eq!(request.identifier, "admin@example.edu");
    }

    #[test]
    fn test_login_request_trims_identifier() {
        let mut auth = AuthState::new();
        auth.identifier = "  admin  ".to_string();
        auth.password = "secret".to_string();
        assert_eq!(auth.login_request().unwrap().identifier, "admin");
    }

    #[test]
    fn test_register_request_validates_passwords() {
        let mut auth = AuthState::new();
        auth.register_first_name = "Jane".to_string();
        auth.register_last_name = "Reyes".to_string();
        auth.register_email = "jane@example.edu".to_string();
        auth.register_password = "secret1".to_string();
        auth.register_confirm_password = "different".to_string();
        assert!(auth.register_request().is_err());

        auth.register_confirm_password = "secret1".to_string();
        assert!(auth.register_request().is_ok());

        auth.register_password = "abc".to_string();
        auth.register_confirm_password = "abc".to_string();
        assert!(auth.register_request().is_err());
    }

    #[test]
    fn test_register_request_rejects_bad_email() {
        let mut auth = AuthState::new();
        auth.register_first_name = "Jane".to_string();
        auth.register_last_name = "Reyes".to_string();
        auth.register_email = "not-an-email".to_string();
        auth.register_password = "secret1".to_string();
        auth.register_confirm_password = "secret1".to_string();
        assert!(auth.register_request().is_err());
    }
}
