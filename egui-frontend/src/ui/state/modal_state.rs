//! # Modal State Module
//!
//! Visibility flags and form state for the app's modals.

use shared::{UpdateProfileRequest, User};

/// Form state for the profile editing modal
#[derive(Default)]
pub struct ProfileForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub is_saving: bool,
    pub error: Option<String>,
}

impl ProfileForm {
    /// Pre-fill the form from the signed-in user.
    pub fn from_user(user: &User) -> Self {
        Self {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            is_saving: false,
            error: None,
        }
    }

    /// Validate the form and build the update payload.
    pub fn to_request(&self) -> Result<UpdateProfileRequest, String> {
        let first_name = self.first_name.trim();
        let last_name = self.last_name.trim();
        let email = self.email.trim();

        if first_name.is_empty() || last_name.is_empty() {
            return Err("Name cannot be empty".to_string());
        }
        if email.is_empty() || !email.contains('@') {
            return Err("Please enter a valid email address".to_string());
        }

        Ok(UpdateProfileRequest {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
        })
    }

    /// Whether the form differs from the stored user data.
    pub fn has_changes(&self, user: &User) -> bool {
        self.first_name.trim() != user.first_name
            || self.last_name.trim() != user.last_name
            || self.email.trim() != user.email
    }
}

/// Modal visibility and form state
#[derive(Default)]
pub struct ModalState {
    pub show_profile_modal: bool,
    pub profile_form: ProfileForm,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::UserRole;

    fn user() -> User {
        User {
            id: "u1".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Reyes".to_string(),
            email: "jane@example.edu".to_string(),
            role: UserRole::Admin,
        }
    }

    #[test]
    fn test_profile_form_prefills_from_user() {
        let form = ProfileForm::from_user(&user());
        assert_eq!(form.first_name, "Jane");
        assert!(!form.has_changes(&user()));
    }

    #[test]
    fn test_profile_form_detects_changes() {
        let mut form = ProfileForm::from_user(&user());
        form.email = "jane.reyes@example.edu".to_string();
        assert!(form.has_changes(&user()));
    }

    #[test]
    fn test_profile_form_validation() {
        let mut form = ProfileForm::from_user(&user());
        form.first_name = "  ".to_string();
        assert!(form.to_request().is_err());

        form.first_name = "Jane".to_string();
        form.email = "invalid".to_string();
        assert!(form.to_request().is_err());

        form.email = "jane@example.edu".to_string();
        let request = form.to_request().unwrap();
        assert_eq!(request.first_name, "Jane");
    }
}
