//! # Users State Module
//!
//! State backing the user administration tab.

use shared::User;

pub struct UsersState {
    /// All registered users, as last fetched
    pub users: Vec<User>,

    pub loading: bool,
    pub error: Option<String>,

    /// User awaiting delete confirmation
    pub pending_delete: Option<User>,

    /// ID of a user whose delete request is in flight
    pub deleting_id: Option<String>,

    /// Generation of the newest user-list fetch issued
    pub generation: u64,
}

impl UsersState {
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            loading: false,
            error: None,
            pending_delete: None,
            deleting_id: None,
            generation: 0,
        }
    }

    pub fn next_generation(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    pub fn accepts_generation(&self, generation: u64) -> bool {
        generation == self.generation
    }
}
