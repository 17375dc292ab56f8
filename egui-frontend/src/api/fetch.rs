//! # Fetch Worker
//!
//! Background execution of API calls so the UI thread never blocks on
//! the network.
//!
//! ## How it works:
//! Each request is spawned on its own thread with a clone of the
//! `ApiClient` and reports back over an `mpsc` channel as a
//! [`FetchResponse`]. Data-domain requests (appointments, stats, most
//! booked, users) carry a generation number handed out by the app;
//! when rapid month navigation queues several fetches, the app keeps
//! only the response matching the newest generation and discards the
//! rest. Last request wins, stale data never overwrites fresh data.

use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;

use shared::{
    Appointment, AppointmentStats, AuthResponse, LoginRequest, MostBookedFaculty, RegisterRequest,
    RegisterResponse, UpdateProfileRequest, User,
};

use super::client::{ApiClient, ApiError};

/// A completed background request, delivered on the UI thread's
/// channel receiver.
pub enum FetchResponse {
    Appointments {
        generation: u64,
        result: Result<Vec<Appointment>, ApiError>,
    },
    Stats {
        generation: u64,
        result: Result<AppointmentStats, ApiError>,
    },
    MostBooked {
        generation: u64,
        result: Result<Vec<MostBookedFaculty>, ApiError>,
    },
    Users {
        generation: u64,
        result: Result<Vec<User>, ApiError>,
    },
    Login {
        result: Result<AuthResponse, ApiError>,
    },
    Register {
        result: Result<RegisterResponse, ApiError>,
    },
    ProfileSaved {
        result: Result<User, ApiError>,
    },
    CurrentUser {
        result: Result<User, ApiError>,
    },
    UserDeleted {
        user_id: String,
        result: Result<(), ApiError>,
    },
    LoggedOut,
}

/// Spawns API calls on worker threads and funnels their results into
/// a single channel the app drains every frame.
pub struct Fetcher {
    client: ApiClient,
    sender: Sender<FetchResponse>,
    receiver: Receiver<FetchResponse>,
}

impl Fetcher {
    pub fn new(client: ApiClient) -> Self {
        let (sender, receiver) = channel();
        Self {
            client,
            sender,
            receiver,
        }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Drain every response that has arrived since the last frame.
    pub fn poll(&self) -> Vec<FetchResponse> {
        self.receiver.try_iter().collect()
    }

    fn spawn(&self, task: impl FnOnce(&ApiClient) -> FetchResponse + Send + 'static) {
        let client = self.client.clone();
        let sender = self.sender.clone();
        thread::spawn(move || {
            let response = task(&client);
            // The receiver is gone only when the app is shutting down.
            let _ = sender.send(response);
        });
    }

    pub fn fetch_appointments(&self, generation: u64) {
        log::info!("📅 Fetching appointments (generation {})", generation);
        self.spawn(move |client| FetchResponse::Appointments {
            generation,
            result: client.list_appointments(),
        });
    }

    pub fn fetch_stats(&self, generation: u64) {
        log::info!("📊 Fetching appointment stats (generation {})", generation);
        self.spawn(move |client| FetchResponse::Stats {
            generation,
            result: client.appointment_stats(),
        });
    }

    pub fn fetch_most_booked(&self, generation: u64) {
        log::info!("📊 Fetching most booked faculty (generation {})", generation);
        self.spawn(move |client| FetchResponse::MostBooked {
            generation,
            result: client.most_booked_faculty(),
        });
    }

    pub fn fetch_users(&self, generation: u64) {
        log::info!("👥 Fetching users (generation {})", generation);
        self.spawn(move |client| FetchResponse::Users {
            generation,
            result: client.list_users(),
        });
    }

    pub fn login(&self, request: LoginRequest) {
        log::info!("🔑 Logging in as {}", request.identifier);
        self.spawn(move |client| FetchResponse::Login {
            result: client.login(&request),
        });
    }

    pub fn register(&self, request: RegisterRequest) {
        log::info!("📝 Registering account for {}", request.email);
        self.spawn(move |client| FetchResponse::Register {
            result: client.register(&request),
        });
    }

    pub fn logout(&self) {
        log::info!("🚪 Logging out");
        self.spawn(move |client| {
            if let Err(e) = client.logout() {
                log::warn!("⚠️ Logout request failed: {}", e);
            }
            FetchResponse::LoggedOut
        });
    }

    /// Re-fetch the signed-in account so name or role changes made
    /// elsewhere show up without a re-login.
    pub fn fetch_current_user(&self, user_id: String) {
        log::info!("👤 Refreshing current user {}", user_id);
        self.spawn(move |client| FetchResponse::CurrentUser {
            result: client.get_user(&user_id),
        });
    }

    pub fn save_profile(&self, user_id: String, request: UpdateProfileRequest) {
        log::info!("💾 Saving profile for user {}", user_id);
        self.spawn(move |client| FetchResponse::ProfileSaved {
            result: client.update_profile(&user_id, &request),
        });
    }

    pub fn delete_user(&self, user_id: String) {
        log::info!("🗑️ Deleting user {}", user_id);
        self.spawn(move |client| {
            let result = client.delete_user(&user_id).map(|_| ());
            FetchResponse::UserDeleted { user_id, result }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poll_returns_responses_in_arrival_order() {
        let client = ApiClient::new("http://localhost:9999").unwrap();
        let fetcher = Fetcher::new(client);

        fetcher
            .sender
            .send(FetchResponse::Appointments {
                generation: 1,
                result: Ok(vec![]),
            })
            .unwrap();
        fetcher
            .sender
            .send(FetchResponse::Appointments {
                generation: 2,
                result: Ok(vec![]),
            })
            .unwrap();

        let responses = fetcher.poll();
        assert_eq!(responses.len(), 2);
        let generations: Vec<u64> = responses
            .iter()
            .map(|r| match r {
                FetchResponse::Appointments { generation, .. } => *generation,
                _ => panic!("unexpected response"),
            })
            .collect();
        assert_eq!(generations, vec![1, 2]);
        assert!(fetcher.poll().is_empty());
    }

    #[test]
    fn test_background_request_reports_network_error() {
        // Nothing listens on this port, so the fetch must come back as
        // a network error rather than hanging or panicking.
        let client = ApiClient::new("http://127.0.0.1:1").unwrap();
        let fetcher = Fetcher::new(client);
        fetcher.fetch_appointments(7);

        let response = fetcher
            .receiver
            .recv_timeout(std::time::Duration::from_secs(30))
            .expect("worker should always report back");
        match response {
            FetchResponse::Appointments { generation, result } => {
                assert_eq!(generation, 7);
                assert!(matches!(result, Err(ApiError::Network(_))));
            }
            _ => panic!("unexpected response"),
        }
    }
}
