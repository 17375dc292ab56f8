//! Canonical wire schema shared by every client of the appointment
//! scheduling backend.
//!
//! The original system grew separate, drifting copies of these models in
//! each client (`appointmentId` vs `id`, `_seconds` vs `seconds`). This
//! crate is the single source of truth: one `Appointment`, one `User`,
//! and one timestamp type that absorbs every wire spelling at the
//! deserialization boundary so the rest of the code never sees the
//! drift.

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

pub mod calendar;

pub use calendar::{
    appointments_on_date, generate_month_grid, CalendarCell, CalendarDate, MonthCursor, GRID_CELLS,
};

/// Firestore-style timestamp as it appears on the wire: whole seconds
/// since the Unix epoch plus a nanosecond remainder.
///
/// Accepts both key spellings the backend has been observed to emit
/// (`seconds`/`nanoseconds` and `_seconds`/`_nanoseconds`, plus the
/// mobile client's `nanos`). Serializes with the canonical names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireTimestamp {
    #[serde(alias = "_seconds")]
    pub seconds: i64,
    #[serde(
        rename = "nanoseconds",
        alias = "_nanoseconds",
        alias = "nanos",
        default
    )]
    pub nanos: i32,
}

impl WireTimestamp {
    pub fn new(seconds: i64, nanos: i32) -> Self {
        Self { seconds, nanos }
    }

    /// Build a timestamp from epoch milliseconds.
    pub fn from_millis(millis: i64) -> Self {
        Self {
            seconds: millis.div_euclid(1000),
            nanos: (millis.rem_euclid(1000) * 1_000_000) as i32,
        }
    }

    /// Epoch milliseconds, truncating sub-millisecond precision.
    pub fn to_millis(self) -> i64 {
        self.seconds * 1000 + i64::from(self.nanos) / 1_000_000
    }

    /// Convert to a wall-clock time in the platform's local timezone.
    ///
    /// Returns `None` for out-of-range values (including a nanosecond
    /// field that is not a valid remainder), which callers treat the
    /// same as an absent timestamp.
    pub fn to_local_datetime(self) -> Option<DateTime<Local>> {
        if !(0..1_000_000_000).contains(&self.nanos) {
            return None;
        }
        Utc.timestamp_opt(self.seconds, self.nanos as u32)
            .single()
            .map(|utc| utc.with_timezone(&Local))
    }

    /// The local calendar date this instant falls on. This is the single
    /// normalization boundary used for day-bucketing.
    pub fn to_local_date(self) -> Option<NaiveDate> {
        self.to_local_datetime().map(|dt| dt.date_naive())
    }
}

/// Lifecycle status of an appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AppointmentStatus {
    #[default]
    #[serde(alias = "PENDING", alias = "PENDING_APPROVAL", alias = "pending")]
    Pending,
    #[serde(
        alias = "CONFIRMED",
        alias = "SCHEDULED",
        alias = "APPROVED",
        alias = "confirmed"
    )]
    Confirmed,
    #[serde(alias = "CANCELLED", alias = "REJECTED", alias = "cancelled")]
    Cancelled,
}

impl AppointmentStatus {
    pub fn label(self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "Pending",
            AppointmentStatus::Confirmed => "Confirmed",
            AppointmentStatus::Cancelled => "Cancelled",
        }
    }
}

/// A scheduled consultation as served by the appointment service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    #[serde(alias = "appointmentId")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Start instant; absent or malformed timestamps exclude the
    /// appointment from calendar binning but never fail a fetch.
    #[serde(default)]
    pub start_time: Option<WireTimestamp>,
    #[serde(default)]
    pub end_time: Option<WireTimestamp>,
    #[serde(default)]
    pub faculty_name: Option<String>,
    #[serde(default)]
    pub status: AppointmentStatus,
    #[serde(default)]
    pub has_approved: Option<bool>,
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Appointment {
    /// Local calendar date the appointment starts on, if it has a
    /// usable timestamp.
    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start_time.and_then(WireTimestamp::to_local_date)
    }

    /// Human-readable local time range, e.g. "8:00 AM - 9:00 AM".
    pub fn time_range_label(&self) -> Option<String> {
        let start = self.start_time?.to_local_datetime()?;
        let start_label = start.format("%-I:%M %p").to_string();
        match self.end_time.and_then(WireTimestamp::to_local_datetime) {
            Some(end) => Some(format!("{} - {}", start_label, end.format("%-I:%M %p"))),
            None => Some(start_label),
        }
    }
}

/// Role assigned to an account by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UserRole {
    #[default]
    #[serde(alias = "STUDENT", alias = "student")]
    Student,
    #[serde(alias = "FACULTY", alias = "faculty")]
    Faculty,
    #[serde(alias = "ADMIN", alias = "admin")]
    Admin,
}

impl UserRole {
    pub fn label(self) -> &'static str {
        match self {
            UserRole::Student => "Student",
            UserRole::Faculty => "Faculty",
            UserRole::Admin => "Admin",
        }
    }
}

/// A registered account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(alias = "userId")]
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub role: UserRole,
}

impl User {
    pub fn full_name(&self) -> String {
        let name = format!("{} {}", self.first_name, self.last_name);
        let trimmed = name.trim();
        if trimmed.is_empty() {
            self.email.clone()
        } else {
            trimmed.to_string()
        }
    }
}

/// Credentials for `POST /api/auth/login`. The identifier is an email
/// address or username, matching the backend's combined lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub identifier: String,
    pub password: String,
}

/// Successful login payload: the bearer token plus the authenticated
/// account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

/// Payload for `POST /api/auth/register`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub user: Option<User>,
}

/// Payload for updating the signed-in account's profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Aggregate appointment counts for the dashboard stat cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentStats {
    #[serde(default)]
    pub total_appointments: u32,
    #[serde(default)]
    pub confirmed_appointments: u32,
    #[serde(default)]
    pub pending_appointments: u32,
    #[serde(default)]
    pub cancelled_appointments: u32,
}

/// One row of the most-booked-faculty ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MostBookedFaculty {
    pub faculty_name: String,
    #[serde(alias = "count")]
    pub appointment_count: u32,
}

/// Generic `{ "message": ... }` acknowledgement used by delete and
/// logout endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_timestamp_accepts_both_key_spellings() {
        let plain: WireTimestamp =
            serde_json::from_str(r#"{"seconds": 1710748800, "nanoseconds": 500}"#).unwrap();
        assert_eq!(plain, WireTimestamp::new(1710748800, 500));

        let underscored: WireTimestamp =
            serde_json::from_str(r#"{"_seconds": 1710748800, "_nanoseconds": 500}"#).unwrap();
        assert_eq!(underscored, plain);

        let mobile: WireTimestamp =
            serde_json::from_str(r#"{"seconds": 1710748800, "nanos": 500}"#).unwrap();
        assert_eq!(mobile, plain);
    }

    #[test]
    fn test_wire_timestamp_nanos_defaults_to_zero() {
        let ts: WireTimestamp = serde_json::from_str(r#"{"seconds": 42}"#).unwrap();
        assert_eq!(ts, WireTimestamp::new(42, 0));
    }

    #[test]
    fn test_wire_timestamp_millis_round_trip() {
        let ts = WireTimestamp::from_millis(1710748800123);
        assert_eq!(ts.seconds, 1710748800);
        assert_eq!(ts.nanos, 123_000_000);
        assert_eq!(ts.to_millis(), 1710748800123);
    }

    #[test]
    fn test_wire_timestamp_invalid_nanos_yields_no_date() {
        let ts = WireTimestamp::new(1710748800, 2_000_000_000);
        assert!(ts.to_local_datetime().is_none());
        assert!(ts.to_local_date().is_none());
    }

    #[test]
    fn test_appointment_accepts_legacy_field_names() {
        let json = r#"{
            "appointmentId": "apt-1",
            "title": "Capstone Consultation",
            "startTime": {"_seconds": 1710748800, "_nanoseconds": 0},
            "facultyName": "Prof. Amparo",
            "status": "CONFIRMED",
            "hasApproved": true
        }"#;
        let appointment: Appointment = serde_json::from_str(json).unwrap();
        assert_eq!(appointment.id, "apt-1");
        assert_eq!(appointment.status, AppointmentStatus::Confirmed);
        assert_eq!(appointment.faculty_name.as_deref(), Some("Prof. Amparo"));
        assert_eq!(appointment.has_approved, Some(true));
        assert_eq!(
            appointment.start_time,
            Some(WireTimestamp::new(1710748800, 0))
        );
    }

    #[test]
    fn test_appointment_without_timestamp_has_no_start_date() {
        let json = r#"{"id": "apt-2", "title": "Untimed", "status": "Pending"}"#;
        let appointment: Appointment = serde_json::from_str(json).unwrap();
        assert!(appointment.start_time.is_none());
        assert!(appointment.start_date().is_none());
        assert!(appointment.time_range_label().is_none());
    }

    #[test]
    fn test_status_aliases() {
        let confirmed: AppointmentStatus = serde_json::from_str(r#""SCHEDULED""#).unwrap();
        assert_eq!(confirmed, AppointmentStatus::Confirmed);
        let cancelled: AppointmentStatus = serde_json::from_str(r#""REJECTED""#).unwrap();
        assert_eq!(cancelled, AppointmentStatus::Cancelled);
    }

    #[test]
    fn test_user_full_name_falls_back_to_email() {
        let user = User {
            id: "u1".to_string(),
            first_name: String::new(),
            last_name: String::new(),
            email: "admin@example.edu".to_string(),
            role: UserRole::Admin,
        };
        assert_eq!(user.full_name(), "admin@example.edu");

        let named = User {
            first_name: "Jane".to_string(),
            last_name: "Reyes".to_string(),
            ..user
        };
        assert_eq!(named.full_name(), "Jane Reyes");
    }

    #[test]
    fn test_most_booked_faculty_accepts_count_alias() {
        let row: MostBookedFaculty =
            serde_json::from_str(r#"{"facultyName": "Prof. Amparo", "count": 12}"#).unwrap();
        assert_eq!(row.appointment_count, 12);
    }
}
