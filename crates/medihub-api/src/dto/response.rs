//! Response DTOs.

use serde::{Deserialize, Serialize};

use medihub_entity::notification::Notification;
use medihub_entity::record::PatientRecordBundle;

/// Response of a successful access request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestAccessResponse {
    /// Always `true`.
    pub success: bool,
    /// Human-readable outcome.
    pub message: String,
    /// The code shown to the doctor (and sent to the patient).
    pub passkey: String,
    /// Validity window, e.g. `"30 minutes"`.
    pub expires_in: String,
    /// The patient's display name.
    pub patient_name: String,
}

/// Response of a successful passkey verification.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyPasskeyResponse {
    /// Always `true`.
    pub success: bool,
    /// Human-readable outcome.
    pub message: String,
    /// The released record bundle.
    pub patient: PatientRecordBundle,
}

/// Response of the notification inbox listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationFeedResponse {
    /// Always `true`.
    pub success: bool,
    /// Notifications, newest first.
    pub notifications: Vec<Notification>,
    /// How many are unread.
    pub unread_count: i64,
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Always `true`.
    pub success: bool,
    /// Human-readable outcome.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status, `"ok"` when reachable.
    pub status: String,
    /// Crate version.
    pub version: String,
}
