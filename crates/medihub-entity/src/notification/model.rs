//! Notification entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Notification type emitted by the grant service.
pub const TYPE_PASSKEY_REQUEST: &str = "passkey_request";

/// A message in a patient's inbox.
///
/// Owned by the patient; the grant service only ever appends. A passkey
/// notification carries its own expiry, stamped independently of the
/// ledger entry it mirrors.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Unique notification identifier.
    pub id: Uuid,
    /// The recipient patient.
    pub patient_id: Uuid,
    /// Notification type, e.g. `passkey_request`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Notification title.
    pub title: String,
    /// Notification body text.
    pub message: String,
    /// The access code, for passkey notifications.
    pub passkey: Option<String>,
    /// Display name of the requesting doctor.
    pub doctor_name: Option<String>,
    /// Whether the patient has read this notification.
    pub is_read: bool,
    /// When the notification was created.
    pub created_at: DateTime<Utc>,
    /// When the notification expires (set only when a passkey is attached).
    pub expires_at: Option<DateTime<Utc>>,
}

impl Notification {
    /// Check if the notification has expired at the given instant.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.map(|exp| now > exp).unwrap_or(false)
    }
}
