//! Access request entity model.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::AccessStatus;

/// One entry in the access request ledger — the full lifecycle of a
/// single passkey.
///
/// The matching notification is correlated only by the shared passkey
/// value, not a foreign key; the two records expire independently.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AccessRequest {
    /// Unique request identifier.
    pub id: Uuid,
    /// The doctor the passkey was issued to.
    pub doctor_id: Uuid,
    /// The patient whose records are requested.
    pub patient_id: Uuid,
    /// The 5-character access code.
    pub passkey: String,
    /// Current lifecycle status.
    pub status: AccessStatus,
    /// When the request was created.
    pub created_at: DateTime<Utc>,
    /// When the passkey stops being verifiable.
    pub expires_at: DateTime<Utc>,
    /// When the passkey was verified, if it was.
    pub verified_at: Option<DateTime<Utc>>,
}

impl AccessRequest {
    /// Create a new pending request with the given time-to-live.
    pub fn new(doctor_id: Uuid, patient_id: Uuid, passkey: String, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            doctor_id,
            patient_id,
            passkey,
            status: AccessStatus::Pending,
            created_at: now,
            expires_at: now + ttl,
            verified_at: None,
        }
    }

    /// Check if the request window has lapsed at the given instant.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}
