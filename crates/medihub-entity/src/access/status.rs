//! Access request status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a passkey access request.
///
/// Created as `Pending`; moves to `Verified` exactly once on a successful
/// verification, or to `Expired` when the 30-minute window lapses. Never
/// resurrected after leaving `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "access_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AccessStatus {
    /// Waiting for the doctor to submit the passkey.
    Pending,
    /// Consumed by a successful verification.
    Verified,
    /// The window lapsed before verification.
    Expired,
}

impl AccessStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Verified => "verified",
            Self::Expired => "expired",
        }
    }
}

impl fmt::Display for AccessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
