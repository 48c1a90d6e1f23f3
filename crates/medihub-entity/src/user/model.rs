//! User entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::UserRole;

/// A registered user in the MediHub directory.
///
/// Registration and authentication live outside this service; rows are
/// consulted only to validate doctor/patient identity and role.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Unique email address.
    pub email: String,
    /// Directory role.
    pub role: UserRole,
    /// Gender (optional profile field).
    pub gender: Option<String>,
    /// Date of birth (optional profile field).
    pub date_of_birth: Option<NaiveDate>,
    /// Age in years (optional profile field).
    pub age: Option<i32>,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Check if this user is a doctor.
    pub fn is_doctor(&self) -> bool {
        self.role.is_doctor()
    }

    /// Check if this user is a patient.
    pub fn is_patient(&self) -> bool {
        self.role.is_patient()
    }
}
