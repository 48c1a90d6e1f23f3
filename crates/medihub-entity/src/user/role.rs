//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles available in the user directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// A practicing doctor who may request patient record access.
    Doctor,
    /// A patient who owns records and receives notifications.
    Patient,
}

impl UserRole {
    /// Check if this role is a doctor.
    pub fn is_doctor(&self) -> bool {
        matches!(self, Self::Doctor)
    }

    /// Check if this role is a patient.
    pub fn is_patient(&self) -> bool {
        matches!(self, Self::Patient)
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Doctor => "doctor",
            Self::Patient => "patient",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = medihub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "doctor" => Ok(Self::Doctor),
            "patient" => Ok(Self::Patient),
            _ => Err(medihub_core::AppError::validation(format!(
                "Invalid user role: '{s}'. Expected one of: doctor, patient"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("doctor".parse::<UserRole>().unwrap(), UserRole::Doctor);
        assert_eq!("PATIENT".parse::<UserRole>().unwrap(), UserRole::Patient);
        assert!("nurse".parse::<UserRole>().is_err());
    }
}
