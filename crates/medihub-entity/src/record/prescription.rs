//! Prescription entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A prescription row owned by a patient.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Prescription {
    /// Unique prescription identifier.
    pub id: Uuid,
    /// Owning patient.
    pub patient_id: Uuid,
    /// Issuing hospital.
    pub hospital: Option<String>,
    /// Prescribing doctor's name.
    pub doctor_name: Option<String>,
    /// Medicine name.
    pub medicine_name: Option<String>,
    /// Dosage instructions.
    pub instructions: Option<String>,
    /// Additional notes.
    pub notes: Option<String>,
    /// Date the prescription was issued.
    pub prescription_date: Option<NaiveDate>,
    /// Status label, e.g. "active", "completed".
    pub status: Option<String>,
    /// Object-store path of a scanned image, if any.
    pub prescription_image: Option<String>,
    /// When the row was created.
    pub created_at: DateTime<Utc>,
}
