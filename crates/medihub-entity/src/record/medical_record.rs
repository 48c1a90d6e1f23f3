//! Medical record entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A medical record row owned by a patient.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct MedicalRecord {
    /// Unique record identifier.
    pub id: Uuid,
    /// Owning patient.
    pub patient_id: Uuid,
    /// Hospital where the record was produced.
    pub hospital: Option<String>,
    /// Attending doctor's name.
    pub doctor_name: Option<String>,
    /// Record type, e.g. "diagnosis", "surgery".
    pub record_type: Option<String>,
    /// Short description.
    pub description: Option<String>,
    /// Free-form details.
    pub details: Option<String>,
    /// Date the record refers to.
    pub record_date: Option<NaiveDate>,
    /// Object-store path of an attached soft copy, if any.
    pub softcopy_path: Option<String>,
    /// Category label for the inbox UI.
    pub category: Option<String>,
    /// When the row was created.
    pub created_at: DateTime<Utc>,
}
