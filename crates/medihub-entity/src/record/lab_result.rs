//! Lab result entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A lab result row owned by a patient.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct LabResult {
    /// Unique lab result identifier.
    pub id: Uuid,
    /// Owning patient.
    pub patient_id: Uuid,
    /// Hospital that ran the test.
    pub hospital_name: Option<String>,
    /// Requesting doctor's name.
    pub doctor_name: Option<String>,
    /// Test instructions.
    pub instructions: Option<String>,
    /// Report summary text.
    pub report: Option<String>,
    /// Date the result was issued.
    pub lab_result_date: Option<NaiveDate>,
    /// Object-store path of the full report, if any.
    pub report_path: Option<String>,
    /// When the row was created.
    pub created_at: DateTime<Utc>,
}
