//! Appointment entity model.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An appointment between a patient and a doctor.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    /// Unique appointment identifier.
    pub id: Uuid,
    /// The patient attending.
    pub patient_id: Uuid,
    /// The doctor attending.
    pub doctor_id: Uuid,
    /// Scheduled date.
    pub appointment_date: Option<NaiveDate>,
    /// Scheduled time of day.
    pub appointment_time: Option<NaiveTime>,
    /// Status label, e.g. "pending", "confirmed", "cancelled".
    pub status: Option<String>,
    /// Visit type, e.g. "consultation", "follow-up".
    pub visit_type: Option<String>,
    /// Reason for the visit.
    pub reason: Option<String>,
    /// Additional notes.
    pub notes: Option<String>,
    /// When the row was created.
    pub created_at: DateTime<Utc>,
    /// When the row was last updated.
    pub updated_at: DateTime<Utc>,
}
