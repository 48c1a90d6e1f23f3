//! The aggregated patient record bundle.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::appointment::Appointment;
use super::lab_result::LabResult;
use super::medical_record::MedicalRecord;
use super::prescription::Prescription;

/// Everything a doctor is granted on a successful passkey verification.
///
/// Derived, never persisted; assembled fresh on every verification with
/// each list ordered newest-first.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientRecordBundle {
    /// Patient identifier.
    pub id: Uuid,
    /// Patient display name.
    pub name: String,
    /// Patient email.
    pub email: String,
    /// Patient age, if known.
    pub age: Option<i32>,
    /// Medical records, newest first.
    pub medical_records: Vec<MedicalRecord>,
    /// Number of medical records.
    pub medical_records_count: usize,
    /// Prescriptions, newest first.
    pub prescriptions: Vec<Prescription>,
    /// Number of prescriptions.
    pub prescriptions_count: usize,
    /// Lab results, newest first.
    pub lab_results: Vec<LabResult>,
    /// Number of lab results.
    pub lab_results_count: usize,
    /// Appointments, newest first.
    pub appointments: Vec<Appointment>,
    /// Number of appointments.
    pub appointments_count: usize,
}
