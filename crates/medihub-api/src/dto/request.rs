//! Request DTOs.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/doctor/{doctor_id}/request-patient-access`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientAccessRequest {
    /// Email address of the patient whose records are requested.
    pub patient_email: String,
}

/// Body of `POST /api/doctor/{doctor_id}/verify-passkey`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasskeyVerification {
    /// Email address of the patient.
    pub patient_email: String,
    /// The code the patient read back. Matched case-insensitively.
    pub passkey: String,
}
