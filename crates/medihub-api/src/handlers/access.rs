//! Passkey access grant handlers.

use axum::Json;
use axum::extract::{Path, State};
use tracing::info;
use uuid::Uuid;

use crate::dto::request::{PasskeyVerification, PatientAccessRequest};
use crate::dto::response::{RequestAccessResponse, VerifyPasskeyResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/doctor/{doctor_id}/request-patient-access
pub async fn request_patient_access(
    State(state): State<AppState>,
    Path(doctor_id): Path<Uuid>,
    Json(req): Json<PatientAccessRequest>,
) -> Result<Json<RequestAccessResponse>, ApiError> {
    info!(doctor_id = %doctor_id, patient_email = %req.patient_email, "Doctor requesting patient access");

    let ticket = state
        .access_service
        .request_access(doctor_id, &req.patient_email)
        .await?;

    let message = if ticket.reused {
        "Access request already sent. Waiting for patient verification."
    } else {
        "Access code sent to patient"
    };

    Ok(Json(RequestAccessResponse {
        success: true,
        message: message.to_string(),
        passkey: ticket.passkey,
        expires_in: format!("{} minutes", ticket.expires_in_minutes),
        patient_name: ticket.patient_name,
    }))
}

/// POST /api/doctor/{doctor_id}/verify-passkey
pub async fn verify_passkey(
    State(state): State<AppState>,
    Path(doctor_id): Path<Uuid>,
    Json(req): Json<PasskeyVerification>,
) -> Result<Json<VerifyPasskeyResponse>, ApiError> {
    info!(doctor_id = %doctor_id, patient_email = %req.patient_email, "Doctor verifying passkey");

    let bundle = state
        .access_service
        .verify_passkey(doctor_id, &req.patient_email, &req.passkey)
        .await?;

    Ok(Json(VerifyPasskeyResponse {
        success: true,
        message: "Access granted".to_string(),
        patient: bundle,
    }))
}
