//! Error taxonomy of the access grant protocol.

use thiserror::Error;

use medihub_core::error::AppError;

/// Everything that can go wrong between a doctor requesting access and
/// the record bundle being released.
///
/// `InvalidOrExpiredCode` deliberately conflates a wrong code with an
/// already-consumed one so a caller cannot probe ledger state.
#[derive(Debug, Error)]
pub enum AccessError {
    /// The caller is not a known doctor.
    #[error("Invalid doctor ID")]
    InvalidActor,

    /// No patient is registered under the given email.
    #[error("Patient not found with this email")]
    PatientNotFound,

    /// No pending request matches the submitted code.
    #[error("Invalid or expired access code")]
    InvalidOrExpiredCode,

    /// The code matched but its window has lapsed.
    #[error("Access code has expired. Please request a new one.")]
    CodeExpired,

    /// The code matched but was issued to a different doctor.
    #[error("This access code was not generated for you")]
    NotAuthorizedForCode,

    /// The persistence layer failed; surfaced as a generic server error.
    #[error(transparent)]
    Store(#[from] AppError),
}

impl From<AccessError> for AppError {
    fn from(err: AccessError) -> Self {
        let message = err.to_string();
        match err {
            AccessError::InvalidActor
            | AccessError::InvalidOrExpiredCode
            | AccessError::CodeExpired => AppError::validation(message),
            AccessError::PatientNotFound => AppError::not_found(message),
            AccessError::NotAuthorizedForCode => AppError::authorization(message),
            AccessError::Store(e) => e,
        }
    }
}
