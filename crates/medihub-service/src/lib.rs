//! # medihub-service
//!
//! Business services for MediHub. [`access`] implements the passkey
//! access grant protocol; [`records`] assembles the patient record
//! bundle released on verification; [`notification`] serves the
//! patient-facing inbox.

pub mod access;
pub mod notification;
pub mod records;
