//! PostgreSQL store implementations.

pub mod access_request;
pub mod appointment;
pub mod lab_result;
pub mod medical_record;
pub mod notification;
pub mod prescription;
pub mod user;
