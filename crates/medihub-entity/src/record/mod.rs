//! Patient record entities.
//!
//! These are plain persistence rows; the hub itself adds no logic beyond
//! field copying. [`bundle::PatientRecordBundle`] is the derived view the
//! grant service releases after a successful verification.

pub mod appointment;
pub mod bundle;
pub mod lab_result;
pub mod medical_record;
pub mod prescription;

pub use appointment::Appointment;
pub use bundle::PatientRecordBundle;
pub use lab_result::LabResult;
pub use medical_record::MedicalRecord;
pub use prescription::Prescription;
