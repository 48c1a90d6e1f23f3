//! Read-only fan-out over a patient's record stores.

use std::sync::Arc;

use uuid::Uuid;

use medihub_core::error::AppError;
use medihub_core::result::AppResult;
use medihub_database::store::{
    AppointmentStore, LabResultStore, MedicalRecordStore, PrescriptionStore, UserStore,
};
use medihub_entity::record::PatientRecordBundle;

/// Assembles the full record bundle released on a successful passkey
/// verification.
///
/// Pure read, no caching — this runs once per verification, so freshness
/// wins over performance. Every list comes back newest-first from the
/// stores.
pub struct PatientRecordAggregator {
    users: Arc<dyn UserStore>,
    medical_records: Arc<dyn MedicalRecordStore>,
    prescriptions: Arc<dyn PrescriptionStore>,
    lab_results: Arc<dyn LabResultStore>,
    appointments: Arc<dyn AppointmentStore>,
}

impl PatientRecordAggregator {
    /// Create a new aggregator over the given stores.
    pub fn new(
        users: Arc<dyn UserStore>,
        medical_records: Arc<dyn MedicalRecordStore>,
        prescriptions: Arc<dyn PrescriptionStore>,
        lab_results: Arc<dyn LabResultStore>,
        appointments: Arc<dyn AppointmentStore>,
    ) -> Self {
        Self {
            users,
            medical_records,
            prescriptions,
            lab_results,
            appointments,
        }
    }

    /// Gather everything the patient owns into one bundle.
    pub async fn assemble(&self, patient_id: Uuid) -> AppResult<PatientRecordBundle> {
        let patient = self
            .users
            .find_by_id(patient_id)
            .await?
            .ok_or_else(|| AppError::not_found("Patient not found"))?;

        let (medical_records, prescriptions, lab_results, appointments) = tokio::try_join!(
            self.medical_records.find_by_patient(patient_id),
            self.prescriptions.find_by_patient(patient_id),
            self.lab_results.find_by_patient(patient_id),
            self.appointments.find_by_patient(patient_id),
        )?;

        Ok(PatientRecordBundle {
            id: patient.id,
            name: patient.name,
            email: patient.email,
            age: patient.age,
            medical_records_count: medical_records.len(),
            medical_records,
            prescriptions_count: prescriptions.len(),
            prescriptions,
            lab_results_count: lab_results.len(),
            lab_results,
            appointments_count: appointments.len(),
            appointments,
        })
    }
}
