//! In-memory patient record stores.

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use medihub_core::result::AppResult;
use medihub_entity::record::{Appointment, LabResult, MedicalRecord, Prescription};

use crate::store::{AppointmentStore, LabResultStore, MedicalRecordStore, PrescriptionStore};

/// Concurrent in-process medical record store.
#[derive(Debug, Default)]
pub struct MemoryMedicalRecordStore {
    records: DashMap<Uuid, MedicalRecord>,
}

impl MemoryMedicalRecordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MedicalRecordStore for MemoryMedicalRecordStore {
    async fn find_by_patient(&self, patient_id: Uuid) -> AppResult<Vec<MedicalRecord>> {
        let mut list: Vec<MedicalRecord> = self
            .records
            .iter()
            .filter(|r| r.patient_id == patient_id)
            .map(|r| r.clone())
            .collect();
        list.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(list)
    }

    async fn create(&self, record: &MedicalRecord) -> AppResult<()> {
        self.records.insert(record.id, record.clone());
        Ok(())
    }
}

/// Concurrent in-process prescription store.
#[derive(Debug, Default)]
pub struct MemoryPrescriptionStore {
    prescriptions: DashMap<Uuid, Prescription>,
}

impl MemoryPrescriptionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PrescriptionStore for MemoryPrescriptionStore {
    async fn find_by_patient(&self, patient_id: Uuid) -> AppResult<Vec<Prescription>> {
        let mut list: Vec<Prescription> = self
            .prescriptions
            .iter()
            .filter(|p| p.patient_id == patient_id)
            .map(|p| p.clone())
            .collect();
        list.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(list)
    }

    async fn create(&self, prescription: &Prescription) -> AppResult<()> {
        self.prescriptions
            .insert(prescription.id, prescription.clone());
        Ok(())
    }
}

/// Concurrent in-process lab result store.
#[derive(Debug, Default)]
pub struct MemoryLabResultStore {
    results: DashMap<Uuid, LabResult>,
}

impl MemoryLabResultStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LabResultStore for MemoryLabResultStore {
    async fn find_by_patient(&self, patient_id: Uuid) -> AppResult<Vec<LabResult>> {
        let mut list: Vec<LabResult> = self
            .results
            .iter()
            .filter(|r| r.patient_id == patient_id)
            .map(|r| r.clone())
            .collect();
        list.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(list)
    }

    async fn create(&self, result: &LabResult) -> AppResult<()> {
        self.results.insert(result.id, result.clone());
        Ok(())
    }
}

/// Concurrent in-process appointment store.
#[derive(Debug, Default)]
pub struct MemoryAppointmentStore {
    appointments: DashMap<Uuid, Appointment>,
}

impl MemoryAppointmentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AppointmentStore for MemoryAppointmentStore {
    async fn find_by_patient(&self, patient_id: Uuid) -> AppResult<Vec<Appointment>> {
        let mut list: Vec<Appointment> = self
            .appointments
            .iter()
            .filter(|a| a.patient_id == patient_id)
            .map(|a| a.clone())
            .collect();
        list.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(list)
    }

    async fn create(&self, appointment: &Appointment) -> AppResult<()> {
        self.appointments
            .insert(appointment.id, appointment.clone());
        Ok(())
    }
}
