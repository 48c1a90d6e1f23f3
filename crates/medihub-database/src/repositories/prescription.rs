//! Prescription repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use medihub_core::error::{AppError, ErrorKind};
use medihub_core::result::AppResult;
use medihub_entity::record::Prescription;

use crate::store::PrescriptionStore;

/// PostgreSQL-backed prescription store.
#[derive(Debug, Clone)]
pub struct PrescriptionRepository {
    pool: PgPool,
}

impl PrescriptionRepository {
    /// Create a new prescription repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PrescriptionStore for PrescriptionRepository {
    async fn find_by_patient(&self, patient_id: Uuid) -> AppResult<Vec<Prescription>> {
        sqlx::query_as::<_, Prescription>(
            "SELECT * FROM prescriptions WHERE patient_id = $1 ORDER BY created_at DESC",
        )
        .bind(patient_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list prescriptions", e)
        })
    }

    async fn create(&self, prescription: &Prescription) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO prescriptions \
             (id, patient_id, hospital, doctor_name, medicine_name, instructions, notes, \
              prescription_date, status, prescription_image, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)",
        )
        .bind(prescription.id)
        .bind(prescription.patient_id)
        .bind(&prescription.hospital)
        .bind(&prescription.doctor_name)
        .bind(&prescription.medicine_name)
        .bind(&prescription.instructions)
        .bind(&prescription.notes)
        .bind(prescription.prescription_date)
        .bind(&prescription.status)
        .bind(&prescription.prescription_image)
        .bind(prescription.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to create prescription", e)
        })?;
        Ok(())
    }
}
