//! Medical record repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use medihub_core::error::{AppError, ErrorKind};
use medihub_core::result::AppResult;
use medihub_entity::record::MedicalRecord;

use crate::store::MedicalRecordStore;

/// PostgreSQL-backed medical record store.
#[derive(Debug, Clone)]
pub struct MedicalRecordRepository {
    pool: PgPool,
}

impl MedicalRecordRepository {
    /// Create a new medical record repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MedicalRecordStore for MedicalRecordRepository {
    async fn find_by_patient(&self, patient_id: Uuid) -> AppResult<Vec<MedicalRecord>> {
        sqlx::query_as::<_, MedicalRecord>(
            "SELECT * FROM medical_records WHERE patient_id = $1 ORDER BY created_at DESC",
        )
        .bind(patient_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list medical records", e)
        })
    }

    async fn create(&self, record: &MedicalRecord) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO medical_records \
             (id, patient_id, hospital, doctor_name, record_type, description, details, \
              record_date, softcopy_path, category, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)",
        )
        .bind(record.id)
        .bind(record.patient_id)
        .bind(&record.hospital)
        .bind(&record.doctor_name)
        .bind(&record.record_type)
        .bind(&record.description)
        .bind(&record.details)
        .bind(record.record_date)
        .bind(&record.softcopy_path)
        .bind(&record.category)
        .bind(record.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to create medical record", e)
        })?;
        Ok(())
    }
}
