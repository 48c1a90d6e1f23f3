//! Lab result repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use medihub_core::error::{AppError, ErrorKind};
use medihub_core::result::AppResult;
use medihub_entity::record::LabResult;

use crate::store::LabResultStore;

/// PostgreSQL-backed lab result store.
#[derive(Debug, Clone)]
pub struct LabResultRepository {
    pool: PgPool,
}

impl LabResultRepository {
    /// Create a new lab result repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LabResultStore for LabResultRepository {
    async fn find_by_patient(&self, patient_id: Uuid) -> AppResult<Vec<LabResult>> {
        sqlx::query_as::<_, LabResult>(
            "SELECT * FROM lab_results WHERE patient_id = $1 ORDER BY created_at DESC",
        )
        .bind(patient_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list lab results", e))
    }

    async fn create(&self, result: &LabResult) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO lab_results \
             (id, patient_id, hospital_name, doctor_name, instructions, report, \
              lab_result_date, report_path, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
        )
        .bind(result.id)
        .bind(result.patient_id)
        .bind(&result.hospital_name)
        .bind(&result.doctor_name)
        .bind(&result.instructions)
        .bind(&result.report)
        .bind(result.lab_result_date)
        .bind(&result.report_path)
        .bind(result.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to create lab result", e)
        })?;
        Ok(())
    }
}
