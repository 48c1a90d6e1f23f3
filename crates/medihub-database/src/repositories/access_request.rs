//! Access request ledger repository implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use medihub_core::error::{AppError, ErrorKind};
use medihub_core::result::AppResult;
use medihub_entity::access::{AccessRequest, AccessStatus};

use crate::store::AccessRequestStore;

/// PostgreSQL-backed access request ledger.
#[derive(Debug, Clone)]
pub struct AccessRequestRepository {
    pool: PgPool,
}

impl AccessRequestRepository {
    /// Create a new access request repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccessRequestStore for AccessRequestRepository {
    async fn create(&self, request: &AccessRequest) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO access_requests \
             (id, doctor_id, patient_id, passkey, status, created_at, expires_at, verified_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
        )
        .bind(request.id)
        .bind(request.doctor_id)
        .bind(request.patient_id)
        .bind(&request.passkey)
        .bind(request.status)
        .bind(request.created_at)
        .bind(request.expires_at)
        .bind(request.verified_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to create access request", e)
        })?;
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<AccessRequest>> {
        sqlx::query_as::<_, AccessRequest>("SELECT * FROM access_requests WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find access request", e)
            })
    }

    async fn find_active_pending(
        &self,
        doctor_id: Uuid,
        patient_id: Uuid,
        now: DateTime<Utc>,
    ) -> AppResult<Option<AccessRequest>> {
        sqlx::query_as::<_, AccessRequest>(
            "SELECT * FROM access_requests \
             WHERE doctor_id = $1 AND patient_id = $2 AND status = $3 AND expires_at > $4 \
             ORDER BY created_at DESC LIMIT 1",
        )
        .bind(doctor_id)
        .bind(patient_id)
        .bind(AccessStatus::Pending)
        .bind(now)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find active request", e)
        })
    }

    async fn find_pending_by_passkey(
        &self,
        patient_id: Uuid,
        passkey: &str,
    ) -> AppResult<Option<AccessRequest>> {
        sqlx::query_as::<_, AccessRequest>(
            "SELECT * FROM access_requests \
             WHERE patient_id = $1 AND passkey = $2 AND status = $3",
        )
        .bind(patient_id)
        .bind(passkey)
        .bind(AccessStatus::Pending)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find request by passkey", e)
        })
    }

    async fn mark_expired(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE access_requests SET status = $2 WHERE id = $1 AND status = $3",
        )
        .bind(id)
        .bind(AccessStatus::Expired)
        .bind(AccessStatus::Pending)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to expire access request", e)
        })?;
        Ok(result.rows_affected() == 1)
    }

    async fn consume_pending(&self, id: Uuid, verified_at: DateTime<Utc>) -> AppResult<bool> {
        // The status predicate is the compare-and-swap: two concurrent
        // verification attempts cannot both see rows_affected == 1.
        let result = sqlx::query(
            "UPDATE access_requests SET status = $2, verified_at = $3 \
             WHERE id = $1 AND status = $4",
        )
        .bind(id)
        .bind(AccessStatus::Verified)
        .bind(verified_at)
        .bind(AccessStatus::Pending)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to consume access request", e)
        })?;
        Ok(result.rows_affected() == 1)
    }

    async fn delete_expired(&self, now: DateTime<Utc>) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM access_requests WHERE expires_at < $1")
            .bind(now)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to sweep access requests", e)
            })?;
        Ok(result.rows_affected())
    }
}
