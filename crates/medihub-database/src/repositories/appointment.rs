//! Appointment repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use medihub_core::error::{AppError, ErrorKind};
use medihub_core::result::AppResult;
use medihub_entity::record::Appointment;

use crate::store::AppointmentStore;

/// PostgreSQL-backed appointment store.
#[derive(Debug, Clone)]
pub struct AppointmentRepository {
    pool: PgPool,
}

impl AppointmentRepository {
    /// Create a new appointment repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AppointmentStore for AppointmentRepository {
    async fn find_by_patient(&self, patient_id: Uuid) -> AppResult<Vec<Appointment>> {
        sqlx::query_as::<_, Appointment>(
            "SELECT * FROM appointments WHERE patient_id = $1 ORDER BY created_at DESC",
        )
        .bind(patient_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list appointments", e))
    }

    async fn create(&self, appointment: &Appointment) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO appointments \
             (id, patient_id, doctor_id, appointment_date, appointment_time, status, \
              visit_type, reason, notes, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)",
        )
        .bind(appointment.id)
        .bind(appointment.patient_id)
        .bind(appointment.doctor_id)
        .bind(appointment.appointment_date)
        .bind(appointment.appointment_time)
        .bind(&appointment.status)
        .bind(&appointment.visit_type)
        .bind(&appointment.reason)
        .bind(&appointment.notes)
        .bind(appointment.created_at)
        .bind(appointment.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to create appointment", e)
        })?;
        Ok(())
    }
}
