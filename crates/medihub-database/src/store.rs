//! Store traits — the seam between services and persistence.
//!
//! Services depend only on these traits; [`crate::repositories`] provides
//! the durable PostgreSQL backend and [`crate::memory`] a concurrent
//! in-process backend for tests and development.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use medihub_core::result::AppResult;
use medihub_entity::access::AccessRequest;
use medihub_entity::notification::Notification;
use medihub_entity::record::{Appointment, LabResult, MedicalRecord, Prescription};
use medihub_entity::user::User;

/// Read access to the user directory.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Find a user by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Find a user by email address.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Insert a user row. Registration lives outside this service; this
    /// exists for seeding and fixtures.
    async fn create(&self, user: &User) -> AppResult<()>;
}

/// The access request ledger.
#[async_trait]
pub trait AccessRequestStore: Send + Sync + 'static {
    /// Persist a new pending request.
    async fn create(&self, request: &AccessRequest) -> AppResult<()>;

    /// Find the request by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<AccessRequest>>;

    /// Find a pending request for the (doctor, patient) pair whose window
    /// is still open at `now`.
    async fn find_active_pending(
        &self,
        doctor_id: Uuid,
        patient_id: Uuid,
        now: DateTime<Utc>,
    ) -> AppResult<Option<AccessRequest>>;

    /// Find a pending request by its (patient, passkey) lookup key.
    async fn find_pending_by_passkey(
        &self,
        patient_id: Uuid,
        passkey: &str,
    ) -> AppResult<Option<AccessRequest>>;

    /// Transition a pending request to expired. Returns `false` if the
    /// request was no longer pending.
    async fn mark_expired(&self, id: Uuid) -> AppResult<bool>;

    /// Atomically consume a pending request: flip it to verified and stamp
    /// `verified_at`. Compare-and-swap on the status field — at most one
    /// concurrent caller observes `true`.
    async fn consume_pending(&self, id: Uuid, verified_at: DateTime<Utc>) -> AppResult<bool>;

    /// Delete rows whose window closed before `now`. Storage hygiene only.
    async fn delete_expired(&self, now: DateTime<Utc>) -> AppResult<u64>;
}

/// The per-patient notification feed.
#[async_trait]
pub trait NotificationStore: Send + Sync + 'static {
    /// Append a notification.
    async fn create(&self, notification: &Notification) -> AppResult<()>;

    /// Find a notification by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Notification>>;

    /// List a patient's notifications, newest first.
    async fn find_by_patient(&self, patient_id: Uuid) -> AppResult<Vec<Notification>>;

    /// Count a patient's unread notifications.
    async fn count_unread(&self, patient_id: Uuid) -> AppResult<i64>;

    /// Mark a notification as read.
    async fn mark_read(&self, id: Uuid) -> AppResult<()>;

    /// Delete a notification. Never touches the access request ledger.
    async fn delete(&self, id: Uuid) -> AppResult<()>;

    /// Delete notifications whose expiry passed before `now`. Storage
    /// hygiene only.
    async fn delete_expired(&self, now: DateTime<Utc>) -> AppResult<u64>;
}

/// Medical record rows, exposed as a plain persistence service.
#[async_trait]
pub trait MedicalRecordStore: Send + Sync + 'static {
    /// List a patient's medical records, newest first.
    async fn find_by_patient(&self, patient_id: Uuid) -> AppResult<Vec<MedicalRecord>>;

    /// Insert a medical record row.
    async fn create(&self, record: &MedicalRecord) -> AppResult<()>;
}

/// Prescription rows, exposed as a plain persistence service.
#[async_trait]
pub trait PrescriptionStore: Send + Sync + 'static {
    /// List a patient's prescriptions, newest first.
    async fn find_by_patient(&self, patient_id: Uuid) -> AppResult<Vec<Prescription>>;

    /// Insert a prescription row.
    async fn create(&self, prescription: &Prescription) -> AppResult<()>;
}

/// Lab result rows, exposed as a plain persistence service.
#[async_trait]
pub trait LabResultStore: Send + Sync + 'static {
    /// List a patient's lab results, newest first.
    async fn find_by_patient(&self, patient_id: Uuid) -> AppResult<Vec<LabResult>>;

    /// Insert a lab result row.
    async fn create(&self, result: &LabResult) -> AppResult<()>;
}

/// Appointment rows, exposed as a plain persistence service.
#[async_trait]
pub trait AppointmentStore: Send + Sync + 'static {
    /// List a patient's appointments, newest first.
    async fn find_by_patient(&self, patient_id: Uuid) -> AppResult<Vec<Appointment>>;

    /// Insert an appointment row.
    async fn create(&self, appointment: &Appointment) -> AppResult<()>;
}
