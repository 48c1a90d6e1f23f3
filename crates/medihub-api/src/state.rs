//! Application state shared across all handlers.

use std::sync::Arc;

use chrono::Duration;

use medihub_core::config::AppConfig;
use medihub_database::store::{
    AccessRequestStore, AppointmentStore, LabResultStore, MedicalRecordStore, NotificationStore,
    PrescriptionStore, UserStore,
};
use medihub_service::access::AccessGrantService;
use medihub_service::notification::NotificationService;
use medihub_service::records::PatientRecordAggregator;

/// The set of stores the application runs on.
///
/// Backed by PostgreSQL in production and by the in-memory stores in
/// tests; the services never know the difference.
#[derive(Clone)]
pub struct StoreSet {
    /// User directory.
    pub users: Arc<dyn UserStore>,
    /// Access request ledger.
    pub access_requests: Arc<dyn AccessRequestStore>,
    /// Notification feed.
    pub notifications: Arc<dyn NotificationStore>,
    /// Medical record rows.
    pub medical_records: Arc<dyn MedicalRecordStore>,
    /// Prescription rows.
    pub prescriptions: Arc<dyn PrescriptionStore>,
    /// Lab result rows.
    pub lab_results: Arc<dyn LabResultStore>,
    /// Appointment rows.
    pub appointments: Arc<dyn AppointmentStore>,
}

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. All fields are
/// `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// The stores, kept for seeding and health checks.
    pub stores: StoreSet,
    /// The passkey access grant service.
    pub access_service: Arc<AccessGrantService>,
    /// The notification inbox service.
    pub notification_service: Arc<NotificationService>,
}

impl AppState {
    /// Wire services over the given stores.
    pub fn new(config: Arc<AppConfig>, stores: StoreSet) -> Self {
        let aggregator = Arc::new(PatientRecordAggregator::new(
            Arc::clone(&stores.users),
            Arc::clone(&stores.medical_records),
            Arc::clone(&stores.prescriptions),
            Arc::clone(&stores.lab_results),
            Arc::clone(&stores.appointments),
        ));

        let access_service = Arc::new(AccessGrantService::new(
            Arc::clone(&stores.users),
            Arc::clone(&stores.access_requests),
            Arc::clone(&stores.notifications),
            aggregator,
            Duration::minutes(config.access.passkey_ttl_minutes),
        ));

        let notification_service = Arc::new(NotificationService::new(Arc::clone(
            &stores.notifications,
        )));

        Self {
            config,
            stores,
            access_service,
            notification_service,
        }
    }
}
