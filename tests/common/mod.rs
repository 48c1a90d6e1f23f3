//! Shared test helpers for integration tests.
//!
//! Tests run the real router over the in-memory store backend, so no
//! database is needed.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use chrono::Utc;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use medihub_api::state::{AppState, StoreSet};
use medihub_core::config::app::ServerConfig;
use medihub_core::config::{AppConfig, DatabaseConfig};
use medihub_database::memory::{
    MemoryAccessRequestStore, MemoryAppointmentStore, MemoryLabResultStore,
    MemoryMedicalRecordStore, MemoryNotificationStore, MemoryPrescriptionStore, MemoryUserStore,
};
use medihub_entity::record::{MedicalRecord, Prescription};
use medihub_entity::user::{User, UserRole};

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// The stores, for seeding and direct inspection
    pub stores: StoreSet,
}

impl TestApp {
    /// Create a new test application over in-memory stores
    pub fn new() -> Self {
        let config = AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                cors_origins: vec![],
            },
            database: DatabaseConfig {
                url: "postgres://unused".to_string(),
                max_connections: 1,
                min_connections: 1,
                connect_timeout_seconds: 1,
                idle_timeout_seconds: 1,
            },
            access: Default::default(),
            worker: Default::default(),
            logging: Default::default(),
        };

        let stores = StoreSet {
            users: Arc::new(MemoryUserStore::new()),
            access_requests: Arc::new(MemoryAccessRequestStore::new()),
            notifications: Arc::new(MemoryNotificationStore::new()),
            medical_records: Arc::new(MemoryMedicalRecordStore::new()),
            prescriptions: Arc::new(MemoryPrescriptionStore::new()),
            lab_results: Arc::new(MemoryLabResultStore::new()),
            appointments: Arc::new(MemoryAppointmentStore::new()),
        };

        let state = AppState::new(Arc::new(config), stores.clone());
        let router = medihub_api::router::build_router(state);

        Self { router, stores }
    }

    /// Seed a doctor and return their ID
    pub async fn seed_doctor(&self, name: &str, email: &str) -> Uuid {
        self.seed_user(name, email, UserRole::Doctor).await
    }

    /// Seed a patient and return their ID
    pub async fn seed_patient(&self, name: &str, email: &str) -> Uuid {
        self.seed_user(name, email, UserRole::Patient).await
    }

    async fn seed_user(&self, name: &str, email: &str, role: UserRole) -> Uuid {
        let user = User {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: email.to_string(),
            role,
            gender: None,
            date_of_birth: None,
            age: Some(40),
            created_at: Utc::now(),
        };
        self.stores
            .users
            .create(&user)
            .await
            .expect("Failed to seed user");
        user.id
    }

    /// Seed a medical record and a prescription for a patient
    pub async fn seed_records(&self, patient_id: Uuid) {
        let record = MedicalRecord {
            id: Uuid::new_v4(),
            patient_id,
            hospital: Some("General Hospital".to_string()),
            doctor_name: Some("Dr. Adams".to_string()),
            record_type: Some("consultation".to_string()),
            description: Some("Annual checkup".to_string()),
            details: None,
            record_date: None,
            softcopy_path: None,
            category: Some("general".to_string()),
            created_at: Utc::now(),
        };
        self.stores
            .medical_records
            .create(&record)
            .await
            .expect("Failed to seed medical record");

        let prescription = Prescription {
            id: Uuid::new_v4(),
            patient_id,
            hospital: Some("General Hospital".to_string()),
            doctor_name: Some("Dr. Adams".to_string()),
            medicine_name: Some("Amoxicillin".to_string()),
            instructions: Some("Twice daily".to_string()),
            notes: None,
            prescription_date: None,
            status: Some("active".to_string()),
            prescription_image: None,
            created_at: Utc::now(),
        };
        self.stores
            .prescriptions
            .create(&prescription)
            .await
            .expect("Failed to seed prescription");
    }

    /// Request access and return the passkey from the response
    pub async fn request_passkey(&self, doctor_id: Uuid, patient_email: &str) -> String {
        let response = self
            .request(
                "POST",
                &format!("/api/doctor/{doctor_id}/request-patient-access"),
                Some(serde_json::json!({ "patientEmail": patient_email })),
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Access request failed: {:?}",
            response.body
        );

        response
            .body
            .get("passkey")
            .and_then(|v| v.as_str())
            .expect("No passkey in response")
            .to_string()
    }

    /// Make an HTTP request to the test app
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}
