//! Orchestration of the passkey access grant protocol.

use std::sync::Arc;

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use medihub_database::store::{AccessRequestStore, NotificationStore, UserStore};
use medihub_entity::access::AccessRequest;
use medihub_entity::notification::{Notification, TYPE_PASSKEY_REQUEST};
use medihub_entity::record::PatientRecordBundle;

use super::error::AccessError;
use super::passkey;
use crate::records::PatientRecordAggregator;

/// What a doctor gets back from a request for access.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessGrantTicket {
    /// The code the patient must read back to the doctor.
    pub passkey: String,
    /// Minutes until the code stops verifying.
    pub expires_in_minutes: i64,
    /// The patient's display name.
    pub patient_name: String,
    /// True when an outstanding request was reused instead of minting a
    /// new code. A reused ticket emits no new notification.
    pub reused: bool,
}

/// Orchestrates request creation, collision avoidance, notification
/// emission, verification, lazy expiry and bundle assembly.
///
/// Depends only on store traits; the ledger entry and the notification
/// are two independently time-boxed records, correlated by passkey value
/// alone.
pub struct AccessGrantService {
    users: Arc<dyn UserStore>,
    requests: Arc<dyn AccessRequestStore>,
    notifications: Arc<dyn NotificationStore>,
    aggregator: Arc<PatientRecordAggregator>,
    passkey_ttl: Duration,
}

impl AccessGrantService {
    /// Create a new grant service with the given passkey time-to-live.
    pub fn new(
        users: Arc<dyn UserStore>,
        requests: Arc<dyn AccessRequestStore>,
        notifications: Arc<dyn NotificationStore>,
        aggregator: Arc<PatientRecordAggregator>,
        passkey_ttl: Duration,
    ) -> Self {
        Self {
            users,
            requests,
            notifications,
            aggregator,
            passkey_ttl,
        }
    }

    /// Step 1: a doctor requests access to a patient's records.
    ///
    /// Re-requesting while a pending, unexpired request exists for the
    /// same (doctor, patient) pair returns that request's passkey
    /// unchanged and sends nothing new to the patient. Two concurrent
    /// first requests may both insert; the patient honors whichever code
    /// is read first and the rest expire naturally.
    pub async fn request_access(
        &self,
        doctor_id: Uuid,
        patient_email: &str,
    ) -> Result<AccessGrantTicket, AccessError> {
        let doctor = self
            .users
            .find_by_id(doctor_id)
            .await?
            .filter(|u| u.is_doctor())
            .ok_or(AccessError::InvalidActor)?;

        let patient = self
            .users
            .find_by_email(patient_email)
            .await?
            .filter(|u| u.is_patient())
            .ok_or(AccessError::PatientNotFound)?;

        let now = Utc::now();
        if let Some(existing) = self
            .requests
            .find_active_pending(doctor.id, patient.id, now)
            .await?
        {
            info!(
                doctor_id = %doctor.id,
                patient_id = %patient.id,
                "Reusing outstanding access request"
            );
            return Ok(AccessGrantTicket {
                passkey: existing.passkey,
                expires_in_minutes: self.passkey_ttl.num_minutes(),
                patient_name: patient.name,
                reused: true,
            });
        }

        let passkey = passkey::generate();
        let request = AccessRequest::new(doctor.id, patient.id, passkey.clone(), self.passkey_ttl);
        self.requests.create(&request).await?;

        // The notification gets its own expiry stamp; it is never kept in
        // lockstep with the ledger entry, and the patient deleting it
        // leaves the code verifiable.
        let notification = Notification {
            id: Uuid::new_v4(),
            patient_id: patient.id,
            kind: TYPE_PASSKEY_REQUEST.to_string(),
            title: "Doctor Access Request".to_string(),
            message: format!(
                "{} has requested access to view your medical records. \
                 Please share this access code with the doctor: {passkey}",
                doctor.name
            ),
            passkey: Some(passkey.clone()),
            doctor_name: Some(doctor.name.clone()),
            is_read: false,
            created_at: Utc::now(),
            expires_at: Some(Utc::now() + self.passkey_ttl),
        };
        self.notifications.create(&notification).await?;

        info!(
            doctor_id = %doctor.id,
            patient_id = %patient.id,
            request_id = %request.id,
            "Passkey generated and notification sent"
        );

        Ok(AccessGrantTicket {
            passkey,
            expires_in_minutes: self.passkey_ttl.num_minutes(),
            patient_name: patient.name,
            reused: false,
        })
    }

    /// Step 2: the doctor submits the code the patient read back.
    ///
    /// Single-use by construction: the lookup requires `pending` and the
    /// flip to `verified` is a compare-and-swap, so a second attempt with
    /// the same code fails with [`AccessError::InvalidOrExpiredCode`].
    pub async fn verify_passkey(
        &self,
        doctor_id: Uuid,
        patient_email: &str,
        passkey: &str,
    ) -> Result<PatientRecordBundle, AccessError> {
        let patient = self
            .users
            .find_by_email(patient_email)
            .await?
            .ok_or(AccessError::PatientNotFound)?;

        let passkey = passkey::normalize(passkey);
        let request = self
            .requests
            .find_pending_by_passkey(patient.id, &passkey)
            .await?
            .ok_or(AccessError::InvalidOrExpiredCode)?;

        // Expiry runs before the doctor check so an expired code never
        // leaks a wrong-doctor distinction.
        let now = Utc::now();
        if request.is_expired(now) {
            self.requests.mark_expired(request.id).await?;
            info!(request_id = %request.id, "Access request expired at verification");
            return Err(AccessError::CodeExpired);
        }

        if request.doctor_id != doctor_id {
            warn!(
                request_id = %request.id,
                doctor_id = %doctor_id,
                "Verification attempted with a code issued to another doctor"
            );
            return Err(AccessError::NotAuthorizedForCode);
        }

        if !self.requests.consume_pending(request.id, now).await? {
            // Lost the race against a concurrent verification.
            return Err(AccessError::InvalidOrExpiredCode);
        }

        info!(
            request_id = %request.id,
            doctor_id = %doctor_id,
            patient_id = %patient.id,
            "Passkey verified, releasing record bundle"
        );

        Ok(self.aggregator.assemble(patient.id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    use medihub_database::memory::{
        MemoryAccessRequestStore, MemoryAppointmentStore, MemoryLabResultStore,
        MemoryMedicalRecordStore, MemoryNotificationStore, MemoryPrescriptionStore,
        MemoryUserStore,
    };
    use medihub_database::store::{MedicalRecordStore, PrescriptionStore};
    use medihub_entity::access::AccessStatus;
    use medihub_entity::record::{MedicalRecord, Prescription};
    use medihub_entity::user::{User, UserRole};

    struct Harness {
        users: Arc<MemoryUserStore>,
        requests: Arc<MemoryAccessRequestStore>,
        notifications: Arc<MemoryNotificationStore>,
        medical_records: Arc<MemoryMedicalRecordStore>,
        prescriptions: Arc<MemoryPrescriptionStore>,
        service: AccessGrantService,
        doctor: User,
        patient: User,
    }

    fn user(name: &str, email: &str, role: UserRole) -> User {
        User {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: email.to_string(),
            role,
            gender: None,
            date_of_birth: None,
            age: Some(42),
            created_at: Utc::now(),
        }
    }

    async fn harness() -> Harness {
        let users = Arc::new(MemoryUserStore::new());
        let requests = Arc::new(MemoryAccessRequestStore::new());
        let notifications = Arc::new(MemoryNotificationStore::new());
        let medical_records = Arc::new(MemoryMedicalRecordStore::new());
        let prescriptions = Arc::new(MemoryPrescriptionStore::new());
        let lab_results = Arc::new(MemoryLabResultStore::new());
        let appointments = Arc::new(MemoryAppointmentStore::new());

        let doctor = user("Dr. Grey", "grey@hospital.test", UserRole::Doctor);
        let patient = user("Pat Doe", "p@x.com", UserRole::Patient);
        users.create(&doctor).await.unwrap();
        users.create(&patient).await.unwrap();

        let aggregator = Arc::new(PatientRecordAggregator::new(
            users.clone(),
            medical_records.clone(),
            prescriptions.clone(),
            lab_results.clone(),
            appointments.clone(),
        ));

        let service = AccessGrantService::new(
            users.clone(),
            requests.clone(),
            notifications.clone(),
            aggregator,
            Duration::minutes(30),
        );

        Harness {
            users,
            requests,
            notifications,
            medical_records,
            prescriptions,
            service,
            doctor,
            patient,
        }
    }

    #[tokio::test]
    async fn test_request_access_issues_passkey_and_notification() {
        let h = harness().await;

        let ticket = h
            .service
            .request_access(h.doctor.id, &h.patient.email)
            .await
            .unwrap();

        assert_eq!(ticket.passkey.len(), passkey::PASSKEY_LENGTH);
        assert!(
            ticket
                .passkey
                .bytes()
                .all(|b| passkey::PASSKEY_ALPHABET.contains(&b))
        );
        assert_eq!(ticket.expires_in_minutes, 30);
        assert_eq!(ticket.patient_name, "Pat Doe");
        assert!(!ticket.reused);

        let inbox = h.notifications.find_by_patient(h.patient.id).await.unwrap();
        assert_eq!(inbox.len(), 1);
        assert_eq!(inbox[0].kind, TYPE_PASSKEY_REQUEST);
        assert_eq!(inbox[0].passkey.as_deref(), Some(ticket.passkey.as_str()));
        assert_eq!(inbox[0].doctor_name.as_deref(), Some("Dr. Grey"));
        assert!(inbox[0].expires_at.is_some());
    }

    #[tokio::test]
    async fn test_repeat_request_reuses_passkey_and_sends_nothing() {
        let h = harness().await;

        let first = h
            .service
            .request_access(h.doctor.id, &h.patient.email)
            .await
            .unwrap();
        let second = h
            .service
            .request_access(h.doctor.id, &h.patient.email)
            .await
            .unwrap();

        assert_eq!(first.passkey, second.passkey);
        assert!(second.reused);

        let inbox = h.notifications.find_by_patient(h.patient.id).await.unwrap();
        assert_eq!(inbox.len(), 1, "reuse must not emit a second notification");
    }

    #[tokio::test]
    async fn test_request_access_rejects_unknown_or_wrong_role_actor() {
        let h = harness().await;

        let err = h
            .service
            .request_access(Uuid::new_v4(), &h.patient.email)
            .await
            .unwrap_err();
        assert!(matches!(err, AccessError::InvalidActor));

        // A patient cannot act as the requesting doctor.
        let err = h
            .service
            .request_access(h.patient.id, &h.patient.email)
            .await
            .unwrap_err();
        assert!(matches!(err, AccessError::InvalidActor));

        let err = h
            .service
            .request_access(h.doctor.id, "nobody@x.com")
            .await
            .unwrap_err();
        assert!(matches!(err, AccessError::PatientNotFound));

        // A doctor email does not resolve as a patient either.
        let err = h
            .service
            .request_access(h.doctor.id, &h.doctor.email)
            .await
            .unwrap_err();
        assert!(matches!(err, AccessError::PatientNotFound));
    }

    #[tokio::test]
    async fn test_verify_releases_bundle_with_counts() {
        let h = harness().await;

        for _ in 0..2 {
            h.medical_records
                .create(&MedicalRecord {
                    id: Uuid::new_v4(),
                    patient_id: h.patient.id,
                    hospital: Some("General".to_string()),
                    doctor_name: None,
                    record_type: None,
                    description: None,
                    details: None,
                    record_date: None,
                    softcopy_path: None,
                    category: None,
                    created_at: Utc::now(),
                })
                .await
                .unwrap();
        }
        h.prescriptions
            .create(&Prescription {
                id: Uuid::new_v4(),
                patient_id: h.patient.id,
                hospital: None,
                doctor_name: None,
                medicine_name: Some("Amoxicillin".to_string()),
                instructions: None,
                notes: None,
                prescription_date: None,
                status: Some("active".to_string()),
                prescription_image: None,
                created_at: Utc::now(),
            })
            .await
            .unwrap();

        let ticket = h
            .service
            .request_access(h.doctor.id, &h.patient.email)
            .await
            .unwrap();
        let bundle = h
            .service
            .verify_passkey(h.doctor.id, &h.patient.email, &ticket.passkey)
            .await
            .unwrap();

        assert_eq!(bundle.id, h.patient.id);
        assert_eq!(bundle.name, "Pat Doe");
        assert_eq!(bundle.medical_records_count, 2);
        assert_eq!(bundle.prescriptions_count, 1);
        assert_eq!(bundle.lab_results_count, 0);
        assert_eq!(bundle.appointments_count, 0);
    }

    #[tokio::test]
    async fn test_verify_is_case_insensitive() {
        let h = harness().await;
        let ticket = h
            .service
            .request_access(h.doctor.id, &h.patient.email)
            .await
            .unwrap();

        let lowered = ticket.passkey.to_lowercase();
        let bundle = h
            .service
            .verify_passkey(h.doctor.id, &h.patient.email, &lowered)
            .await;
        assert!(bundle.is_ok());
    }

    #[tokio::test]
    async fn test_verify_is_single_use() {
        let h = harness().await;
        let ticket = h
            .service
            .request_access(h.doctor.id, &h.patient.email)
            .await
            .unwrap();

        h.service
            .verify_passkey(h.doctor.id, &h.patient.email, &ticket.passkey)
            .await
            .unwrap();

        let err = h
            .service
            .verify_passkey(h.doctor.id, &h.patient.email, &ticket.passkey)
            .await
            .unwrap_err();
        assert!(matches!(err, AccessError::InvalidOrExpiredCode));
    }

    #[tokio::test]
    async fn test_wrong_doctor_is_rejected_and_request_stays_pending() {
        let h = harness().await;
        let intruder = user("Dr. Stranger", "stranger@hospital.test", UserRole::Doctor);
        h.users.create(&intruder).await.unwrap();

        let ticket = h
            .service
            .request_access(h.doctor.id, &h.patient.email)
            .await
            .unwrap();

        let err = h
            .service
            .verify_passkey(intruder.id, &h.patient.email, &ticket.passkey)
            .await
            .unwrap_err();
        assert!(matches!(err, AccessError::NotAuthorizedForCode));

        // The rightful doctor can still verify afterwards.
        let bundle = h
            .service
            .verify_passkey(h.doctor.id, &h.patient.email, &ticket.passkey)
            .await;
        assert!(bundle.is_ok());
    }

    #[tokio::test]
    async fn test_unknown_code_is_invalid() {
        let h = harness().await;
        let err = h
            .service
            .verify_passkey(h.doctor.id, &h.patient.email, "ZZZZZ")
            .await
            .unwrap_err();
        assert!(matches!(err, AccessError::InvalidOrExpiredCode));
    }

    #[tokio::test]
    async fn test_expired_code_is_persisted_expired_and_rerequest_mints_fresh() {
        let h = harness().await;

        // Plant a request whose window already lapsed.
        let mut stale = AccessRequest::new(
            h.doctor.id,
            h.patient.id,
            "XK3M9".to_string(),
            Duration::minutes(30),
        );
        stale.expires_at = Utc::now() - Duration::minutes(1);
        h.requests.create(&stale).await.unwrap();

        let err = h
            .service
            .verify_passkey(h.doctor.id, &h.patient.email, "XK3M9")
            .await
            .unwrap_err();
        assert!(matches!(err, AccessError::CodeExpired));

        let stored = h.requests.find_by_id(stale.id).await.unwrap().unwrap();
        assert_eq!(stored.status, AccessStatus::Expired);

        // A fresh request now mints a new passkey instead of reusing the
        // expired one.
        let ticket = h
            .service
            .request_access(h.doctor.id, &h.patient.email)
            .await
            .unwrap();
        assert!(!ticket.reused);
        assert_ne!(ticket.passkey, "XK3M9");
    }

    #[tokio::test]
    async fn test_deleting_notification_leaves_code_verifiable() {
        let h = harness().await;
        let ticket = h
            .service
            .request_access(h.doctor.id, &h.patient.email)
            .await
            .unwrap();

        let inbox = h.notifications.find_by_patient(h.patient.id).await.unwrap();
        h.notifications.delete(inbox[0].id).await.unwrap();

        let bundle = h
            .service
            .verify_passkey(h.doctor.id, &h.patient.email, &ticket.passkey)
            .await;
        assert!(bundle.is_ok(), "ledger and feed lifecycles are independent");
    }

    #[tokio::test]
    async fn test_concurrent_verifications_grant_once() {
        let h = harness().await;
        let ticket = h
            .service
            .request_access(h.doctor.id, &h.patient.email)
            .await
            .unwrap();

        let service = Arc::new(h.service);
        let mut handles = Vec::new();
        for _ in 0..8 {
            let service = Arc::clone(&service);
            let email = h.patient.email.clone();
            let passkey = ticket.passkey.clone();
            let doctor_id = h.doctor.id;
            handles.push(tokio::spawn(async move {
                service.verify_passkey(doctor_id, &email, &passkey).await
            }));
        }

        let mut granted = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                granted += 1;
            }
        }
        assert_eq!(granted, 1, "only one concurrent verification may win");
    }
}
