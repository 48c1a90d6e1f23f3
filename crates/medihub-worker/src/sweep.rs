//! Periodic deletion of lapsed access requests and notifications.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::watch;
use tokio::time;
use tracing::{debug, info, warn};

use medihub_core::config::worker::WorkerConfig;
use medihub_database::store::{AccessRequestStore, NotificationStore};

/// Storage-hygiene sweeper.
///
/// Runs until the shutdown signal flips; each pass deletes ledger rows
/// and notifications whose window closed. Lazy expiry at verification
/// time remains the source of truth, so a missed pass is harmless.
pub struct ExpirySweeper {
    requests: Arc<dyn AccessRequestStore>,
    notifications: Arc<dyn NotificationStore>,
    config: WorkerConfig,
}

impl ExpirySweeper {
    /// Create a new sweeper over the given stores.
    pub fn new(
        requests: Arc<dyn AccessRequestStore>,
        notifications: Arc<dyn NotificationStore>,
        config: WorkerConfig,
    ) -> Self {
        Self {
            requests,
            notifications,
            config,
        }
    }

    /// Run the sweep loop until the cancel signal is received.
    pub async fn run(&self, mut cancel: watch::Receiver<bool>) {
        let interval = Duration::from_secs(self.config.sweep_interval_seconds);
        info!(
            interval_seconds = self.config.sweep_interval_seconds,
            "Expiry sweeper started"
        );

        loop {
            tokio::select! {
                changed = cancel.changed() => {
                    // A closed channel means the server is gone too.
                    if changed.is_err() || *cancel.borrow() {
                        info!("Expiry sweeper received shutdown signal");
                        break;
                    }
                }
                _ = time::sleep(interval) => {
                    self.sweep_once().await;
                }
            }
        }

        info!("Expiry sweeper shut down");
    }

    /// One sweep pass. Failures are logged and retried on the next pass.
    pub async fn sweep_once(&self) {
        let now = Utc::now();

        match self.requests.delete_expired(now).await {
            Ok(0) => debug!("No lapsed access requests to sweep"),
            Ok(n) => info!(swept = n, "Deleted lapsed access requests"),
            Err(e) => warn!(error = %e, "Access request sweep failed"),
        }

        match self.notifications.delete_expired(now).await {
            Ok(0) => debug!("No lapsed notifications to sweep"),
            Ok(n) => info!(swept = n, "Deleted lapsed notifications"),
            Err(e) => warn!(error = %e, "Notification sweep failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration as ChronoDuration;
    use uuid::Uuid;

    use medihub_database::memory::{MemoryAccessRequestStore, MemoryNotificationStore};
    use medihub_database::store::{AccessRequestStore, NotificationStore};
    use medihub_entity::access::AccessRequest;
    use medihub_entity::notification::Notification;

    #[tokio::test]
    async fn test_sweep_removes_only_lapsed_records() {
        let requests = Arc::new(MemoryAccessRequestStore::new());
        let notifications = Arc::new(MemoryNotificationStore::new());

        let fresh = AccessRequest::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            "AB2CD".to_string(),
            ChronoDuration::minutes(30),
        );
        let mut stale = AccessRequest::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            "EF3GH".to_string(),
            ChronoDuration::minutes(30),
        );
        stale.expires_at = Utc::now() - ChronoDuration::minutes(5);
        requests.create(&fresh).await.unwrap();
        requests.create(&stale).await.unwrap();

        let keeper = Notification {
            id: Uuid::new_v4(),
            patient_id: Uuid::new_v4(),
            kind: "passkey_request".to_string(),
            title: "Doctor Access Request".to_string(),
            message: "code".to_string(),
            passkey: Some("AB2CD".to_string()),
            doctor_name: None,
            is_read: false,
            created_at: Utc::now(),
            // No expiry set: never swept.
            expires_at: None,
        };
        let mut lapsed = keeper.clone();
        lapsed.id = Uuid::new_v4();
        lapsed.expires_at = Some(Utc::now() - ChronoDuration::minutes(5));
        notifications.create(&keeper).await.unwrap();
        notifications.create(&lapsed).await.unwrap();

        let sweeper = ExpirySweeper::new(
            requests.clone(),
            notifications.clone(),
            WorkerConfig::default(),
        );
        sweeper.sweep_once().await;

        assert!(requests.find_by_id(fresh.id).await.unwrap().is_some());
        assert!(requests.find_by_id(stale.id).await.unwrap().is_none());
        assert!(notifications.find_by_id(keeper.id).await.unwrap().is_some());
        assert!(notifications.find_by_id(lapsed.id).await.unwrap().is_none());
    }
}
