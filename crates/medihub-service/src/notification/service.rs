//! Inbox operations: list, mark-read, delete.
//!
//! Everything here serves the patient UI; the grant protocol itself only
//! ever appends to the feed. Deleting a notification never invalidates
//! the access request it mirrors.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use medihub_core::error::AppError;
use medihub_database::store::NotificationStore;
use medihub_entity::notification::Notification;

/// A patient's inbox as the API returns it.
#[derive(Debug, Clone)]
pub struct NotificationFeed {
    /// Notifications, newest first.
    pub notifications: Vec<Notification>,
    /// How many are unread.
    pub unread_count: i64,
}

/// Manages a patient's notification inbox.
pub struct NotificationService {
    notifications: Arc<dyn NotificationStore>,
}

impl NotificationService {
    /// Create a new notification service.
    pub fn new(notifications: Arc<dyn NotificationStore>) -> Self {
        Self { notifications }
    }

    /// List a patient's notifications, newest first, with the unread count.
    pub async fn list(&self, patient_id: Uuid) -> Result<NotificationFeed, AppError> {
        let notifications = self.notifications.find_by_patient(patient_id).await?;
        let unread_count = self.notifications.count_unread(patient_id).await?;
        Ok(NotificationFeed {
            notifications,
            unread_count,
        })
    }

    /// Mark one of the patient's notifications as read.
    pub async fn mark_read(&self, patient_id: Uuid, notification_id: Uuid) -> Result<(), AppError> {
        self.owned(patient_id, notification_id).await?;
        self.notifications.mark_read(notification_id).await
    }

    /// Delete one of the patient's notifications. The underlying access
    /// request, if any, stays valid.
    pub async fn delete(&self, patient_id: Uuid, notification_id: Uuid) -> Result<(), AppError> {
        self.owned(patient_id, notification_id).await?;
        self.notifications.delete(notification_id).await?;
        info!(notification_id = %notification_id, "Notification deleted");
        Ok(())
    }

    /// Fail with not-found or not-owner before any mutation.
    async fn owned(&self, patient_id: Uuid, notification_id: Uuid) -> Result<(), AppError> {
        let notification = self
            .notifications
            .find_by_id(notification_id)
            .await?
            .ok_or_else(|| AppError::not_found("Notification not found"))?;
        if notification.patient_id != patient_id {
            return Err(AppError::authorization("Not authorized"));
        }
        Ok(())
    }
}
