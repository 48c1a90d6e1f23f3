//! In-memory notification feed.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use uuid::Uuid;

use medihub_core::result::AppResult;
use medihub_entity::notification::Notification;

use crate::store::NotificationStore;

/// Concurrent in-process notification feed.
#[derive(Debug, Default)]
pub struct MemoryNotificationStore {
    notifications: DashMap<Uuid, Notification>,
}

impl MemoryNotificationStore {
    /// Create an empty feed.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NotificationStore for MemoryNotificationStore {
    async fn create(&self, notification: &Notification) -> AppResult<()> {
        self.notifications
            .insert(notification.id, notification.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Notification>> {
        Ok(self.notifications.get(&id).map(|n| n.clone()))
    }

    async fn find_by_patient(&self, patient_id: Uuid) -> AppResult<Vec<Notification>> {
        let mut list: Vec<Notification> = self
            .notifications
            .iter()
            .filter(|n| n.patient_id == patient_id)
            .map(|n| n.clone())
            .collect();
        list.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(list)
    }

    async fn count_unread(&self, patient_id: Uuid) -> AppResult<i64> {
        Ok(self
            .notifications
            .iter()
            .filter(|n| n.patient_id == patient_id && !n.is_read)
            .count() as i64)
    }

    async fn mark_read(&self, id: Uuid) -> AppResult<()> {
        if let Some(mut n) = self.notifications.get_mut(&id) {
            n.is_read = true;
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.notifications.remove(&id);
        Ok(())
    }

    async fn delete_expired(&self, now: DateTime<Utc>) -> AppResult<u64> {
        let before = self.notifications.len();
        self.notifications
            .retain(|_, n| n.expires_at.map(|exp| exp >= now).unwrap_or(true));
        Ok((before - self.notifications.len()) as u64)
    }
}
