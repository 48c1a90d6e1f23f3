//! In-memory access request ledger.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use uuid::Uuid;

use medihub_core::result::AppResult;
use medihub_entity::access::{AccessRequest, AccessStatus};

use crate::store::AccessRequestStore;

/// Concurrent in-process access request ledger.
#[derive(Debug, Default)]
pub struct MemoryAccessRequestStore {
    requests: DashMap<Uuid, AccessRequest>,
}

impl MemoryAccessRequestStore {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccessRequestStore for MemoryAccessRequestStore {
    async fn create(&self, request: &AccessRequest) -> AppResult<()> {
        self.requests.insert(request.id, request.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<AccessRequest>> {
        Ok(self.requests.get(&id).map(|r| r.clone()))
    }

    async fn find_active_pending(
        &self,
        doctor_id: Uuid,
        patient_id: Uuid,
        now: DateTime<Utc>,
    ) -> AppResult<Option<AccessRequest>> {
        Ok(self
            .requests
            .iter()
            .filter(|r| {
                r.doctor_id == doctor_id
                    && r.patient_id == patient_id
                    && r.status == AccessStatus::Pending
                    && r.expires_at > now
            })
            .max_by_key(|r| r.created_at)
            .map(|r| r.clone()))
    }

    async fn find_pending_by_passkey(
        &self,
        patient_id: Uuid,
        passkey: &str,
    ) -> AppResult<Option<AccessRequest>> {
        Ok(self
            .requests
            .iter()
            .find(|r| {
                r.patient_id == patient_id
                    && r.passkey == passkey
                    && r.status == AccessStatus::Pending
            })
            .map(|r| r.clone()))
    }

    async fn mark_expired(&self, id: Uuid) -> AppResult<bool> {
        match self.requests.get_mut(&id) {
            Some(mut req) if req.status == AccessStatus::Pending => {
                req.status = AccessStatus::Expired;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn consume_pending(&self, id: Uuid, verified_at: DateTime<Utc>) -> AppResult<bool> {
        // `get_mut` holds the shard lock for the whole check-and-flip, so
        // concurrent consumers cannot both observe `Pending`.
        match self.requests.get_mut(&id) {
            Some(mut req) if req.status == AccessStatus::Pending => {
                req.status = AccessStatus::Verified;
                req.verified_at = Some(verified_at);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn delete_expired(&self, now: DateTime<Utc>) -> AppResult<u64> {
        let before = self.requests.len();
        self.requests.retain(|_, r| r.expires_at >= now);
        Ok((before - self.requests.len()) as u64)
    }
}
