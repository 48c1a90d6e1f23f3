//! In-memory user directory.

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use medihub_core::result::AppResult;
use medihub_entity::user::User;

use crate::store::UserStore;

/// Concurrent in-process user directory.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: DashMap<Uuid, User>,
}

impl MemoryUserStore {
    /// Create an empty user store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.users.get(&id).map(|u| u.clone()))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self
            .users
            .iter()
            .find(|u| u.email == email)
            .map(|u| u.clone()))
    }

    async fn create(&self, user: &User) -> AppResult<()> {
        self.users.insert(user.id, user.clone());
        Ok(())
    }
}
