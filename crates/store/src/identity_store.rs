use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{DateTime, Utc};

use workboard_core::UserId;
use workboard_identities::{Identity, ProfileUpdate};

use crate::error::StoreError;

/// Store seam for user accounts.
pub trait IdentityStore: Send + Sync {
    /// Insert a new identity. Fails with `Conflict` if the email is already
    /// registered; the existence check and the insert are atomic.
    fn create(&self, identity: Identity) -> Result<Identity, StoreError>;

    fn get(&self, id: UserId) -> Result<Option<Identity>, StoreError>;

    fn find_by_email(&self, email: &str) -> Result<Option<Identity>, StoreError>;

    /// Apply a partial profile update. `Ok(None)` when the identity does not
    /// exist.
    fn update_profile(
        &self,
        id: UserId,
        update: ProfileUpdate,
        now: DateTime<Utc>,
    ) -> Result<Option<Identity>, StoreError>;
}

/// In-memory identity collection.
#[derive(Debug, Default)]
pub struct InMemoryIdentityStore {
    inner: RwLock<HashMap<UserId, Identity>>,
}

impl InMemoryIdentityStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdentityStore for InMemoryIdentityStore {
    fn create(&self, identity: Identity) -> Result<Identity, StoreError> {
        let mut map = self.inner.write().map_err(|_| StoreError::Poisoned)?;

        if map.values().any(|i| i.email == identity.email) {
            return Err(StoreError::conflict("email already in use"));
        }

        map.insert(identity.id, identity.clone());
        Ok(identity)
    }

    fn get(&self, id: UserId) -> Result<Option<Identity>, StoreError> {
        let map = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(map.get(&id).cloned())
    }

    fn find_by_email(&self, email: &str) -> Result<Option<Identity>, StoreError> {
        let map = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(map.values().find(|i| i.email == email).cloned())
    }

    fn update_profile(
        &self,
        id: UserId,
        update: ProfileUpdate,
        now: DateTime<Utc>,
    ) -> Result<Option<Identity>, StoreError> {
        let mut map = self.inner.write().map_err(|_| StoreError::Poisoned)?;

        Ok(map.get_mut(&id).map(|identity| {
            identity.apply_profile_update(update, now);
            identity.clone()
        }))
    }
}
