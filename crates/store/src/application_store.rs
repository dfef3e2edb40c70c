use std::collections::HashMap;
use std::sync::RwLock;

use workboard_applications::Application;
use workboard_core::{ApplicationId, JobId, UserId};

use crate::error::StoreError;

/// Store seam for applications.
pub trait ApplicationStore: Send + Sync {
    /// Insert iff no application exists for the same `(job, applicant)`
    /// pair. The existence check and the insert happen under one write lock,
    /// so concurrent double-submits admit exactly one record.
    fn create_unique(&self, application: Application) -> Result<Application, StoreError>;

    fn get(&self, id: ApplicationId) -> Result<Option<Application>, StoreError>;

    /// The applicant's own applications, newest-created first.
    fn list_by_applicant(&self, applicant: UserId) -> Result<Vec<Application>, StoreError>;

    /// Applications against any of the given jobs, newest-created first.
    fn list_by_jobs(&self, jobs: &[JobId]) -> Result<Vec<Application>, StoreError>;

    /// Replace an existing record (status updates; last writer wins).
    /// `Ok(None)` when the record no longer exists.
    fn update(&self, application: Application) -> Result<Option<Application>, StoreError>;

    /// Delete iff the record exists and is owned by `applicant`; returns the
    /// removed record. Withdrawal is unconditional on status.
    fn remove_owned(
        &self,
        id: ApplicationId,
        applicant: UserId,
    ) -> Result<Option<Application>, StoreError>;
}

/// In-memory application collection.
#[derive(Debug, Default)]
pub struct InMemoryApplicationStore {
    inner: RwLock<HashMap<ApplicationId, Application>>,
}

impl InMemoryApplicationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn newest_first(applications: &mut [Application]) {
    applications.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
}

impl ApplicationStore for InMemoryApplicationStore {
    fn create_unique(&self, application: Application) -> Result<Application, StoreError> {
        let mut map = self.inner.write().map_err(|_| StoreError::Poisoned)?;

        let duplicate = map
            .values()
            .any(|a| a.job == application.job && a.applicant == application.applicant);
        if duplicate {
            return Err(StoreError::conflict("already applied to this job"));
        }

        map.insert(application.id, application.clone());
        Ok(application)
    }

    fn get(&self, id: ApplicationId) -> Result<Option<Application>, StoreError> {
        let map = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(map.get(&id).cloned())
    }

    fn list_by_applicant(&self, applicant: UserId) -> Result<Vec<Application>, StoreError> {
        let map = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        let mut applications: Vec<_> = map
            .values()
            .filter(|a| a.applicant == applicant)
            .cloned()
            .collect();
        newest_first(&mut applications);
        Ok(applications)
    }

    fn list_by_jobs(&self, jobs: &[JobId]) -> Result<Vec<Application>, StoreError> {
        let map = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        let mut applications: Vec<_> = map
            .values()
            .filter(|a| jobs.contains(&a.job))
            .cloned()
            .collect();
        newest_first(&mut applications);
        Ok(applications)
    }

    fn update(&self, application: Application) -> Result<Option<Application>, StoreError> {
        let mut map = self.inner.write().map_err(|_| StoreError::Poisoned)?;

        Ok(map.get_mut(&application.id).map(|slot| {
            *slot = application;
            slot.clone()
        }))
    }

    fn remove_owned(
        &self,
        id: ApplicationId,
        applicant: UserId,
    ) -> Result<Option<Application>, StoreError> {
        let mut map = self.inner.write().map_err(|_| StoreError::Poisoned)?;

        match map.get(&id) {
            Some(a) if a.applicant == applicant => Ok(map.remove(&id)),
            _ => Ok(None),
        }
    }
}
