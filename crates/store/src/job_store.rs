use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{DateTime, Utc};

use workboard_core::{JobId, UserId};
use workboard_jobs::JobPosting;

use crate::error::StoreError;

/// Store seam for job postings. Postings are never deleted.
pub trait JobStore: Send + Sync {
    fn create(&self, job: JobPosting) -> Result<JobPosting, StoreError>;

    fn get(&self, id: JobId) -> Result<Option<JobPosting>, StoreError>;

    /// All postings, newest-created first.
    fn list(&self) -> Result<Vec<JobPosting>, StoreError>;

    fn list_by_creator(&self, creator: UserId) -> Result<Vec<JobPosting>, StoreError>;

    /// Atomic `views + 1`. `Ok(None)` when the posting does not exist.
    fn record_view(&self, id: JobId, now: DateTime<Utc>) -> Result<Option<JobPosting>, StoreError>;
}

/// In-memory job collection.
#[derive(Debug, Default)]
pub struct InMemoryJobStore {
    inner: RwLock<HashMap<JobId, JobPosting>>,
}

impl InMemoryJobStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn newest_first(jobs: &mut [JobPosting]) {
    // Tie-break on id (UUIDv7, time-ordered) for a deterministic order.
    jobs.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
}

impl JobStore for InMemoryJobStore {
    fn create(&self, job: JobPosting) -> Result<JobPosting, StoreError> {
        let mut map = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        map.insert(job.id, job.clone());
        Ok(job)
    }

    fn get(&self, id: JobId) -> Result<Option<JobPosting>, StoreError> {
        let map = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(map.get(&id).cloned())
    }

    fn list(&self) -> Result<Vec<JobPosting>, StoreError> {
        let map = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        let mut jobs: Vec<_> = map.values().cloned().collect();
        newest_first(&mut jobs);
        Ok(jobs)
    }

    fn list_by_creator(&self, creator: UserId) -> Result<Vec<JobPosting>, StoreError> {
        let map = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        let mut jobs: Vec<_> = map
            .values()
            .filter(|j| j.created_by == creator)
            .cloned()
            .collect();
        newest_first(&mut jobs);
        Ok(jobs)
    }

    fn record_view(&self, id: JobId, now: DateTime<Utc>) -> Result<Option<JobPosting>, StoreError> {
        let mut map = self.inner.write().map_err(|_| StoreError::Poisoned)?;

        Ok(map.get_mut(&id).map(|job| {
            job.record_view(now);
            job.clone()
        }))
    }
}
