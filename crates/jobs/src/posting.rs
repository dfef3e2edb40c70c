use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use workboard_core::{DomainError, DomainResult, JobId, UserId};

/// Unvalidated posting fields as submitted by a company.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobDraft {
    pub title: Option<String>,
    pub description: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<String>,
    pub salary: Option<String>,
    pub category: Option<String>,
}

/// A company's listing, the unit applicants apply against.
///
/// `created_by` is immutable and `views` only ever increments; postings are
/// never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: JobId,
    pub title: String,
    pub description: String,
    pub company: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<String>,
    pub salary: Option<String>,
    pub category: Option<String>,
    pub views: u64,
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl JobPosting {
    /// Validate a draft into a posting. Title and description are required;
    /// everything else is free-form and optional.
    pub fn new(draft: JobDraft, created_by: UserId, now: DateTime<Utc>) -> DomainResult<Self> {
        let title = required(draft.title, "title")?;
        let description = required(draft.description, "description")?;

        Ok(Self {
            id: JobId::new(),
            title,
            description,
            company: draft.company,
            location: draft.location,
            job_type: draft.job_type,
            salary: draft.salary,
            category: draft.category,
            views: 0,
            created_by,
            created_at: now,
            updated_at: now,
        })
    }

    /// Count one detail-page view.
    pub fn record_view(&mut self, now: DateTime<Utc>) {
        self.views += 1;
        self.updated_at = now;
    }
}

fn required(value: Option<String>, field: &str) -> DomainResult<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(DomainError::validation(format!("{field} is required"))),
    }
}
