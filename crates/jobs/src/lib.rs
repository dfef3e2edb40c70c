//! Jobs domain module (company job postings).
//!
//! Business rules only: no IO, no HTTP, no storage.

pub mod posting;

pub use posting::{JobDraft, JobPosting};
