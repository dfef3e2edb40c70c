//! `workboard-store` — store seams and the in-memory document store.
//!
//! One trait per collection so the API layer can hold `Arc<dyn ...>`
//! handles; the in-memory implementations provide the per-document
//! atomicity the system relies on (unique email, unique `(job, applicant)`
//! pair, atomic view increments) by doing check-and-write under one lock.

pub mod application_store;
pub mod error;
pub mod identity_store;
pub mod job_store;

pub use application_store::{ApplicationStore, InMemoryApplicationStore};
pub use error::StoreError;
pub use identity_store::{IdentityStore, InMemoryIdentityStore};
pub use job_store::{InMemoryJobStore, JobStore};
