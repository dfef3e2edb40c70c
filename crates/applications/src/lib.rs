//! Applications domain module (the applicant↔job join record and its
//! status lifecycle).
//!
//! Business rules only: no IO, no HTTP, no storage.

pub mod application;

pub use application::{Application, ApplicationStatus};
