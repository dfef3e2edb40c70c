//! Identities domain module (user accounts and their profile blobs).
//!
//! Business rules only: no IO, no HTTP, no storage.

pub mod identity;

pub use identity::{Identity, ProfileUpdate};
