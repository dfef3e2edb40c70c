//! `workboard-auth` — authentication/authorization boundary.
//!
//! This crate is intentionally decoupled from HTTP and storage: token
//! signing/verification, password hashing, and the ownership guard are all
//! expressed over plain domain types.

pub mod claims;
pub mod guard;
pub mod jwt;
pub mod password;
pub mod role;

pub use claims::{JwtClaims, TokenValidationError, validate_claims};
pub use guard::{OwnershipError, authorize_owner};
pub use jwt::{Hs256TokenCodec, JwtValidator, TokenError};
pub use password::{PasswordError, hash_password, verify_password};
pub use role::Role;
