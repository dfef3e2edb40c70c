use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use workboard_core::UserId;

use crate::Role;

/// JWT claims model (transport-agnostic).
///
/// This is the minimal set of claims Workboard expects once a token has been
/// decoded/verified by the signature layer. Timestamps are unix seconds, as
/// on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtClaims {
    /// Subject / user identifier.
    pub sub: UserId,

    /// Role the account was created with.
    pub role: Role,

    /// Issued-at timestamp (unix seconds).
    pub iat: i64,

    /// Expiration timestamp (unix seconds).
    pub exp: i64,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenValidationError {
    #[error("token has expired")]
    Expired,

    #[error("token not yet valid (iat is in the future)")]
    NotYetValid,

    #[error("invalid token time window (exp <= iat)")]
    InvalidTimeWindow,
}

/// Deterministically validate JWT claims.
///
/// Note: this validates the *claims* only. Signature verification / decoding
/// lives in [`crate::jwt`].
pub fn validate_claims(claims: &JwtClaims, now: DateTime<Utc>) -> Result<(), TokenValidationError> {
    if claims.exp <= claims.iat {
        return Err(TokenValidationError::InvalidTimeWindow);
    }
    let now = now.timestamp();
    if now < claims.iat {
        return Err(TokenValidationError::NotYetValid);
    }
    if now >= claims.exp {
        return Err(TokenValidationError::Expired);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn claims(iat: i64, exp: i64) -> JwtClaims {
        JwtClaims {
            sub: UserId::new(),
            role: Role::Applicant,
            iat,
            exp,
        }
    }

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn accepts_claims_inside_validity_window() {
        assert_eq!(validate_claims(&claims(100, 200), at(150)), Ok(()));
    }

    #[test]
    fn rejects_expired_claims() {
        assert_eq!(
            validate_claims(&claims(100, 200), at(200)),
            Err(TokenValidationError::Expired)
        );
    }

    #[test]
    fn rejects_claims_issued_in_the_future() {
        assert_eq!(
            validate_claims(&claims(100, 200), at(50)),
            Err(TokenValidationError::NotYetValid)
        );
    }

    #[test]
    fn rejects_inverted_time_window() {
        assert_eq!(
            validate_claims(&claims(200, 100), at(150)),
            Err(TokenValidationError::InvalidTimeWindow)
        );
    }
}
