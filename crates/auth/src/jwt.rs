//! HS256 token signing and verification.
//!
//! The signature layer (this module) and the deterministic claims validation
//! ([`crate::claims`]) are kept separate so the latter stays pure and
//! clock-injectable.

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;

use workboard_core::UserId;

use crate::{JwtClaims, Role, TokenValidationError, validate_claims};

/// Fixed bearer-token lifetime: 7 days from issuance.
pub const TOKEN_TTL_SECS: i64 = 7 * 24 * 60 * 60;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// Malformed token, bad signature, or undecodable claims. Deliberately
    /// one variant: callers must not learn which check failed.
    #[error("token rejected")]
    Invalid,

    #[error(transparent)]
    Claims(#[from] TokenValidationError),

    #[error("failed to sign token")]
    Signing,
}

/// Verification half of the token codec, as seen by the HTTP middleware.
pub trait JwtValidator: Send + Sync {
    fn validate(&self, token: &str, now: DateTime<Utc>) -> Result<JwtClaims, TokenError>;
}

/// HS256 codec over a shared secret. Issues tokens at signup/login and
/// verifies them per request.
pub struct Hs256TokenCodec {
    header: Header,
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl Hs256TokenCodec {
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked by `validate_claims` against an injected clock,
        // not by the decoder.
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        Self {
            header: Header::new(Algorithm::HS256),
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Mint a signed token for an authenticated user.
    pub fn issue(&self, user_id: UserId, role: Role, now: DateTime<Utc>) -> Result<String, TokenError> {
        let claims = JwtClaims {
            sub: user_id,
            role,
            iat: now.timestamp(),
            exp: now.timestamp() + TOKEN_TTL_SECS,
        };

        jsonwebtoken::encode(&self.header, &claims, &self.encoding).map_err(|_| TokenError::Signing)
    }
}

impl JwtValidator for Hs256TokenCodec {
    fn validate(&self, token: &str, now: DateTime<Utc>) -> Result<JwtClaims, TokenError> {
        let decoded = jsonwebtoken::decode::<JwtClaims>(token, &self.decoding, &self.validation)
            .map_err(|_| TokenError::Invalid)?;

        validate_claims(&decoded.claims, now)?;
        Ok(decoded.claims)
    }
}
