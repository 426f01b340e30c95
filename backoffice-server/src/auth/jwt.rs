//! JWT token service
//!
//! HS256 session tokens valid for 24 hours. Expiry is checked against the
//! injected clock with zero leeway, so "now" is always explicit.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use shared::models::{Account, Role};
use thiserror::Error;

/// Session lifetime
pub const TOKEN_TTL_HOURS: i64 = 24;

/// JWT claims carried by a session token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Account ID as string (subject)
    pub sub: String,
    pub user_id: i64,
    pub email: String,
    /// Role name, compared exactly by the gate
    pub role: String,
    pub name: String,
    pub iat: i64,
    pub exp: i64,
}

/// JWT errors
#[derive(Error, Debug)]
pub enum JwtError {
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Token has expired")]
    ExpiredToken,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Token generation failed: {0}")]
    GenerationFailed(String),
}

/// JWT token service
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl JwtService {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::hours(TOKEN_TTL_HOURS),
        }
    }

    /// Sign a token for `account`, issued at `issued_at`
    pub fn issue(&self, account: &Account, issued_at: DateTime<Utc>) -> Result<String, JwtError> {
        let claims = Claims {
            sub: account.id.to_string(),
            user_id: account.id,
            email: account.email.clone(),
            role: account.role.as_str().to_string(),
            name: account.name.clone(),
            iat: issued_at.timestamp(),
            exp: (issued_at + self.ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| JwtError::GenerationFailed(e.to_string()))
    }

    /// Verify signature and expiry at `now`
    pub fn validate_token(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        // expiry is compared against `now` below, not the system clock
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["exp"]);

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::ExpiredToken,
                ErrorKind::InvalidSignature => JwtError::InvalidSignature,
                _ => JwtError::InvalidToken(e.to_string()),
            }
        })?;

        if token_data.claims.exp <= now.timestamp() {
            return Err(JwtError::ExpiredToken);
        }

        Ok(token_data.claims)
    }

    /// Extract the token from an `Authorization` header (exact `Bearer ` prefix)
    pub fn extract_from_header(header: &str) -> Option<&str> {
        header
            .strip_prefix("Bearer ")
            .filter(|token| !token.is_empty())
    }
}

/// Authenticated caller, built from verified claims
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: i64,
    pub email: String,
    pub name: String,
    /// Role name as carried by the token
    pub role: String,
}

impl From<Claims> for CurrentUser {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.user_id,
            email: claims.email,
            name: claims.name,
            role: claims.role,
        }
    }
}

impl CurrentUser {
    /// Exact, case-sensitive membership test
    pub fn has_any_role(&self, roles: &[Role]) -> bool {
        roles.iter().any(|role| role.as_str() == self.role)
    }
}
