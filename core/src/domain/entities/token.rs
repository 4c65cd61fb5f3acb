//! Token entities for JWT-based authentication.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use super::user::UserRole;

/// Refresh token expiration time (7 days)
pub const REFRESH_TOKEN_EXPIRY_DAYS: i64 = 7;

/// Claims structure for JWT payload
///
/// Access and refresh tokens carry the same claim shape; which class a token
/// belongs to is determined solely by the secret that signed it, never by a
/// payload field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User identifier
    pub id: i64,

    /// User email
    pub email: String,

    /// User role
    pub role: UserRole,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,
}

impl Claims {
    /// Creates claims for an access token with the given lifetime in seconds
    pub fn new_access_token(
        id: i64,
        email: impl Into<String>,
        role: UserRole,
        expiry_seconds: i64,
    ) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::seconds(expiry_seconds);

        Self {
            id,
            email: email.into(),
            role,
            iat: now.timestamp(),
            exp: expiry.timestamp(),
        }
    }

    /// Creates claims for a refresh token with the fixed 7-day lifetime
    pub fn new_refresh_token(id: i64, email: impl Into<String>, role: UserRole) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::days(REFRESH_TOKEN_EXPIRY_DAYS);

        Self {
            id,
            email: email.into(),
            role,
            iat: now.timestamp(),
            exp: expiry.timestamp(),
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

/// Token pair returned to the client after login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// JWT access token
    pub access_token: String,

    /// JWT refresh token
    pub refresh_token: String,
}

impl TokenPair {
    /// Creates a new token pair
    pub fn new(access_token: String, refresh_token: String) -> Self {
        Self {
            access_token,
            refresh_token,
        }
    }
}
