//! Authentication response value object for API responses.

use serde::{Deserialize, Serialize};

use crate::domain::entities::token::TokenPair;
use crate::domain::entities::user::UserRole;

/// Authentication response returned after a successful login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// JWT access token for API authentication
    pub access_token: String,

    /// JWT refresh token for obtaining new access tokens
    pub refresh_token: String,

    /// Role of the authenticated user
    pub role: UserRole,
}

impl AuthResponse {
    /// Creates a new authentication response
    pub fn new(access_token: String, refresh_token: String, role: UserRole) -> Self {
        Self {
            access_token,
            refresh_token,
            role,
        }
    }

    /// Creates an authentication response from a token pair and a role
    pub fn from_token_pair(token_pair: TokenPair, role: UserRole) -> Self {
        Self {
            access_token: token_pair.access_token,
            refresh_token: token_pair.refresh_token,
            role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_token_pair() {
        let pair = TokenPair::new("access".to_string(), "refresh".to_string());
        let response = AuthResponse::from_token_pair(pair, UserRole::Admin);

        assert_eq!(response.access_token, "access");
        assert_eq!(response.refresh_token, "refresh");
        assert_eq!(response.role, UserRole::Admin);
    }
}
