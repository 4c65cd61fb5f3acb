//! Configuration for the token service

/// Suffix appended to the primary secret to derive the refresh signing secret
pub const REFRESH_SECRET_SUFFIX: &str = "_REFRESH";

/// Configuration for the token service
///
/// Constructed once during startup from the environment and passed into
/// `TokenService::new`; the service never reads ambient state.
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Primary JWT signing secret (access tokens)
    pub secret: String,

    /// Access token expiry in seconds
    pub access_token_expiry_seconds: i64,
}

impl TokenServiceConfig {
    /// Creates a new token service configuration
    pub fn new(secret: impl Into<String>, access_token_expiry_seconds: i64) -> Self {
        Self {
            secret: secret.into(),
            access_token_expiry_seconds,
        }
    }

    /// Secret for the refresh signing domain: the primary secret with the
    /// fixed suffix appended
    pub fn refresh_secret(&self) -> String {
        format!("{}{}", self.secret, REFRESH_SECRET_SUFFIX)
    }
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            secret: "development-secret-please-change-in-production".to_string(),
            access_token_expiry_seconds: 900,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_secret_derivation() {
        let config = TokenServiceConfig::new("primary", 900);
        assert_eq!(config.refresh_secret(), "primary_REFRESH");
    }
}
