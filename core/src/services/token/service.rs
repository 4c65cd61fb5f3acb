//! Main token service implementation

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::Claims;
use crate::domain::entities::user::UserRole;
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;

/// Service for minting and validating access and refresh tokens
///
/// The two token classes share the claim shape but live in separate signing
/// domains: access tokens under the primary secret, refresh tokens under the
/// derived refresh secret. Verification of one class always rejects tokens of
/// the other. All operations are synchronous and CPU-bound; the service holds
/// no mutable state and performs no I/O.
pub struct TokenService {
    config: TokenServiceConfig,
    access_encoding_key: EncodingKey,
    access_decoding_key: DecodingKey,
    refresh_encoding_key: EncodingKey,
    refresh_decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service from an immutable configuration
    pub fn new(config: TokenServiceConfig) -> Self {
        let refresh_secret = config.refresh_secret();

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;

        Self {
            access_encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            access_decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            refresh_encoding_key: EncodingKey::from_secret(refresh_secret.as_bytes()),
            refresh_decoding_key: DecodingKey::from_secret(refresh_secret.as_bytes()),
            validation,
            config,
        }
    }

    /// Signs an access token embedding the given identity
    ///
    /// The embedded expiry is `now` plus the configured access lifetime.
    pub fn sign_access_token(
        &self,
        id: i64,
        email: &str,
        role: UserRole,
    ) -> Result<String, DomainError> {
        let claims =
            Claims::new_access_token(id, email, role, self.config.access_token_expiry_seconds);
        self.encode_jwt(&claims, &self.access_encoding_key)
    }

    /// Signs a refresh token embedding the given identity
    ///
    /// The embedded expiry is fixed at `now` plus 7 days.
    pub fn sign_refresh_token(
        &self,
        id: i64,
        email: &str,
        role: UserRole,
    ) -> Result<String, DomainError> {
        let claims = Claims::new_refresh_token(id, email, role);
        self.encode_jwt(&claims, &self.refresh_encoding_key)
    }

    /// Verifies an access token and returns the claims
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The decoded claims if valid
    /// * `Err(TokenError::TokenExpired)` - Past the embedded expiry
    /// * `Err(TokenError::InvalidToken)` - Malformed, wrongly signed, or
    ///   signed under the refresh secret
    pub fn verify_access_token(&self, token: &str) -> Result<Claims, DomainError> {
        self.decode_jwt(token, &self.access_decoding_key)
    }

    /// Verifies a refresh token, checked exclusively against the refresh
    /// secret, with the same failure modes as `verify_access_token`
    pub fn verify_refresh_token(&self, token: &str) -> Result<Claims, DomainError> {
        self.decode_jwt(token, &self.refresh_decoding_key)
    }

    /// Encodes claims into a JWT
    fn encode_jwt(&self, claims: &Claims, key: &EncodingKey) -> Result<String, DomainError> {
        encode(&Header::new(Algorithm::HS256), claims, key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }

    /// Decodes and validates a JWT against one signing domain
    fn decode_jwt(&self, token: &str, key: &DecodingKey) -> Result<Claims, DomainError> {
        let token_data = decode::<Claims>(token, key, &self.validation).map_err(|e| {
            if e.kind() == &jsonwebtoken::errors::ErrorKind::ExpiredSignature {
                DomainError::Token(TokenError::TokenExpired)
            } else {
                DomainError::Token(TokenError::InvalidToken)
            }
        })?;

        Ok(token_data.claims)
    }
}
