//! Main authentication service implementation

use std::sync::Arc;

use kg_shared::utils::validation::validators;

use crate::domain::entities::user::{NewUser, User, UserRole};
use crate::domain::value_objects::AuthResponse;
use crate::errors::{AuthError, DomainError, DomainResult, ValidationError};
use crate::repositories::UserRepository;
use crate::services::token::TokenService;

use super::config::AuthServiceConfig;

/// Authentication service for the registration, login, refresh, and
/// password-change flows
pub struct AuthService<U: UserRepository> {
    /// User repository for database operations
    user_repository: Arc<U>,
    /// Token service for JWT management
    token_service: Arc<TokenService>,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<U: UserRepository> AuthService<U> {
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Repository for user data persistence
    /// * `token_service` - Service for JWT token management
    /// * `config` - Service configuration
    pub fn new(
        user_repository: Arc<U>,
        token_service: Arc<TokenService>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            token_service,
            config,
        }
    }

    /// Register a new user account
    ///
    /// This method:
    /// 1. Validates the email format and minimum password length
    /// 2. Rejects emails that are already registered
    /// 3. Hashes the password and persists the account
    /// 4. Signs an access token for the new account
    ///
    /// The requested role is honored only for the literal `"admin"`; any
    /// other value falls back to `user`.
    ///
    /// # Returns
    ///
    /// * `Ok((User, String))` - The stored user and a freshly signed access token
    /// * `Err(DomainError)` - Validation failure, duplicate email, or store error
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        requested_role: Option<&str>,
    ) -> DomainResult<(User, String)> {
        // Step 1: Validate input shape
        if !validators::is_valid_email(email) {
            return Err(DomainError::Validation(ValidationError::InvalidEmail));
        }
        if !validators::meets_min_password_length(password) {
            return Err(DomainError::Validation(ValidationError::PasswordTooShort {
                min: validators::MIN_PASSWORD_LENGTH,
            }));
        }

        // Step 2: Reject duplicate emails
        if self.user_repository.exists_by_email(email).await? {
            return Err(DomainError::Auth(AuthError::EmailAlreadyRegistered));
        }

        // Step 3: Hash the password and persist the account
        let password_hash = bcrypt::hash(password, self.config.bcrypt_cost).map_err(|e| {
            DomainError::Internal {
                message: format!("Password hashing failed: {}", e),
            }
        })?;
        let role = UserRole::from_request(requested_role);
        let user = self
            .user_repository
            .create(NewUser::new(email, password_hash, role))
            .await?;

        tracing::info!(user_id = user.id, "registered new user");

        // Step 4: Sign an access token for the new account
        let token = self
            .token_service
            .sign_access_token(user.id, &user.email, user.role)?;

        Ok((user, token))
    }

    /// Authenticate with email and password
    ///
    /// Unknown email and wrong password produce the same error variant and
    /// message, so the response does not reveal whether the account exists.
    ///
    /// # Returns
    ///
    /// * `Ok(AuthResponse)` - Access token, refresh token, and the user's role
    /// * `Err(DomainError)` - Credential mismatch or store error
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AuthResponse> {
        let user = self
            .user_repository
            .find_by_email(email)
            .await?
            .ok_or(DomainError::Auth(AuthError::InvalidCredentials))?;

        let password_matches =
            bcrypt::verify(password, &user.password_hash).map_err(|e| DomainError::Internal {
                message: format!("Password verification failed: {}", e),
            })?;
        if !password_matches {
            return Err(DomainError::Auth(AuthError::InvalidCredentials));
        }

        let access_token = self
            .token_service
            .sign_access_token(user.id, &user.email, user.role)?;
        let refresh_token = self
            .token_service
            .sign_refresh_token(user.id, &user.email, user.role)?;

        tracing::info!(user_id = user.id, "user logged in");

        Ok(AuthResponse::new(access_token, refresh_token, user.role))
    }

    /// Issue a new access token from a valid refresh token
    ///
    /// The refresh token is not rotated and no store lookup happens; the new
    /// access token is signed from the verified claims.
    pub async fn refresh_token(&self, refresh_token: &str) -> DomainResult<String> {
        let claims = self.token_service.verify_refresh_token(refresh_token)?;

        self.token_service
            .sign_access_token(claims.id, &claims.email, claims.role)
    }

    /// Change the password of an authenticated user
    ///
    /// This method:
    /// 1. Validates the new password length
    /// 2. Loads the user record, failing if it disappeared
    /// 3. Verifies the supplied current password
    /// 4. Hashes and persists the new password
    pub async fn change_password(
        &self,
        user_id: i64,
        current_password: &str,
        new_password: &str,
    ) -> DomainResult<()> {
        if !validators::meets_min_password_length(new_password) {
            return Err(DomainError::Validation(ValidationError::PasswordTooShort {
                min: validators::MIN_PASSWORD_LENGTH,
            }));
        }

        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::Auth(AuthError::UserNotFound))?;

        let current_matches = bcrypt::verify(current_password, &user.password_hash).map_err(
            |e| DomainError::Internal {
                message: format!("Password verification failed: {}", e),
            },
        )?;
        if !current_matches {
            return Err(DomainError::Auth(AuthError::InvalidCredentials));
        }

        let new_hash = bcrypt::hash(new_password, self.config.bcrypt_cost).map_err(|e| {
            DomainError::Internal {
                message: format!("Password hashing failed: {}", e),
            }
        })?;
        let updated = self
            .user_repository
            .update_password(user.id, &new_hash)
            .await?;
        if !updated {
            return Err(DomainError::Auth(AuthError::UserNotFound));
        }

        tracing::info!(user_id = user.id, "password changed");

        Ok(())
    }

    /// Fetch the stored record for an authenticated user
    pub async fn profile(&self, user_id: i64) -> DomainResult<User> {
        self.user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::Auth(AuthError::UserNotFound))
    }

    /// List every registered user
    pub async fn list_users(&self) -> DomainResult<Vec<User>> {
        self.user_repository.list_all().await
    }
}
