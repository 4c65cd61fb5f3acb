//! User repository trait defining the interface for user data persistence.
//!
//! This module defines the repository pattern interface for User entities.
//! The trait is async-first and uses Result types for proper error handling;
//! implementations handle the actual database operations while keeping the
//! abstraction boundary between domain and infrastructure layers.

use async_trait::async_trait;

use crate::domain::entities::user::{NewUser, User};
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their login email
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with the given email
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by their unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with the given id
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError>;

    /// Check if a user exists with the given email
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;

    /// Insert a new user
    ///
    /// # Returns
    /// * `Ok(User)` - The stored entity with its database-generated id and
    ///   creation timestamp
    /// * `Err(DomainError)` - Creation failed (e.g. duplicate email)
    async fn create(&self, user: NewUser) -> Result<User, DomainError>;

    /// Replace the password hash for a user
    ///
    /// # Returns
    /// * `Ok(true)` - Hash updated
    /// * `Ok(false)` - No user with the given id
    /// * `Err(DomainError)` - Update failed
    async fn update_password(&self, id: i64, password_hash: &str) -> Result<bool, DomainError>;

    /// List every user, oldest first
    async fn list_all(&self) -> Result<Vec<User>, DomainError>;
}
