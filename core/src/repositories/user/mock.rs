//! Mock implementation of UserRepository for testing

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::user::{NewUser, User};
use crate::errors::{AuthError, DomainError};

use super::trait_::UserRepository;

/// Mock user repository for testing
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<i64, User>>>,
    next_id: AtomicI64,
}

impl MockUserRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().any(|u| u.email == email))
    }

    async fn create(&self, user: NewUser) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        // Check for duplicate email
        if users.values().any(|u| u.email == user.email) {
            return Err(DomainError::Auth(AuthError::EmailAlreadyRegistered));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let stored = User {
            id,
            email: user.email,
            password_hash: user.password_hash,
            role: user.role,
            created_at: Utc::now(),
        };
        users.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update_password(&self, id: i64, password_hash: &str) -> Result<bool, DomainError> {
        let mut users = self.users.write().await;
        match users.get_mut(&id) {
            Some(user) => {
                user.password_hash = password_hash.to_string();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn list_all(&self) -> Result<Vec<User>, DomainError> {
        let users = self.users.read().await;
        let mut all: Vec<User> = users.values().cloned().collect();
        all.sort_by_key(|u| u.id);
        Ok(all)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::user::UserRole;

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = MockUserRepository::new();
        let created = repo
            .create(NewUser::new("a@x.com", "hash", UserRole::User))
            .await
            .unwrap();

        assert_eq!(created.id, 1);
        assert!(repo.exists_by_email("a@x.com").await.unwrap());
        assert_eq!(
            repo.find_by_email("a@x.com").await.unwrap().unwrap().id,
            created.id
        );
        assert_eq!(
            repo.find_by_id(created.id).await.unwrap().unwrap().email,
            "a@x.com"
        );
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let repo = MockUserRepository::new();
        repo.create(NewUser::new("a@x.com", "hash", UserRole::User))
            .await
            .unwrap();

        let result = repo
            .create(NewUser::new("a@x.com", "other", UserRole::User))
            .await;
        assert!(matches!(
            result,
            Err(DomainError::Auth(AuthError::EmailAlreadyRegistered))
        ));
        assert_eq!(repo.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_password() {
        let repo = MockUserRepository::new();
        let created = repo
            .create(NewUser::new("a@x.com", "old", UserRole::User))
            .await
            .unwrap();

        assert!(repo.update_password(created.id, "new").await.unwrap());
        assert_eq!(
            repo.find_by_id(created.id)
                .await
                .unwrap()
                .unwrap()
                .password_hash,
            "new"
        );
        assert!(!repo.update_password(999, "new").await.unwrap());
    }

    #[tokio::test]
    async fn test_list_all_ordered() {
        let repo = MockUserRepository::new();
        repo.create(NewUser::new("a@x.com", "h", UserRole::User))
            .await
            .unwrap();
        repo.create(NewUser::new("b@x.com", "h", UserRole::Admin))
            .await
            .unwrap();

        let all = repo.list_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].email, "a@x.com");
        assert_eq!(all[1].email, "b@x.com");
    }
}
