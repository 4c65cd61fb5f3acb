//! User entity representing a registered account in the KeyGate system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role attached to a user account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Regular account with access to its own profile
    User,
    /// Administrative account with access to the user listing
    Admin,
}

impl UserRole {
    /// Maps a client-supplied role string onto a role.
    ///
    /// Only the literal `"admin"` yields `Admin`; anything else, including an
    /// absent field, falls back to `User`.
    pub fn from_request(role: Option<&str>) -> Self {
        match role {
            Some("admin") => UserRole::Admin,
            _ => UserRole::User,
        }
    }

    /// String form as stored in the database
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "user",
            UserRole::Admin => "admin",
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(UserRole::User),
            "admin" => Ok(UserRole::Admin),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User entity representing a registered account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Database-generated identifier
    pub id: i64,

    /// Unique login email
    pub email: String,

    /// Salted bcrypt hash of the password
    pub password_hash: String,

    /// Role tag used by the admin gate
    pub role: UserRole,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,
}

/// Insert shape for a user; id and created_at are database-generated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    /// Unique login email
    pub email: String,

    /// Salted bcrypt hash of the password
    pub password_hash: String,

    /// Role tag for the new account
    pub role: UserRole,
}

impl NewUser {
    /// Creates a new insert shape
    pub fn new(
        email: impl Into<String>,
        password_hash: impl Into<String>,
        role: UserRole,
    ) -> Self {
        Self {
            email: email.into(),
            password_hash: password_hash.into(),
            role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_from_request() {
        assert_eq!(UserRole::from_request(Some("admin")), UserRole::Admin);
        assert_eq!(UserRole::from_request(Some("user")), UserRole::User);
        assert_eq!(UserRole::from_request(Some("superuser")), UserRole::User);
        assert_eq!(UserRole::from_request(None), UserRole::User);
    }

    #[test]
    fn test_role_round_trip() {
        assert_eq!("admin".parse::<UserRole>(), Ok(UserRole::Admin));
        assert_eq!("user".parse::<UserRole>(), Ok(UserRole::User));
        assert!("root".parse::<UserRole>().is_err());

        assert_eq!(UserRole::Admin.as_str(), "admin");
        assert_eq!(UserRole::User.to_string(), "user");
    }

    #[test]
    fn test_role_serialization() {
        let json = serde_json::to_string(&UserRole::Admin).unwrap();
        assert_eq!(json, "\"admin\"");

        let json = serde_json::to_string(&UserRole::User).unwrap();
        assert_eq!(json, "\"user\"");
    }

    #[test]
    fn test_new_user_creation() {
        let user = NewUser::new("a@x.com", "hashed_password", UserRole::User);

        assert_eq!(user.email, "a@x.com");
        assert_eq!(user.password_hash, "hashed_password");
        assert_eq!(user.role, UserRole::User);
    }
}
