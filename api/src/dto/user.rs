use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use kg_core::domain::entities::user::User;

/// Public view of a user record (no password hash)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserView {
    pub id: i64,
    pub email: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            role: user.role.to_string(),
            created_at: user.created_at,
        }
    }
}

/// Admin listing of every registered user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserListResponse {
    pub admin_role: String,
    pub users: Vec<UserView>,
}
