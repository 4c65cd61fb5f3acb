//! Route handlers, one file per endpoint.

use std::sync::Arc;

use kg_core::repositories::UserRepository;
use kg_core::services::auth::AuthService;

pub mod auth;
pub mod users;

/// Application state shared by every handler
///
/// Generic over the user repository so the same router runs against MySQL in
/// production and against the in-memory mock in tests.
pub struct AppState<U: UserRepository> {
    pub auth_service: Arc<AuthService<U>>,
}
