//! HTTP middleware for authentication, authorization, and CORS.

pub mod auth;
pub mod cors;
pub mod roles;

pub use auth::{AuthContext, JwtAuth};
pub use roles::RoleGuard;
