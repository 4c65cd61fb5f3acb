//! Business entities for the authentication domain.

pub mod token;
pub mod user;

pub use token::{Claims, TokenPair, REFRESH_TOKEN_EXPIRY_DAYS};
pub use user::{NewUser, User, UserRole};
