//! Infrastructure layer for the KeyGate backend
//!
//! Concrete implementations of the core repository interfaces backed by
//! MySQL, plus connection-pool management.

pub mod database;

use thiserror::Error;

/// Errors raised by infrastructure components
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

// Re-export commonly used types
pub use database::connection::DatabasePool;
pub use database::mysql::MySqlUserRepository;
