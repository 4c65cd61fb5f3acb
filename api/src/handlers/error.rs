//! Mapping from domain errors to HTTP responses.
//!
//! Validation and authentication failures become structured JSON bodies;
//! store and signing failures are logged and surfaced as a generic internal
//! error without leaking internals.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use std::collections::HashMap;
use std::fmt;

use kg_core::errors::{AuthError, DomainError, TokenError};

use crate::dto::ErrorResponse;

/// Converts a domain error into its JSON error response
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    let (status, code) = match &error {
        DomainError::Validation(_) => (StatusCode::BAD_REQUEST, "validation_error"),
        DomainError::Auth(AuthError::EmailAlreadyRegistered) => {
            (StatusCode::CONFLICT, "conflict")
        }
        DomainError::Auth(AuthError::InvalidCredentials) => {
            (StatusCode::UNAUTHORIZED, "invalid_credential")
        }
        DomainError::Auth(AuthError::MissingCredential) => {
            (StatusCode::UNAUTHORIZED, "missing_credential")
        }
        DomainError::Auth(AuthError::InsufficientPermissions) => {
            (StatusCode::FORBIDDEN, "forbidden")
        }
        DomainError::Auth(AuthError::UserNotFound) | DomainError::NotFound { .. } => {
            (StatusCode::NOT_FOUND, "not_found")
        }
        DomainError::Token(TokenError::TokenExpired) => {
            (StatusCode::UNAUTHORIZED, "expired_token")
        }
        DomainError::Token(TokenError::InvalidToken) => {
            (StatusCode::UNAUTHORIZED, "invalid_credential")
        }
        DomainError::Token(TokenError::TokenGenerationFailed)
        | DomainError::Database { .. }
        | DomainError::Internal { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
    };

    if status == StatusCode::INTERNAL_SERVER_ERROR {
        log::error!("API error: {:?}", error);
        return ErrorResponse::new(
            "internal_error".to_string(),
            "An internal error occurred".to_string(),
        )
        .to_response(status);
    }

    ErrorResponse::new(code.to_string(), error.to_string()).to_response(status)
}

/// Converts validator failures into a 400 response with field-level details
pub fn handle_validation_errors(errors: validator::ValidationErrors) -> HttpResponse {
    let mut details = HashMap::new();
    for (field, field_errors) in errors.field_errors() {
        let messages: Vec<String> = field_errors
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect();
        details.insert(field.to_string(), serde_json::json!(messages));
    }

    ErrorResponse::new(
        "validation_error".to_string(),
        "Request validation failed".to_string(),
    )
    .with_details(details)
    .to_response(StatusCode::BAD_REQUEST)
}

/// Authentication failures raised from middleware
///
/// Implements `ResponseError` so the auth and role middlewares fail requests
/// with the same JSON body shape the handlers produce.
#[derive(Debug)]
pub enum ApiError {
    MissingCredential,
    InvalidCredential(String),
    Forbidden,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::MissingCredential => {
                write!(f, "Missing or malformed authorization credential")
            }
            ApiError::InvalidCredential(message) => write!(f, "{}", message),
            ApiError::Forbidden => write!(f, "Insufficient permissions"),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingCredential | ApiError::InvalidCredential(_) => {
                StatusCode::UNAUTHORIZED
            }
            ApiError::Forbidden => StatusCode::FORBIDDEN,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let code = match self {
            ApiError::MissingCredential => "missing_credential",
            ApiError::InvalidCredential(_) => "invalid_credential",
            ApiError::Forbidden => "forbidden",
        };
        ErrorResponse::new(code.to_string(), self.to_string()).to_response(self.status_code())
    }
}
