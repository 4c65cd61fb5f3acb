use actix_web::{web, HttpResponse};

use kg_core::errors::{AuthError, DomainError};
use kg_core::repositories::UserRepository;

use crate::dto::auth::{RefreshResponse, RefreshTokenRequest};
use crate::handlers::handle_domain_error;
use crate::routes::AppState;

/// Handler for POST /auth/refresh
///
/// Issues a new access token from a valid refresh token. The refresh token
/// travels in the request body, not the Authorization header, and is not
/// rotated.
///
/// # Request Body
///
/// ```json
/// {
///     "refreshToken": "eyJ..."
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "accessToken": "eyJ..."
/// }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: Absent, invalid, or expired refresh token
pub async fn refresh<U>(
    state: web::Data<AppState<U>>,
    body: Option<web::Json<RefreshTokenRequest>>,
) -> HttpResponse
where
    U: UserRepository + 'static,
{
    let token = match extract_refresh_token(body) {
        Some(token) => token,
        None => return handle_domain_error(DomainError::Auth(AuthError::MissingCredential)),
    };

    match state.auth_service.refresh_token(&token).await {
        Ok(access_token) => HttpResponse::Ok().json(RefreshResponse { access_token }),
        Err(error) => handle_domain_error(error),
    }
}

/// An unreadable body, an absent field, and an empty string are all treated
/// as a missing credential
fn extract_refresh_token(body: Option<web::Json<RefreshTokenRequest>>) -> Option<String> {
    body.and_then(|json| json.0.refresh_token)
        .filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_refresh_token() {
        assert_eq!(extract_refresh_token(None), None);

        let absent = web::Json(RefreshTokenRequest {
            refresh_token: None,
        });
        assert_eq!(extract_refresh_token(Some(absent)), None);

        let empty = web::Json(RefreshTokenRequest {
            refresh_token: Some(String::new()),
        });
        assert_eq!(extract_refresh_token(Some(empty)), None);

        let present = web::Json(RefreshTokenRequest {
            refresh_token: Some("token123".to_string()),
        });
        assert_eq!(
            extract_refresh_token(Some(present)),
            Some("token123".to_string())
        );
    }
}
