use actix_web::{web, HttpResponse};
use validator::Validate;

use kg_core::repositories::UserRepository;

use crate::dto::auth::{LoginRequest, LoginResponse};
use crate::handlers::{handle_domain_error, handle_validation_errors};
use crate::routes::AppState;

/// Handler for POST /auth/login
///
/// Authenticates with email and password and issues both token classes.
///
/// # Request Body
///
/// ```json
/// {
///     "email": "a@x.com",
///     "password": "secret1"
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "accessToken": "eyJ...",
///     "refreshToken": "eyJ...",
///     "role": "user"
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Malformed email or empty password
/// - 401 Unauthorized: Unknown email or wrong password (indistinguishable)
/// - 500 Internal Server Error: Store or signing failure
pub async fn login<U>(
    state: web::Data<AppState<U>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
{
    if let Err(errors) = request.0.validate() {
        return handle_validation_errors(errors);
    }

    match state
        .auth_service
        .login(&request.email, &request.password)
        .await
    {
        Ok(auth) => HttpResponse::Ok().json(LoginResponse {
            access_token: auth.access_token,
            refresh_token: auth.refresh_token,
            role: auth.role.to_string(),
        }),
        Err(error) => handle_domain_error(error),
    }
}
