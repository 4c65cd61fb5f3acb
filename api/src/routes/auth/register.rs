use actix_web::{web, HttpResponse};
use validator::Validate;

use kg_core::repositories::UserRepository;

use crate::dto::auth::{RegisterRequest, RegisterResponse};
use crate::handlers::{handle_domain_error, handle_validation_errors};
use crate::routes::AppState;

/// Handler for POST /auth/register
///
/// Creates a new account and returns a freshly signed access token.
///
/// # Request Body
///
/// ```json
/// {
///     "email": "a@x.com",
///     "password": "secret1",
///     "role": "admin"
/// }
/// ```
///
/// The `role` field is optional; only the literal `"admin"` is honored.
///
/// # Response
///
/// ## Success (201 Created)
/// ```json
/// {
///     "message": "User registered successfully",
///     "token": "eyJ..."
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Invalid email format or password too short
/// - 409 Conflict: Email already registered
/// - 500 Internal Server Error: Store or signing failure
pub async fn register<U>(
    state: web::Data<AppState<U>>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
{
    if let Err(errors) = request.0.validate() {
        return handle_validation_errors(errors);
    }

    match state
        .auth_service
        .register(&request.email, &request.password, request.role.as_deref())
        .await
    {
        Ok((user, token)) => {
            log::info!("Registered user {} ({})", user.id, user.email);
            HttpResponse::Created().json(RegisterResponse {
                message: "User registered successfully".to_string(),
                token,
            })
        }
        Err(error) => handle_domain_error(error),
    }
}
