use actix_web::{web, HttpResponse};
use validator::Validate;

use kg_core::repositories::UserRepository;

use crate::dto::auth::{ChangePasswordRequest, MessageResponse};
use crate::handlers::{handle_domain_error, handle_validation_errors};
use crate::middleware::AuthContext;
use crate::routes::AppState;

/// Handler for POST /auth/password
///
/// Changes the password of the authenticated account. Requires a valid
/// access token; the target account is taken from the token claims.
///
/// # Request Body
///
/// ```json
/// {
///     "currentPassword": "secret1",
///     "newPassword": "secret2"
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "message": "Password updated successfully"
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: New password too short
/// - 401 Unauthorized: Missing/invalid token or wrong current password
/// - 404 Not Found: Account no longer exists
/// - 500 Internal Server Error: Store or hashing failure
pub async fn change_password<U>(
    auth: AuthContext,
    state: web::Data<AppState<U>>,
    request: web::Json<ChangePasswordRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
{
    if let Err(errors) = request.0.validate() {
        return handle_validation_errors(errors);
    }

    match state
        .auth_service
        .change_password(auth.user_id, &request.current_password, &request.new_password)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(MessageResponse {
            message: "Password updated successfully".to_string(),
        }),
        Err(error) => handle_domain_error(error),
    }
}
