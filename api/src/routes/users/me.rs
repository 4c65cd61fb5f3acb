use actix_web::{web, HttpResponse};

use kg_core::repositories::UserRepository;

use crate::dto::user::UserView;
use crate::handlers::handle_domain_error;
use crate::middleware::AuthContext;
use crate::routes::AppState;

/// Handler for GET /api/me
///
/// Returns the stored record of the authenticated account.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "id": 1,
///     "email": "a@x.com",
///     "role": "user",
///     "created_at": "2025-08-05T10:00:00Z"
/// }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: Missing or invalid token
/// - 404 Not Found: Account no longer exists
/// - 500 Internal Server Error: Store failure
pub async fn me<U>(auth: AuthContext, state: web::Data<AppState<U>>) -> HttpResponse
where
    U: UserRepository + 'static,
{
    match state.auth_service.profile(auth.user_id).await {
        Ok(user) => HttpResponse::Ok().json(UserView::from(&user)),
        Err(error) => handle_domain_error(error),
    }
}
