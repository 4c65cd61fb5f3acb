use actix_web::{web, HttpResponse};

use kg_core::repositories::UserRepository;

use crate::dto::user::{UserListResponse, UserView};
use crate::handlers::handle_domain_error;
use crate::middleware::AuthContext;
use crate::routes::AppState;

/// Handler for GET /api/admin/usuarios
///
/// Lists every registered account. Restricted to the `admin` role by the
/// role guard mounted on the `/api/admin` scope.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "admin_role": "admin",
///     "users": [
///         {"id": 1, "email": "a@x.com", "role": "user", "created_at": "..."}
///     ]
/// }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: Missing or invalid token
/// - 403 Forbidden: Authenticated role is not `admin`
/// - 500 Internal Server Error: Store failure
pub async fn list_users<U>(auth: AuthContext, state: web::Data<AppState<U>>) -> HttpResponse
where
    U: UserRepository + 'static,
{
    match state.auth_service.list_users().await {
        Ok(users) => HttpResponse::Ok().json(UserListResponse {
            admin_role: auth.role.to_string(),
            users: users.iter().map(UserView::from).collect(),
        }),
        Err(error) => handle_domain_error(error),
    }
}
