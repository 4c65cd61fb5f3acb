//! Application factory
//!
//! Builds the Actix-web application: routing, middleware, the default 404
//! handler, and the health endpoint.

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web, App, Error, HttpResponse,
};

use kg_core::repositories::UserRepository;
use kg_core::services::token::TokenService;

use crate::middleware::{cors::create_cors, JwtAuth, RoleGuard};
use crate::routes::auth::{
    login::login, password::change_password, refresh::refresh, register::register,
};
use crate::routes::users::{list::list_users, me::me};
use crate::routes::AppState;

/// Create and configure the application with all dependencies
///
/// The token service is registered separately from the application state so
/// the authentication middleware can verify tokens without knowing the
/// repository type.
pub fn create_app<U>(
    app_state: web::Data<AppState<U>>,
    token_service: web::Data<Arc<TokenService>>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
{
    let cors = create_cors();

    App::new()
        .app_data(app_state)
        .app_data(token_service)
        .wrap(Logger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // Authentication routes
        .service(
            web::scope("/auth")
                .route("/register", web::post().to(register::<U>))
                .route("/login", web::post().to(login::<U>))
                .route("/refresh", web::post().to(refresh::<U>))
                .service(
                    web::resource("/password")
                        .wrap(JwtAuth::new())
                        .route(web::post().to(change_password::<U>)),
                ),
        )
        // Protected API routes
        .service(
            web::scope("/api")
                .wrap(JwtAuth::new())
                .route("/me", web::get().to(me::<U>))
                .service(
                    web::scope("/admin")
                        .wrap(RoleGuard::admin_only())
                        .route("/usuarios", web::get().to(list_users::<U>)),
                ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "keygate-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
