use std::sync::Arc;

use actix_web::{web, HttpServer};
use dotenv::dotenv;
use log::{info, warn};

use kg_api::app::create_app;
use kg_api::routes::AppState;
use kg_core::services::auth::{AuthService, AuthServiceConfig};
use kg_core::services::token::{TokenService, TokenServiceConfig};
use kg_infra::{DatabasePool, MySqlUserRepository};
use kg_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting KeyGate API server");

    // Load configuration once; everything downstream receives its piece
    // explicitly
    let config = AppConfig::from_env();
    info!("Environment: {}", config.environment);

    if config.jwt.is_using_default_secret() {
        if config.environment.is_production() {
            panic!("JWT_SECRET must be set in production");
        }
        warn!("Using the default JWT secret; set JWT_SECRET before deploying");
    }

    // Database pool and repository
    let pool = DatabasePool::new(&config.database)
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;

    match pool.health_check().await {
        Ok(true) => info!("Database connection verified"),
        Ok(false) | Err(_) => warn!("Database health check failed; continuing startup"),
    }

    let user_repository = Arc::new(MySqlUserRepository::new(pool.get_pool().clone()));

    // Services
    let token_service = Arc::new(TokenService::new(TokenServiceConfig::new(
        config.jwt.secret.clone(),
        config.jwt.access_token_expiry,
    )));
    let auth_service = Arc::new(AuthService::new(
        user_repository,
        Arc::clone(&token_service),
        AuthServiceConfig::default(),
    ));

    let app_state = web::Data::new(AppState { auth_service });
    let token_data = web::Data::new(token_service);

    let bind_address = config.server.bind_address();
    info!("Server listening on {}", bind_address);

    let workers = config.server.workers;
    let server = HttpServer::new(move || create_app(app_state.clone(), token_data.clone()));
    let server = if workers > 0 {
        server.workers(workers)
    } else {
        server
    };

    server.bind(&bind_address)?.run().await
}
