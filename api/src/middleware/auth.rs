//! JWT authentication middleware for protecting API endpoints.
//!
//! This middleware extracts a bearer token from the Authorization header,
//! verifies it against the access signing domain, and injects the
//! authenticated identity into the request extensions.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    web, Error, FromRequest, HttpMessage, HttpRequest, ResponseError,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use kg_core::domain::entities::token::Claims;
use kg_core::domain::entities::user::UserRole;
use kg_core::errors::{DomainError, TokenError};
use kg_core::services::token::TokenService;

use crate::handlers::error::ApiError;

/// Authenticated identity injected into requests
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// User ID extracted from the claims
    pub user_id: i64,
    /// Email embedded in the claims
    pub email: String,
    /// Role embedded in the claims
    pub role: UserRole,
}

impl AuthContext {
    /// Creates an authentication context from verified claims
    pub fn from_claims(claims: Claims) -> Self {
        Self {
            user_id: claims.id,
            email: claims.email,
            role: claims.role,
        }
    }
}

/// JWT authentication middleware factory
///
/// Verification runs against the `TokenService` registered in app data.
pub struct JwtAuth;

impl JwtAuth {
    /// Creates a new JWT authentication middleware
    pub fn new() -> Self {
        Self
    }
}

impl Default for JwtAuth {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            // Extract token from Authorization header
            let token = match extract_bearer_token(&req) {
                Some(token) => token,
                None => {
                    let res = req.into_response(ApiError::MissingCredential.error_response());
                    return Ok(res.map_into_right_body());
                }
            };

            let token_service = match req.app_data::<web::Data<Arc<TokenService>>>() {
                Some(token_service) => token_service,
                None => {
                    log::error!("TokenService missing from app data");
                    let res = req.into_response(
                        actix_web::error::ErrorInternalServerError(
                            "token verification not configured",
                        )
                        .error_response(),
                    );
                    return Ok(res.map_into_right_body());
                }
            };

            let auth_context = match token_service.verify_access_token(&token) {
                Ok(claims) => AuthContext::from_claims(claims),
                Err(DomainError::Token(TokenError::TokenExpired)) => {
                    let res = req.into_response(
                        ApiError::InvalidCredential("Token expired".to_string()).error_response(),
                    );
                    return Ok(res.map_into_right_body());
                }
                Err(_) => {
                    let res = req.into_response(
                        ApiError::InvalidCredential("Invalid token".to_string()).error_response(),
                    );
                    return Ok(res.map_into_right_body());
                }
            };

            // Inject auth context into request extensions
            req.extensions_mut().insert(auth_context);

            // Continue with the request
            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// Extracts a Bearer token from the Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| ApiError::MissingCredential.into());

        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_bearer_token() {
        use actix_web::test;

        let req = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer test_token_123"))
            .to_srv_request();

        assert_eq!(
            extract_bearer_token(&req),
            Some("test_token_123".to_string())
        );

        let req_no_bearer = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "test_token_123"))
            .to_srv_request();

        assert_eq!(extract_bearer_token(&req_no_bearer), None);

        let req_basic = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "Basic dXNlcjpwYXNz"))
            .to_srv_request();

        assert_eq!(extract_bearer_token(&req_basic), None);

        let req_no_header = test::TestRequest::default().to_srv_request();
        assert_eq!(extract_bearer_token(&req_no_header), None);
    }
}
