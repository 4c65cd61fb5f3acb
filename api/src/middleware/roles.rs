//! Role-based authorization middleware.
//!
//! Checks the authenticated identity against an allow-list of roles. The
//! guard must be mounted inside `JwtAuth`; a request that reaches it without
//! an `AuthContext` is rejected as unauthenticated.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, HttpMessage, ResponseError,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    task::{Context, Poll},
};

use kg_core::domain::entities::user::UserRole;

use crate::handlers::error::ApiError;

use super::auth::AuthContext;

/// Role allow-list middleware factory
pub struct RoleGuard {
    allowed: Rc<Vec<UserRole>>,
}

impl RoleGuard {
    /// Creates a guard that admits only the given roles
    pub fn allow(roles: &[UserRole]) -> Self {
        Self {
            allowed: Rc::new(roles.to_vec()),
        }
    }

    /// Shorthand for an admin-only guard
    pub fn admin_only() -> Self {
        Self::allow(&[UserRole::Admin])
    }
}

impl<S, B> Transform<S, ServiceRequest> for RoleGuard
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RoleGuardMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RoleGuardMiddleware {
            service: Rc::new(service),
            allowed: Rc::clone(&self.allowed),
        }))
    }
}

/// Role allow-list middleware service
pub struct RoleGuardMiddleware<S> {
    service: Rc<S>,
    allowed: Rc<Vec<UserRole>>,
}

impl<S, B> Service<ServiceRequest> for RoleGuardMiddleware<S>
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
        let allowed = Rc::clone(&self.allowed);

        Box::pin(async move {
            let role = req.extensions().get::<AuthContext>().map(|ctx| ctx.role);

            match role {
                None => {
                    let res = req.into_response(ApiError::MissingCredential.error_response());
                    Ok(res.map_into_right_body())
                }
                Some(role) if !allowed.contains(&role) => {
                    let res = req.into_response(ApiError::Forbidden.error_response());
                    Ok(res.map_into_right_body())
                }
                Some(_) => {
                    let res = service.call(req).await?;
                    Ok(res.map_into_left_body())
                }
            }
        })
    }
}
