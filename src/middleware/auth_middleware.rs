//! JWT Authentication middleware for the coffee shop routes.

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    Error, HttpMessage,
};
use futures::future::{ok, LocalBoxFuture, Ready};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use log::{debug, warn};
use std::rc::Rc;

use crate::constants::CODE_INVALID_TOKEN;
use crate::errors::ApiError;
use crate::models::Claims;

/// JWT Authentication middleware.
///
/// A request without an `Authorization` header passes through untouched so
/// that public endpoints in the same scope keep working; handlers that need a
/// permission reject it later. A header that is present must carry a valid
/// `Bearer` token signed with the configured secret, otherwise the request is
/// answered with 401. Decoded claims are added to the request extensions.
#[derive(Clone)]
pub struct AuthMiddleware {
    key: DecodingKey,
    validation: Validation,
}

impl AuthMiddleware {
    pub fn new(secret: &str) -> Self {
        Self {
            key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(AuthMiddlewareService {
            service: Rc::new(service),
            key: Rc::new(self.key.clone()),
            validation: Rc::new(self.validation.clone()),
        })
    }
}

pub struct AuthMiddlewareService<S> {
    service: Rc<S>,
    key: Rc<DecodingKey>,
    validation: Rc<Validation>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let key = Rc::clone(&self.key);
        let validation = Rc::clone(&self.validation);

        Box::pin(async move {
            let auth_header = match req.headers().get(AUTHORIZATION) {
                None => {
                    debug!("No Authorization header on {}", req.path());
                    return service.call(req).await.map(ServiceResponse::map_into_left_body);
                }
                Some(value) => value.to_str().ok(),
            };

            let token = match auth_header.and_then(|h| h.strip_prefix("Bearer ")) {
                Some(token) if !token.trim().is_empty() => token.trim().to_string(),
                _ => {
                    warn!("Malformed Authorization header on {}", req.path());
                    return Ok(reject(req));
                }
            };

            let token_data = match decode::<Claims>(&token, &key, &validation) {
                Ok(data) => data,
                Err(e) => {
                    warn!("Rejected bearer token on {}: {}", req.path(), e);
                    return Ok(reject(req));
                }
            };

            // Add claims to request extensions for use in handlers
            req.extensions_mut().insert(token_data.claims);

            service.call(req).await.map(ServiceResponse::map_into_left_body)
        })
    }
}

/// Answers with 401 as a regular response so the outer CORS headers and
/// access log still apply.
fn reject<B>(req: ServiceRequest) -> ServiceResponse<EitherBody<B>> {
    req.error_response(ApiError::unauthorized(CODE_INVALID_TOKEN))
        .map_into_right_body()
}
