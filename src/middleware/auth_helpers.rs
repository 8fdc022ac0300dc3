//! Authentication and authorization helper functions.
//!
//! These helpers reduce boilerplate in handlers that sit behind
//! [`AuthMiddleware`](super::AuthMiddleware).

use actix_web::HttpRequest;
use log::warn;

use crate::constants::{CODE_AUTH_REQUIRED, CODE_PERMISSION_MISSING};
use crate::errors::ApiError;
use crate::models::Claims;

use super::RequestExt;

/// Extract claims from request or return Unauthorized error.
///
/// # Example
/// ```ignore
/// let claims = require_auth(&req)?;
/// ```
pub fn require_auth(req: &HttpRequest) -> Result<Claims, ApiError> {
    req.get_claims().ok_or_else(|| {
        warn!("Missing bearer token on {}", req.path());
        ApiError::unauthorized(CODE_AUTH_REQUIRED)
    })
}

/// Require an authenticated caller whose token grants `permission`.
///
/// Returns Unauthorized when there is no token and Forbidden when the token
/// lacks the permission.
///
/// # Example
/// ```ignore
/// require_permission(&req, PERM_POST_DRINKS)?;
/// ```
pub fn require_permission(req: &HttpRequest, permission: &str) -> Result<Claims, ApiError> {
    let claims = require_auth(req)?;
    if !claims.has_permission(permission) {
        warn!(
            "Subject {} lacks permission {} for {}",
            claims.sub,
            permission,
            req.path()
        );
        return Err(ApiError::forbidden(CODE_PERMISSION_MISSING));
    }
    Ok(claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test::TestRequest;
    use actix_web::{HttpMessage, ResponseError};

    fn claims(permissions: &[&str]) -> Claims {
        Claims {
            sub: "auth0|barista".to_string(),
            permissions: permissions.iter().map(|p| p.to_string()).collect(),
            exp: 0,
            iat: 0,
        }
    }

    #[test]
    fn test_require_auth_without_claims() {
        let req = TestRequest::default().to_http_request();
        let err = require_auth(&req).unwrap_err();
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_require_permission() {
        let req = TestRequest::default().to_http_request();
        req.extensions_mut().insert(claims(&["get:drinks-detail"]));

        assert!(require_permission(&req, "get:drinks-detail").is_ok());
        let err = require_permission(&req, "delete:drinks").unwrap_err();
        assert_eq!(err.status_code(), StatusCode::FORBIDDEN);
    }
}
