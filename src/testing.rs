//! Helpers shared by the HTTP tests.

use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};

use crate::models::Claims;

pub const TEST_SECRET: &str = "test-secret";

/// Build an in-process app with the routes, error handlers and CORS headers
/// of the real server, backed by the given [`Services`](crate::services::Services).
macro_rules! test_app {
    ($services:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap($crate::routes::cors_headers())
                .configure(|cfg| {
                    $crate::routes::configure_routes(
                        cfg,
                        &$services,
                        &$crate::middleware::AuthMiddleware::new($crate::testing::TEST_SECRET),
                    )
                }),
        )
        .await
    };
}

pub(crate) use test_app;

/// `Authorization` header value for a token granting `permissions`.
pub fn bearer(permissions: &[&str]) -> String {
    bearer_signed_with(permissions, TEST_SECRET)
}

pub fn bearer_signed_with(permissions: &[&str], secret: &str) -> String {
    let now = Utc::now().timestamp() as usize;
    let claims = Claims {
        sub: "auth0|tester".to_string(),
        permissions: permissions.iter().map(|p| p.to_string()).collect(),
        exp: now + 3600,
        iat: now,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap();
    format!("Bearer {}", token)
}
