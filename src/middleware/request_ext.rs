//! Request extension trait for reading decoded token claims.

use actix_web::HttpMessage;

use crate::models::Claims;

/// Access to the claims that [`AuthMiddleware`](super::AuthMiddleware) stored
/// on the request.
pub trait RequestExt {
    /// `None` when the request carried no bearer token.
    fn get_claims(&self) -> Option<Claims>;
}

impl RequestExt for actix_web::HttpRequest {
    fn get_claims(&self) -> Option<Claims> {
        self.extensions().get::<Claims>().cloned()
    }
}
