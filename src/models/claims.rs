//! JWT Claims model.

use serde::{Deserialize, Serialize};

/// Claims read from a coffee shop bearer token.
///
/// Tokens are issued by an external identity provider; only the subject and
/// the granted permissions matter here.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,
    #[serde(default)]
    pub permissions: Vec<String>,
    pub exp: usize,
    #[serde(default)]
    pub iat: usize,
}

impl Claims {
    /// Check if the token grants the given permission (e.g. `post:drinks`).
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| p == permission)
    }
}
