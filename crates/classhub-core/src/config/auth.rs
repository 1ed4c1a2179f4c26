//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Token signing configuration.
///
/// `jwt_secret` has no default: a deployment that does not provide one
/// fails at startup rather than signing with a guessable key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for token signing (HMAC-SHA256).
    pub jwt_secret: String,
    /// Token lifetime in minutes.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_minutes: u64,
}

fn default_token_ttl() -> u64 {
    60
}
