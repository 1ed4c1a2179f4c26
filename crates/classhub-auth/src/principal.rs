//! The identity attached to a request once its token has been verified.

use serde_json::{Map, Value};

use crate::jwt::Claims;

/// A verified caller. Lives only as long as the request it was attached to.
#[derive(Debug, Clone, PartialEq)]
pub struct Principal {
    /// Subject email from the token.
    pub email: String,
    /// Remaining claims, as signed.
    pub claims: Map<String, Value>,
}

impl Principal {
    /// Whether `subject` names this principal.
    pub fn is(&self, subject: &str) -> bool {
        self.email == subject
    }
}

impl From<Claims> for Principal {
    fn from(claims: Claims) -> Self {
        Self {
            email: claims.email,
            claims: claims.extra,
        }
    }
}
