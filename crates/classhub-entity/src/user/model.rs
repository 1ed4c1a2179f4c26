//! User entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::role::UserRole;

/// A registered user and the role record the authorization gate reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Surrogate key.
    pub id: i64,
    /// Display name.
    pub name: Option<String>,
    /// Unique subject identifier; matches the `email` claim of tokens.
    pub email: String,
    /// Assigned role.
    pub role: UserRole,
}

impl User {
    /// Check whether this user holds the given role.
    pub fn has_role(&self, role: UserRole) -> bool {
        self.role == role
    }
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    /// Display name.
    pub name: Option<String>,
    /// Unique email address.
    pub email: String,
    /// Assigned role.
    pub role: UserRole,
}
