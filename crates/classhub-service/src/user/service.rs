//! User records: create-if-absent, listing, deletion, role changes.

use std::str::FromStr;
use std::sync::Arc;

use serde::Deserialize;
use tracing::info;

use classhub_core::error::ErrorKind;
use classhub_core::result::AppResult;
use classhub_database::UserStore;
use classhub_entity::{NewUser, User, UserRole};

use crate::guard::{RequiredFields, optional_text, require_affected, require_email};

/// Body of a user registration. Any `role` in the body is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Body of a role change.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateRoleRequest {
    pub role: Option<String>,
}

/// Result of a create-if-absent registration.
#[derive(Debug, Clone, PartialEq)]
pub enum UserCreation {
    /// A new record was stored.
    Created(User),
    /// A user with that email already exists; nothing was written.
    AlreadyExists,
}

/// Handles user records.
#[derive(Debug, Clone)]
pub struct UserService {
    users: Arc<dyn UserStore>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// Lists every user.
    pub async fn list(&self) -> AppResult<Vec<User>> {
        self.users.find_all().await
    }

    /// Registers a user unless the email is already known. New users always
    /// start with the `user` role.
    pub async fn create_if_absent(&self, req: CreateUserRequest) -> AppResult<UserCreation> {
        let mut required = RequiredFields::new();
        let email = required.text("email", req.email);
        required.check()?;
        require_email("email", &email)?;

        if self.users.find_by_email(&email).await?.is_some() {
            return Ok(UserCreation::AlreadyExists);
        }

        let data = NewUser {
            name: optional_text(req.name),
            email,
            role: UserRole::User,
        };

        match self.users.create(&data).await {
            Ok(user) => {
                info!(user_id = user.id, email = %user.email, "User created");
                Ok(UserCreation::Created(user))
            }
            // Lost a race with a concurrent registration.
            Err(e) if e.kind == ErrorKind::Conflict => Ok(UserCreation::AlreadyExists),
            Err(e) => Err(e),
        }
    }

    /// Deletes a user by id.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let rows = self.users.delete(id).await?;
        require_affected(rows, "User")?;
        info!(user_id = id, "User deleted");
        Ok(())
    }

    /// Sets a user's role. The role must be one of the known roles.
    pub async fn update_role(&self, id: i64, req: UpdateRoleRequest) -> AppResult<UserRole> {
        let mut required = RequiredFields::new();
        let role = required.text("role", req.role);
        required.check()?;
        let role = UserRole::from_str(&role)?;

        let rows = self.users.update_role(id, role).await?;
        require_affected(rows, "User")?;
        info!(user_id = id, role = %role, "User role updated");
        Ok(role)
    }
}
