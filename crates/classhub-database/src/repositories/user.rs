//! User repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use classhub_core::result::AppResult;
use classhub_entity::{NewUser, User, UserRole};

use crate::error::{map_read_error, map_write_error};
use crate::store::{RoleStore, UserStore};

/// Repository for user records and role lookups.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoleStore for UserRepository {
    async fn find_role(&self, email: &str) -> AppResult<Option<UserRole>> {
        sqlx::query_scalar::<_, UserRole>("SELECT role FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_read_error(e, "look up user role"))
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_all(&self) -> AppResult<Vec<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_read_error(e, "list users"))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_read_error(e, "find user by email"))
    }

    async fn create(&self, data: &NewUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (name, email, role) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.email)
        .bind(data.role)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "create user", "Email already in use", None))
    }

    async fn update_role(&self, id: i64, role: UserRole) -> AppResult<u64> {
        sqlx::query("UPDATE users SET role = $2 WHERE id = $1")
            .bind(id)
            .bind(role)
            .execute(&self.pool)
            .await
            .map(|r| r.rows_affected())
            .map_err(|e| map_read_error(e, "update user role"))
    }

    async fn delete(&self, id: i64) -> AppResult<u64> {
        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map(|r| r.rows_affected())
            .map_err(|e| map_read_error(e, "delete user"))
    }
}

