//! Class resource repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use classhub_core::result::AppResult;
use classhub_entity::{ClassResource, NewClassResource};

use crate::error::{Reference, map_read_error, map_write_error};
use crate::store::ClassResourceStore;

/// Repository for links posted to classrooms.
#[derive(Debug, Clone)]
pub struct ClassResourceRepository {
    pool: PgPool,
}

impl ClassResourceRepository {
    /// Create a new class resource repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClassResourceStore for ClassResourceRepository {
    async fn find_all(&self) -> AppResult<Vec<ClassResource>> {
        sqlx::query_as::<_, ClassResource>("SELECT * FROM class_resources ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_read_error(e, "list class resources"))
    }

    async fn find_by_class(&self, class_code: &str) -> AppResult<Vec<ClassResource>> {
        sqlx::query_as::<_, ClassResource>(
            "SELECT * FROM class_resources WHERE class_code = $1 ORDER BY id",
        )
        .bind(class_code)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_read_error(e, "list class resources by class"))
    }

    async fn create(&self, data: &NewClassResource) -> AppResult<ClassResource> {
        sqlx::query_as::<_, ClassResource>(
            "INSERT INTO class_resources (class_code, course_code, description, type, link) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(&data.class_code)
        .bind(&data.course_code)
        .bind(&data.description)
        .bind(&data.kind)
        .bind(&data.link)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_write_error(
                e,
                "create class resource",
                "Class resource already exists",
                Some(Reference {
                    entity: "classroom",
                    key: &data.class_code,
                }),
            )
        })
    }

    async fn delete(&self, id: i64) -> AppResult<u64> {
        sqlx::query("DELETE FROM class_resources WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map(|r| r.rows_affected())
            .map_err(|e| map_read_error(e, "delete class resource"))
    }
}
