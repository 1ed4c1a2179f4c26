//! Course resource repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use classhub_core::result::AppResult;
use classhub_entity::{NewResource, Resource};

use crate::error::{Reference, map_read_error, map_write_error};
use crate::store::ResourceStore;

/// Repository for links attached to courses.
#[derive(Debug, Clone)]
pub struct ResourceRepository {
    pool: PgPool,
}

impl ResourceRepository {
    /// Create a new resource repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResourceStore for ResourceRepository {
    async fn find_all(&self) -> AppResult<Vec<Resource>> {
        sqlx::query_as::<_, Resource>("SELECT * FROM resources ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_read_error(e, "list resources"))
    }

    async fn find_by_course(&self, course_code: &str) -> AppResult<Vec<Resource>> {
        sqlx::query_as::<_, Resource>(
            "SELECT * FROM resources WHERE course_code = $1 ORDER BY id",
        )
        .bind(course_code)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_read_error(e, "list resources by course"))
    }

    async fn create(&self, data: &NewResource) -> AppResult<Resource> {
        sqlx::query_as::<_, Resource>(
            "INSERT INTO resources (course_code, description, publishers_name, type, link, vote) \
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, 0)) RETURNING *",
        )
        .bind(&data.course_code)
        .bind(&data.description)
        .bind(&data.publishers_name)
        .bind(&data.kind)
        .bind(&data.link)
        .bind(data.vote)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_write_error(
                e,
                "create resource",
                "A resource with this link already exists",
                Some(Reference {
                    entity: "course",
                    key: &data.course_code,
                }),
            )
        })
    }

    async fn delete(&self, id: i64) -> AppResult<u64> {
        sqlx::query("DELETE FROM resources WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map(|r| r.rows_affected())
            .map_err(|e| map_read_error(e, "delete resource"))
    }
}
