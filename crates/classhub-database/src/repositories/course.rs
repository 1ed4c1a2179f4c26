//! Course repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use classhub_core::result::AppResult;
use classhub_entity::{Course, NewCourse};

use crate::error::{map_read_error, map_write_error};
use crate::repositories::bind_value;
use crate::store::CourseStore;
use crate::update::PartialUpdate;

/// Repository for the course catalog.
#[derive(Debug, Clone)]
pub struct CourseRepository {
    pool: PgPool,
}

impl CourseRepository {
    /// Create a new course repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CourseStore for CourseRepository {
    async fn find_all(&self) -> AppResult<Vec<Course>> {
        sqlx::query_as::<_, Course>("SELECT * FROM courses ORDER BY course_code")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_read_error(e, "list courses"))
    }

    async fn find_by_code(&self, code: &str) -> AppResult<Option<Course>> {
        sqlx::query_as::<_, Course>("SELECT * FROM courses WHERE course_code = $1")
            .bind(code)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_read_error(e, "find course"))
    }

    async fn exists(&self, code: &str) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM courses WHERE course_code = $1)",
        )
        .bind(code)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_read_error(e, "check course existence"))
    }

    async fn create(&self, data: &NewCourse) -> AppResult<Course> {
        sqlx::query_as::<_, Course>(
            "INSERT INTO courses (course_code, course_title, pre_requisite, soft_pre_requisite, \
                                  lab, credit, course_description) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
        )
        .bind(&data.course_code)
        .bind(&data.course_title)
        .bind(&data.pre_requisite)
        .bind(&data.soft_pre_requisite)
        .bind(data.lab)
        .bind(data.credit)
        .bind(&data.course_description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_write_error(
                e,
                "create course",
                &format!("Course '{}' already exists", data.course_code),
                None,
            )
        })
    }

    async fn update(&self, code: &str, changes: &PartialUpdate) -> AppResult<u64> {
        let sql = changes.statement(&Course::SCHEMA);
        let mut query = sqlx::query(&sql);
        for value in changes.values() {
            query = bind_value(query, value);
        }
        query
            .bind(code)
            .execute(&self.pool)
            .await
            .map(|r| r.rows_affected())
            .map_err(|e| {
                map_write_error(
                    e,
                    "update course",
                    "Course code already in use",
                    None,
                )
            })
    }

    async fn delete(&self, code: &str) -> AppResult<u64> {
        sqlx::query("DELETE FROM courses WHERE course_code = $1")
            .bind(code)
            .execute(&self.pool)
            .await
            .map(|r| r.rows_affected())
            .map_err(|e| map_read_error(e, "delete course"))
    }
}
