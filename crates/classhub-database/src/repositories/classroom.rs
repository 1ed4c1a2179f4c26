//! Classroom repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use classhub_core::result::AppResult;
use classhub_entity::{Classroom, NewClassroom};

use crate::error::{Reference, map_read_error, map_write_error};
use crate::repositories::bind_value;
use crate::store::ClassroomStore;
use crate::update::{FieldValue, PartialUpdate};

/// Repository for classrooms.
#[derive(Debug, Clone)]
pub struct ClassroomRepository {
    pool: PgPool,
}

impl ClassroomRepository {
    /// Create a new classroom repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClassroomStore for ClassroomRepository {
    async fn find_all(&self) -> AppResult<Vec<Classroom>> {
        sqlx::query_as::<_, Classroom>("SELECT * FROM classroom ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_read_error(e, "list classrooms"))
    }

    async fn find_by_code(&self, code: &str) -> AppResult<Option<Classroom>> {
        sqlx::query_as::<_, Classroom>("SELECT * FROM classroom WHERE class_code = $1")
            .bind(code)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_read_error(e, "find classroom"))
    }

    async fn exists(&self, code: &str) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM classroom WHERE class_code = $1)",
        )
        .bind(code)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_read_error(e, "check classroom existence"))
    }

    async fn code_taken(&self, code: &str) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM classroom \
                           WHERE UPPER(TRIM(class_code)) = UPPER(TRIM($1)))",
        )
        .bind(code)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_read_error(e, "check class code"))
    }

    async fn create(&self, data: &NewClassroom) -> AppResult<Classroom> {
        sqlx::query_as::<_, Classroom>(
            "INSERT INTO classroom (class_code, course_code, email, faculty_initial, section, semester) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
        )
        .bind(&data.class_code)
        .bind(&data.course_code)
        .bind(&data.email)
        .bind(&data.faculty_initial)
        .bind(&data.section)
        .bind(&data.semester)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_write_error(
                e,
                "create classroom",
                &format!("Class code '{}' already exists", data.class_code),
                Some(Reference {
                    entity: "course",
                    key: &data.course_code,
                }),
            )
        })
    }

    async fn update(&self, code: &str, changes: &PartialUpdate) -> AppResult<u64> {
        let sql = changes.statement(&Classroom::SCHEMA);
        let mut query = sqlx::query(&sql);
        for value in changes.values() {
            query = bind_value(query, value);
        }
        let course_code = changes.get("course_code").and_then(FieldValue::as_text);
        query
            .bind(code)
            .execute(&self.pool)
            .await
            .map(|r| r.rows_affected())
            .map_err(|e| {
                map_write_error(
                    e,
                    "update classroom",
                    "Class code already in use",
                    course_code.as_deref().map(|key| Reference {
                        entity: "course",
                        key,
                    }),
                )
            })
    }

    async fn delete(&self, code: &str) -> AppResult<u64> {
        sqlx::query("DELETE FROM classroom WHERE class_code = $1")
            .bind(code)
            .execute(&self.pool)
            .await
            .map(|r| r.rows_affected())
            .map_err(|e| map_read_error(e, "delete classroom"))
    }
}
