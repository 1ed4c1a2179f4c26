//! Classroom reads, code availability, guarded creation, partial updates.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::info;

use classhub_core::error::AppError;
use classhub_core::result::AppResult;
use classhub_database::{ClassroomStore, CourseStore, PartialUpdate};
use classhub_entity::{Classroom, NewClassroom};

use crate::guard::{RequiredFields, optional_text, require_affected, require_reference};

/// Body of a classroom creation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateClassroomRequest {
    pub class_code: Option<String>,
    pub course_code: Option<String>,
    pub email: Option<String>,
    pub faculty_initial: Option<String>,
    pub section: Option<String>,
    pub semester: Option<String>,
}

/// Handles classrooms.
#[derive(Debug, Clone)]
pub struct ClassroomService {
    classrooms: Arc<dyn ClassroomStore>,
    courses: Arc<dyn CourseStore>,
}

impl ClassroomService {
    /// Creates a new classroom service.
    pub fn new(classrooms: Arc<dyn ClassroomStore>, courses: Arc<dyn CourseStore>) -> Self {
        Self {
            classrooms,
            courses,
        }
    }

    /// Lists every classroom.
    pub async fn list(&self) -> AppResult<Vec<Classroom>> {
        self.classrooms.find_all().await
    }

    /// Gets one classroom by its class code.
    pub async fn get(&self, code: &str) -> AppResult<Classroom> {
        self.classrooms
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Classroom not found"))
    }

    /// Whether a class code is already in use, ignoring case and
    /// surrounding whitespace.
    pub async fn code_exists(&self, code: &str) -> AppResult<bool> {
        self.classrooms.code_taken(code).await
    }

    /// Creates a classroom under an existing course.
    pub async fn create(&self, req: CreateClassroomRequest) -> AppResult<Classroom> {
        let mut required = RequiredFields::new();
        let class_code = required.text("class_code", req.class_code);
        let course_code = required.text("course_code", req.course_code);
        required.check()?;

        require_reference("course", &course_code, self.courses.exists(&course_code)).await?;

        let data = NewClassroom {
            class_code,
            course_code,
            email: optional_text(req.email),
            faculty_initial: optional_text(req.faculty_initial),
            section: optional_text(req.section),
            semester: optional_text(req.semester),
        };

        let classroom = self.classrooms.create(&data).await?;
        info!(
            class_code = %classroom.class_code,
            course_code = %classroom.course_code,
            "Classroom created"
        );
        Ok(classroom)
    }

    /// Applies the supplied fields to a classroom. Every key is passed
    /// through as a column; keys that name no column fail at the store.
    pub async fn update(&self, code: &str, changes: &Map<String, Value>) -> AppResult<u64> {
        let update = PartialUpdate::build(&Classroom::SCHEMA, changes)?;
        let rows = self.classrooms.update(code, &update).await?;
        require_affected(rows, "Classroom")?;
        info!(
            class_code = %code,
            fields = update.assignments().len(),
            "Classroom updated"
        );
        Ok(rows)
    }

    /// Deletes a classroom and its posted resources.
    pub async fn delete(&self, code: &str) -> AppResult<()> {
        let rows = self.classrooms.delete(code).await?;
        require_affected(rows, "Classroom")?;
        info!(class_code = %code, "Classroom deleted");
        Ok(())
    }
}
