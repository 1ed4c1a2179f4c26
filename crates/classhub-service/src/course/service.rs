//! Course reads, guarded creation, partial updates, and deletion.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::info;

use classhub_core::error::AppError;
use classhub_core::result::AppResult;
use classhub_database::update::parse_flag;
use classhub_database::{CourseStore, FieldValue, PartialUpdate};
use classhub_entity::{Course, NewCourse};

use crate::guard::{RequiredFields, optional_text, require_affected, require_number};

/// Body of a course creation. `lab` and `credit` accept loose input
/// (`"true"`, numeric strings) and are coerced after presence checks.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateCourseRequest {
    pub course_code: Option<String>,
    pub course_title: Option<String>,
    pub pre_requisite: Option<String>,
    pub soft_pre_requisite: Option<String>,
    pub lab: Option<Value>,
    pub credit: Option<Value>,
    pub course_description: Option<String>,
}

/// Outcome of a partial course update.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseUpdate {
    /// The record as stored after the update.
    pub course: Course,
    /// Rows changed by the update.
    pub modified: u64,
}

/// Handles the course catalog.
#[derive(Debug, Clone)]
pub struct CourseService {
    courses: Arc<dyn CourseStore>,
}

impl CourseService {
    /// Creates a new course service.
    pub fn new(courses: Arc<dyn CourseStore>) -> Self {
        Self { courses }
    }

    /// Lists every course.
    pub async fn list(&self) -> AppResult<Vec<Course>> {
        self.courses.find_all().await
    }

    /// Gets one course by code.
    pub async fn get(&self, code: &str) -> AppResult<Course> {
        self.courses
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Course not found"))
    }

    /// Creates a course.
    pub async fn create(&self, req: CreateCourseRequest) -> AppResult<Course> {
        let mut required = RequiredFields::new();
        let course_code = required.text("course_code", req.course_code);
        let course_title = required.text("course_title", req.course_title);
        let credit = required.value("credit", req.credit);
        required.check()?;

        let credit = require_number("credit", &credit)?;

        let data = NewCourse {
            course_code,
            course_title,
            pre_requisite: optional_text(req.pre_requisite),
            soft_pre_requisite: optional_text(req.soft_pre_requisite),
            lab: req.lab.as_ref().is_some_and(parse_flag),
            credit,
            course_description: optional_text(req.course_description),
        };

        let course = self.courses.create(&data).await?;
        info!(course_code = %course.course_code, "Course created");
        Ok(course)
    }

    /// Applies the supplied fields to a course; other fields are untouched.
    ///
    /// When the update renames the course, the stored record is re-read
    /// under its new code.
    pub async fn update(&self, code: &str, changes: &Map<String, Value>) -> AppResult<CourseUpdate> {
        let update = PartialUpdate::build(&Course::SCHEMA, changes)?;

        let modified = self.courses.update(code, &update).await?;
        require_affected(modified, "Course")?;

        let current_code = update
            .get("course_code")
            .and_then(FieldValue::as_text)
            .unwrap_or_else(|| code.to_string());
        let course = self.get(&current_code).await?;

        info!(
            course_code = %code,
            new_course_code = %current_code,
            fields = update.assignments().len(),
            "Course updated"
        );
        Ok(CourseUpdate { course, modified })
    }

    /// Deletes a course and everything that references it.
    pub async fn delete(&self, code: &str) -> AppResult<()> {
        let rows = self.courses.delete(code).await?;
        require_affected(rows, "Course")?;
        info!(course_code = %code, "Course deleted");
        Ok(())
    }
}
