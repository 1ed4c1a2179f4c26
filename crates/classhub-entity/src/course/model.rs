//! Course entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::schema::{EntitySchema, FieldKind, FieldSpec, UpdatePolicy};

/// A course in the catalog, keyed by its course code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Course {
    /// Natural key (e.g. `CSE110`).
    pub course_code: String,
    /// Course title.
    pub course_title: String,
    /// Hard prerequisite course code(s).
    pub pre_requisite: Option<String>,
    /// Recommended prerequisite course code(s).
    pub soft_pre_requisite: Option<String>,
    /// Whether the course has a lab component.
    pub lab: bool,
    /// Credit hours.
    pub credit: f64,
    /// Free-form description.
    pub course_description: Option<String>,
}

impl Course {
    /// Updatable surface of the `courses` table.
    pub const SCHEMA: EntitySchema = EntitySchema {
        entity: "course",
        table: "courses",
        key: "course_code",
        fields: &[
            FieldSpec::required("course_code", FieldKind::Text),
            FieldSpec::required("course_title", FieldKind::Text),
            FieldSpec::optional("pre_requisite", FieldKind::Text),
            FieldSpec::optional("soft_pre_requisite", FieldKind::Text),
            FieldSpec::required("lab", FieldKind::Boolean),
            FieldSpec::required("credit", FieldKind::Float),
            FieldSpec::optional("course_description", FieldKind::Text),
        ],
        read_only: &[],
        update_policy: UpdatePolicy::Whitelist,
    };
}

/// Validated input for inserting a course.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCourse {
    pub course_code: String,
    pub course_title: String,
    pub pre_requisite: Option<String>,
    pub soft_pre_requisite: Option<String>,
    pub lab: bool,
    pub credit: f64,
    pub course_description: Option<String>,
}

impl NewCourse {
    /// The row this input produces once stored.
    pub fn into_course(self) -> Course {
        Course {
            course_code: self.course_code,
            course_title: self.course_title,
            pre_requisite: self.pre_requisite,
            soft_pre_requisite: self.soft_pre_requisite,
            lab: self.lab,
            credit: self.credit,
            course_description: self.course_description,
        }
    }
}
