//! Classroom entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::schema::{EntitySchema, FieldKind, FieldSpec, UpdatePolicy};

/// A section of a course, identified by a unique class code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Classroom {
    /// Surrogate key.
    pub id: i64,
    /// Unique join code.
    pub class_code: String,
    /// Course this section belongs to.
    pub course_code: String,
    /// Instructor contact.
    pub email: Option<String>,
    pub faculty_initial: Option<String>,
    pub section: Option<String>,
    pub semester: Option<String>,
}

impl Classroom {
    /// Updatable surface of the `classroom` table.
    ///
    /// Classroom updates accept any key; the listed fields only fix ordering
    /// and coercion for the columns that are known.
    pub const SCHEMA: EntitySchema = EntitySchema {
        entity: "classroom",
        table: "classroom",
        key: "class_code",
        fields: &[
            FieldSpec::required("course_code", FieldKind::Text),
            FieldSpec::optional("email", FieldKind::Text),
            FieldSpec::optional("faculty_initial", FieldKind::Text),
            FieldSpec::optional("section", FieldKind::Text),
            FieldSpec::optional("semester", FieldKind::Text),
        ],
        read_only: &["id"],
        update_policy: UpdatePolicy::AcceptAnyField,
    };
}

/// Validated input for inserting a classroom.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewClassroom {
    pub class_code: String,
    pub course_code: String,
    pub email: Option<String>,
    pub faculty_initial: Option<String>,
    pub section: Option<String>,
    pub semester: Option<String>,
}
