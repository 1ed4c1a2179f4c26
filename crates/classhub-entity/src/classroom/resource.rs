//! Class resource entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A link posted to a single classroom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ClassResource {
    pub id: i64,
    /// Owning classroom.
    pub class_code: String,
    pub course_code: Option<String>,
    pub description: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
    pub link: String,
}

/// Validated input for inserting a class resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewClassResource {
    pub class_code: String,
    pub course_code: Option<String>,
    pub description: String,
    pub kind: String,
    pub link: String,
}
