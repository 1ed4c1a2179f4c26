//! Resource entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A link attached to a course. `link` is unique store-wide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Resource {
    /// Surrogate key.
    pub id: i64,
    /// Owning course.
    pub course_code: String,
    /// What the link points at.
    pub description: String,
    /// Who published the material.
    pub publishers_name: Option<String>,
    /// Resource category (e.g. `video`, `slides`).
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
    /// Absolute URI of the material.
    pub link: String,
    /// Community vote count; assigned by the store.
    pub vote: i32,
}

/// Validated input for inserting a resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewResource {
    pub course_code: String,
    pub description: String,
    pub publishers_name: Option<String>,
    pub kind: String,
    pub link: String,
    /// Initial vote count; `None` leaves the store default in place.
    pub vote: Option<i32>,
}
