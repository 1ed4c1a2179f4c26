//! Response DTOs.

use serde::{Deserialize, Serialize};

use classhub_entity::{ClassResource, Classroom, Course, Resource, User, UserRole};

/// Plain acknowledgement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Issued identity token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Outcome of a user registration. `user` is absent and `insertedId` is
/// null when the email was already registered.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCreated {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    pub inserted_id: Option<i64>,
}

/// Role change acknowledgement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleUpdated {
    pub message: String,
    pub role: UserRole,
}

/// Answer of `GET /users/admin/{email}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminCheck {
    pub admin: bool,
}

/// Answer of `GET /users/faculty/{email}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacultyCheck {
    pub faculty: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseCreated {
    pub message: String,
    pub course: Course,
    pub inserted_id: String,
}

/// Course update acknowledgement with the record as now stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseUpdated {
    pub message: String,
    pub course: Course,
    pub modified_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceCreated {
    pub message: String,
    pub resource: Resource,
    pub inserted_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassroomCreated {
    pub message: String,
    pub classroom: Classroom,
    pub inserted_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassResourceCreated {
    pub message: String,
    pub class_resource: ClassResource,
    pub inserted_id: i64,
}

/// Answer of the class code availability check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeExists {
    pub exists: bool,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `ok` or `degraded`.
    pub status: String,
    pub version: String,
    /// Active store provider.
    pub store: String,
    /// `connected`, `unavailable`, or `in-memory`.
    pub database: String,
}
