//! User registration, role queries, and admin user management.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use classhub_entity::{User, UserRole};
use classhub_service::user::{CreateUserRequest, UpdateRoleRequest, UserCreation};

use crate::dto::response::{AdminCheck, FacultyCheck, MessageResponse, RoleUpdated, UserCreated};
use crate::error::ApiResult;
use crate::extractors::{AuthUser, JsonBody, PathParam};
use crate::state::AppState;

/// GET /users (admin)
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<User>>> {
    Ok(Json(state.user_service.list().await?))
}

/// POST /users
///
/// Registers the caller unless the email is already known.
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<UserCreated>)> {
    let response = match state.user_service.create_if_absent(req).await? {
        UserCreation::Created(user) => (
            StatusCode::CREATED,
            Json(UserCreated {
                message: "user created".to_string(),
                inserted_id: Some(user.id),
                user: Some(user),
            }),
        ),
        UserCreation::AlreadyExists => (
            StatusCode::OK,
            Json(UserCreated {
                message: "user already exists".to_string(),
                user: None,
                inserted_id: None,
            }),
        ),
    };
    Ok(response)
}

/// GET /users/admin/{email}
pub async fn check_admin(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    PathParam(email): PathParam<String>,
) -> ApiResult<Json<AdminCheck>> {
    let admin = state
        .role_gate
        .has_role(&principal, Some(&email), &[UserRole::Admin])
        .await?;
    Ok(Json(AdminCheck { admin }))
}

/// GET /users/faculty/{email}
pub async fn check_faculty(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    PathParam(email): PathParam<String>,
) -> ApiResult<Json<FacultyCheck>> {
    let faculty = state
        .role_gate
        .has_role(&principal, Some(&email), &[UserRole::Faculty])
        .await?;
    Ok(Json(FacultyCheck { faculty }))
}

/// DELETE /users/{id} (admin)
pub async fn delete_user(
    State(state): State<AppState>,
    PathParam(id): PathParam<i64>,
) -> ApiResult<Json<MessageResponse>> {
    state.user_service.delete(id).await?;
    Ok(Json(MessageResponse::new("user deleted")))
}

/// PATCH /users/role/{id} (admin)
pub async fn update_role(
    State(state): State<AppState>,
    PathParam(id): PathParam<i64>,
    JsonBody(req): JsonBody<UpdateRoleRequest>,
) -> ApiResult<Json<RoleUpdated>> {
    let role = state.user_service.update_role(id, req).await?;
    Ok(Json(RoleUpdated {
        message: "user role updated".to_string(),
        role,
    }))
}
