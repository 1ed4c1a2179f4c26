//! Classroom handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde_json::{Map, Value};

use classhub_entity::Classroom;
use classhub_service::classroom::CreateClassroomRequest;

use crate::dto::response::{ClassroomCreated, CodeExists, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::{JsonBody, PathParam};
use crate::state::AppState;

/// GET /classroom
pub async fn list_classrooms(State(state): State<AppState>) -> ApiResult<Json<Vec<Classroom>>> {
    Ok(Json(state.classroom_service.list().await?))
}

/// GET /classroom/check-class-code/{code}
pub async fn check_class_code(
    State(state): State<AppState>,
    PathParam(code): PathParam<String>,
) -> ApiResult<Json<CodeExists>> {
    let exists = state.classroom_service.code_exists(&code).await?;
    Ok(Json(CodeExists { exists }))
}

/// GET /classroom/{class_code}
pub async fn get_classroom(
    State(state): State<AppState>,
    PathParam(class_code): PathParam<String>,
) -> ApiResult<Json<Classroom>> {
    Ok(Json(state.classroom_service.get(&class_code).await?))
}

/// POST /classroom (faculty or admin)
pub async fn create_classroom(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateClassroomRequest>,
) -> ApiResult<(StatusCode, Json<ClassroomCreated>)> {
    let classroom = state.classroom_service.create(req).await?;
    Ok((
        StatusCode::CREATED,
        Json(ClassroomCreated {
            message: "classroom created".to_string(),
            inserted_id: classroom.id,
            classroom,
        }),
    ))
}

/// PATCH /classroom/{class_code} (faculty or admin)
pub async fn update_classroom(
    State(state): State<AppState>,
    PathParam(class_code): PathParam<String>,
    JsonBody(changes): JsonBody<Map<String, Value>>,
) -> ApiResult<Json<MessageResponse>> {
    state
        .classroom_service
        .update(&class_code, &changes)
        .await?;
    Ok(Json(MessageResponse::new("classroom updated")))
}

/// DELETE /classroom/{class_code} (faculty or admin)
pub async fn delete_classroom(
    State(state): State<AppState>,
    PathParam(class_code): PathParam<String>,
) -> ApiResult<Json<MessageResponse>> {
    state.classroom_service.delete(&class_code).await?;
    Ok(Json(MessageResponse::new("classroom deleted")))
}
