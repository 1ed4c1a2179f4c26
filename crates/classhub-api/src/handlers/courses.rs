//! Course catalog handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde_json::{Map, Value};

use classhub_entity::Course;
use classhub_service::course::CreateCourseRequest;

use crate::dto::response::{CourseCreated, CourseUpdated, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::{JsonBody, PathParam};
use crate::state::AppState;

/// GET /courses
pub async fn list_courses(State(state): State<AppState>) -> ApiResult<Json<Vec<Course>>> {
    Ok(Json(state.course_service.list().await?))
}

/// GET /courses/{code}
pub async fn get_course(
    State(state): State<AppState>,
    PathParam(code): PathParam<String>,
) -> ApiResult<Json<Course>> {
    Ok(Json(state.course_service.get(&code).await?))
}

/// POST /courses (admin)
pub async fn create_course(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateCourseRequest>,
) -> ApiResult<(StatusCode, Json<CourseCreated>)> {
    let course = state.course_service.create(req).await?;
    Ok((
        StatusCode::CREATED,
        Json(CourseCreated {
            message: "course created".to_string(),
            inserted_id: course.course_code.clone(),
            course,
        }),
    ))
}

/// PATCH /courses/{code} (admin)
pub async fn update_course(
    State(state): State<AppState>,
    PathParam(code): PathParam<String>,
    JsonBody(changes): JsonBody<Map<String, Value>>,
) -> ApiResult<Json<CourseUpdated>> {
    let updated = state.course_service.update(&code, &changes).await?;
    Ok(Json(CourseUpdated {
        message: "course updated".to_string(),
        course: updated.course,
        modified_count: updated.modified,
    }))
}

/// DELETE /courses/{code} (admin)
pub async fn delete_course(
    State(state): State<AppState>,
    PathParam(code): PathParam<String>,
) -> ApiResult<Json<MessageResponse>> {
    state.course_service.delete(&code).await?;
    Ok(Json(MessageResponse::new("course deleted")))
}
