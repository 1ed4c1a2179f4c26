//! Classroom resource handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use classhub_entity::ClassResource;
use classhub_service::classroom::CreateClassResourceRequest;

use crate::dto::response::{ClassResourceCreated, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::{JsonBody, PathParam};
use crate::state::AppState;

/// GET /classresources
pub async fn list_class_resources(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<ClassResource>>> {
    Ok(Json(state.class_resource_service.list().await?))
}

/// GET /classresources/{class_code}
pub async fn list_classroom_resources(
    State(state): State<AppState>,
    PathParam(class_code): PathParam<String>,
) -> ApiResult<Json<Vec<ClassResource>>> {
    Ok(Json(
        state
            .class_resource_service
            .list_by_class(&class_code)
            .await?,
    ))
}

/// POST /classresources
pub async fn create_class_resource(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateClassResourceRequest>,
) -> ApiResult<(StatusCode, Json<ClassResourceCreated>)> {
    let class_resource = state.class_resource_service.create(req).await?;
    Ok((
        StatusCode::CREATED,
        Json(ClassResourceCreated {
            message: "class resource created".to_string(),
            inserted_id: class_resource.id,
            class_resource,
        }),
    ))
}

/// DELETE /classresources/{id}
pub async fn delete_class_resource(
    State(state): State<AppState>,
    PathParam(id): PathParam<i64>,
) -> ApiResult<Json<MessageResponse>> {
    state.class_resource_service.delete(id).await?;
    Ok(Json(MessageResponse::new("class resource deleted")))
}
