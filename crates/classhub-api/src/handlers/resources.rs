//! Course resource handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use classhub_entity::Resource;
use classhub_service::resource::CreateResourceRequest;

use crate::dto::response::{MessageResponse, ResourceCreated};
use crate::error::ApiResult;
use crate::extractors::{JsonBody, PathParam};
use crate::state::AppState;

/// GET /resources
pub async fn list_resources(State(state): State<AppState>) -> ApiResult<Json<Vec<Resource>>> {
    Ok(Json(state.resource_service.list().await?))
}

/// GET /resources/{course_code}
pub async fn list_course_resources(
    State(state): State<AppState>,
    PathParam(course_code): PathParam<String>,
) -> ApiResult<Json<Vec<Resource>>> {
    Ok(Json(
        state.resource_service.list_by_course(&course_code).await?,
    ))
}

/// POST /resources
pub async fn create_resource(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateResourceRequest>,
) -> ApiResult<(StatusCode, Json<ResourceCreated>)> {
    let resource = state.resource_service.create(req).await?;
    Ok((
        StatusCode::CREATED,
        Json(ResourceCreated {
            message: "resource created".to_string(),
            inserted_id: resource.id,
            resource,
        }),
    ))
}

/// DELETE /resources/{id} (admin)
pub async fn delete_resource(
    State(state): State<AppState>,
    PathParam(id): PathParam<i64>,
) -> ApiResult<Json<MessageResponse>> {
    state.resource_service.delete(id).await?;
    Ok(Json(MessageResponse::new("resource deleted")))
}
