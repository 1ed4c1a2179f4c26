//! Token issuance.

use axum::Json;
use axum::extract::State;
use serde_json::{Map, Value};
use tracing::info;

use classhub_core::error::AppError;

use crate::dto::response::TokenResponse;
use crate::error::ApiResult;
use crate::extractors::JsonBody;
use crate::state::AppState;

/// POST /auth-token (also POST /jwt)
///
/// Signs the posted claims. The body must carry an `email`.
pub async fn issue_token(
    State(state): State<AppState>,
    JsonBody(claims): JsonBody<Map<String, Value>>,
) -> ApiResult<Json<TokenResponse>> {
    let token = state.codec.sign(&claims).map_err(AppError::from)?;

    let email = claims
        .get("email")
        .and_then(Value::as_str)
        .unwrap_or_default();
    info!(email = %email, "Token issued");
    Ok(Json(TokenResponse { token }))
}
