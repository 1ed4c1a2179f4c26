//! Bearer token authentication middleware.

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;
use tracing::debug;

use classhub_auth::Principal;
use classhub_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// Verifies the bearer token and attaches the [`Principal`] to the request.
///
/// No header, or no token after the scheme word, is 401. Any verification
/// failure, expiry included, is 403 with a fixed message.
pub async fn authenticate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(&request)?;

    let claims = state.codec.verify(&token).map_err(|e| {
        debug!(
            path = %request.uri().path(),
            reason = %e,
            "Token rejected"
        );
        AppError::from(e)
    })?;

    request.extensions_mut().insert(Principal::from(claims));
    Ok(next.run(request).await)
}

/// Second whitespace-delimited token of the `Authorization` header.
fn bearer_token(request: &Request) -> Result<String, AppError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::unauthenticated("unauthorized access"))?;

    header
        .split_whitespace()
        .nth(1)
        .map(str::to_string)
        .ok_or_else(|| AppError::unauthenticated("unauthorized access"))
}
