//! Role gates for route groups. Must run after [`authenticate`](super::auth::authenticate).

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use classhub_entity::UserRole;

use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// Continues only when the caller holds the `admin` role.
pub async fn require_admin(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    state
        .role_gate
        .require_role(&principal, &[UserRole::Admin])
        .await?;
    Ok(next.run(request).await)
}

/// Continues only when the caller holds the `faculty` or `admin` role.
pub async fn require_faculty_or_admin(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    state
        .role_gate
        .require_role(&principal, &[UserRole::Faculty, UserRole::Admin])
        .await?;
    Ok(next.run(request).await)
}
