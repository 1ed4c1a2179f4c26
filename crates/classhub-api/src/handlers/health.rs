//! Liveness and health check handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::warn;

use classhub_core::config::StoreProvider;

use crate::dto::response::HealthResponse;
use crate::state::AppState;

/// GET /
pub async fn root() -> &'static str {
    "Server is running"
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let store = match state.config.database.provider {
        StoreProvider::Postgres => "postgres",
        StoreProvider::Memory => "memory",
    };

    let (status, database) = match &state.db_pool {
        Some(pool) => match pool.health_check().await {
            Ok(()) => (StatusCode::OK, "connected"),
            Err(e) => {
                warn!(error = %e, "Database health check failed");
                (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
            }
        },
        None => (StatusCode::OK, "in-memory"),
    };

    (
        status,
        Json(HealthResponse {
            status: if status.is_success() { "ok" } else { "degraded" }.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            store: store.to_string(),
            database: database.to_string(),
        }),
    )
}
