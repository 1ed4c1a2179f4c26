//! # classhub-api
//!
//! HTTP API layer for ClassHub built on Axum.
//!
//! Provides the catalog endpoints, the authentication gate (bearer token
//! verification) and role gates as middleware, extractors, DTOs, and the
//! mapping from application errors to HTTP responses.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::{ApiError, ApiResult};
pub use state::AppState;
