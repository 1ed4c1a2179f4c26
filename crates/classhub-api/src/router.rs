//! Route definitions for the ClassHub HTTP API.
//!
//! Routes are grouped by the gates they sit behind. Groups are merged, so a
//! path may serve a public `GET` and a gated `POST` at once.

use axum::{
    Router,
    middleware::from_fn,
    middleware::from_fn_with_state,
    routing::{delete, get, patch, post},
};

use crate::handlers;
use crate::middleware::auth::authenticate;
use crate::middleware::logging::request_logging;
use crate::middleware::rbac::{require_admin, require_faculty_or_admin};
use crate::state::AppState;

/// Build the complete Axum router with all routes and request logging.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(public_routes())
        .merge(authenticated_routes(state.clone()))
        .merge(admin_routes(state.clone()))
        .merge(faculty_routes(state.clone()))
        .layer(from_fn(request_logging))
        .with_state(state)
}

/// Reads, token issuance, registration, health
fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::health::root))
        .route("/health", get(handlers::health::health))
        .route("/auth-token", post(handlers::auth::issue_token))
        .route("/jwt", post(handlers::auth::issue_token))
        .route("/users", post(handlers::users::create_user))
        .route("/courses", get(handlers::courses::list_courses))
        .route("/courses/{code}", get(handlers::courses::get_course))
        .route("/resources", get(handlers::resources::list_resources))
        .route(
            "/resources/{course_code}",
            get(handlers::resources::list_course_resources),
        )
        .route("/classroom", get(handlers::classroom::list_classrooms))
        .route(
            "/classroom/check-class-code/{code}",
            get(handlers::classroom::check_class_code),
        )
        .route(
            "/classroom/{class_code}",
            get(handlers::classroom::get_classroom),
        )
        .route(
            "/classresources",
            get(handlers::class_resources::list_class_resources),
        )
        .route(
            "/classresources/{class_code}",
            get(handlers::class_resources::list_classroom_resources),
        )
}

/// Any verified caller
fn authenticated_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/users/admin/{email}", get(handlers::users::check_admin))
        .route("/users/faculty/{email}", get(handlers::users::check_faculty))
        .route("/resources", post(handlers::resources::create_resource))
        .route(
            "/classresources",
            post(handlers::class_resources::create_class_resource),
        )
        // Same segment as the per-class listing; here it carries the resource id.
        .route(
            "/classresources/{class_code}",
            delete(handlers::class_resources::delete_class_resource),
        )
        .route_layer(from_fn_with_state(state, authenticate))
}

/// Callers holding the `admin` role
fn admin_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/users", get(handlers::users::list_users))
        .route("/users/{id}", delete(handlers::users::delete_user))
        .route("/users/role/{id}", patch(handlers::users::update_role))
        .route("/courses", post(handlers::courses::create_course))
        .route(
            "/courses/{code}",
            patch(handlers::courses::update_course).delete(handlers::courses::delete_course),
        )
        // Same segment as the per-course listing; here it carries the resource id.
        .route(
            "/resources/{course_code}",
            delete(handlers::resources::delete_resource),
        )
        .route_layer(from_fn_with_state(state.clone(), require_admin))
        .route_layer(from_fn_with_state(state, authenticate))
}

/// Callers holding the `faculty` or `admin` role
fn faculty_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/classroom", post(handlers::classroom::create_classroom))
        .route(
            "/classroom/{class_code}",
            patch(handlers::classroom::update_classroom)
                .delete(handlers::classroom::delete_classroom),
        )
        .route_layer(from_fn_with_state(state.clone(), require_faculty_or_admin))
        .route_layer(from_fn_with_state(state, authenticate))
}
