//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use classhub_auth::{RoleGate, TokenCodec};
use classhub_core::config::AppConfig;
use classhub_core::result::AppResult;
use classhub_database::{DatabasePool, Stores};
use classhub_service::{
    ClassResourceService, ClassroomService, CourseService, ResourceService, UserService,
};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL pool; `None` when running on the in-memory store
    pub db_pool: Option<DatabasePool>,

    // ── Auth ─────────────────────────────────────────────────
    /// Identity token signer/verifier
    pub codec: Arc<TokenCodec>,
    /// Role lookups for the authorization gate
    pub role_gate: Arc<RoleGate>,

    // ── Services ─────────────────────────────────────────────
    pub user_service: Arc<UserService>,
    pub course_service: Arc<CourseService>,
    pub resource_service: Arc<ResourceService>,
    pub classroom_service: Arc<ClassroomService>,
    pub class_resource_service: Arc<ClassResourceService>,
}

impl AppState {
    /// Wires services over `stores`. Fails if the token secret is unusable.
    pub fn new(config: AppConfig, stores: Stores, db_pool: Option<DatabasePool>) -> AppResult<Self> {
        let codec = TokenCodec::from_config(&config.auth)?;

        Ok(Self {
            config: Arc::new(config),
            db_pool,
            codec: Arc::new(codec),
            role_gate: Arc::new(RoleGate::new(Arc::clone(&stores.roles))),
            user_service: Arc::new(UserService::new(Arc::clone(&stores.users))),
            course_service: Arc::new(CourseService::new(Arc::clone(&stores.courses))),
            resource_service: Arc::new(ResourceService::new(
                Arc::clone(&stores.resources),
                Arc::clone(&stores.courses),
            )),
            classroom_service: Arc::new(ClassroomService::new(
                Arc::clone(&stores.classrooms),
                Arc::clone(&stores.courses),
            )),
            class_resource_service: Arc::new(ClassResourceService::new(
                Arc::clone(&stores.class_resources),
                Arc::clone(&stores.classrooms),
            )),
        })
    }
}
