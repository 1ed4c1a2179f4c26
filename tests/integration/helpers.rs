//! Shared test helpers for integration tests.
//!
//! Every `TestApp` runs the full router over its own in-memory store, so
//! tests need no external database and never share state.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use classhub_api::{AppState, build_app};
use classhub_core::config::AppConfig;
use classhub_database::{ClassroomStore, CourseStore, MemoryStore, Stores, UserStore};
use classhub_entity::{Classroom, Course, NewClassroom, NewCourse, NewUser, User, UserRole};

/// Secret the test application signs with.
pub const TEST_SECRET: &str = "integration-test-secret";

const TEST_CONFIG: &str = r#"
[database]
provider = "memory"

[auth]
jwt_secret = "integration-test-secret"
token_ttl_minutes = 60

[logging]
level = "warn"
format = "pretty"
"#;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Backing store, for seeding and direct inspection
    pub store: Arc<MemoryStore>,
    /// Shared state, for signing tokens with the app's codec
    pub state: AppState,
}

impl TestApp {
    /// Create a new test application over an empty store
    pub fn new() -> Self {
        let config = AppConfig::from_toml(TEST_CONFIG).expect("Failed to load test config");
        let store = Arc::new(MemoryStore::new());
        let state = AppState::new(config, Stores::memory(store.clone()), None)
            .expect("Failed to build app state");

        Self {
            router: build_app(state.clone()),
            store,
            state,
        }
    }

    /// A valid token for `email`, signed with the app's secret
    pub fn token_for(&self, email: &str) -> String {
        self.state
            .codec
            .sign_subject(email)
            .expect("Failed to sign token")
    }

    /// Insert a user with the given role directly into the store
    pub async fn seed_user(&self, email: &str, role: UserRole) -> User {
        UserStore::create(
            self.store.as_ref(),
            &NewUser {
                name: None,
                email: email.to_string(),
                role,
            },
        )
        .await
        .expect("Failed to seed user")
    }

    /// Seed a user and return a token for them
    pub async fn login_as(&self, email: &str, role: UserRole) -> String {
        self.seed_user(email, role).await;
        self.token_for(email)
    }

    /// Insert a course directly into the store
    pub async fn seed_course(&self, code: &str) -> Course {
        CourseStore::create(
            self.store.as_ref(),
            &NewCourse {
                course_code: code.to_string(),
                course_title: format!("{code} title"),
                pre_requisite: Some("CSE101".to_string()),
                soft_pre_requisite: None,
                lab: false,
                credit: 3.0,
                course_description: Some("Seeded course".to_string()),
            },
        )
        .await
        .expect("Failed to seed course")
    }

    /// Insert a classroom directly into the store
    pub async fn seed_classroom(&self, class_code: &str, course_code: &str) -> Classroom {
        ClassroomStore::create(
            self.store.as_ref(),
            &NewClassroom {
                class_code: class_code.to_string(),
                course_code: course_code.to_string(),
                email: Some("prof@univ.edu".to_string()),
                faculty_initial: Some("PRF".to_string()),
                section: Some("1".to_string()),
                semester: Some("Fall".to_string()),
            },
        )
        .await
        .expect("Failed to seed classroom")
    }

    /// Make a JSON request with an optional bearer token
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let authorization = token.map(|t| format!("Bearer {t}"));
        self.request_with_authorization(method, path, body, authorization.as_deref())
            .await
    }

    /// Make a JSON request with a raw `Authorization` header value
    pub async fn request_with_authorization(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        authorization: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(authorization) = authorization {
            req = req.header("Authorization", authorization);
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let text = String::from_utf8_lossy(&body_bytes).to_string();
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body, text }
    }
}

/// Test response wrapper
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body (`Null` when the body is not JSON)
    pub body: Value,
    /// Raw body text
    pub text: String,
}
