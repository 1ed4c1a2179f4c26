//! Integration tests for token issuance and the authentication gate.

mod helpers;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use serde_json::{Map, json};

use classhub_auth::{Claims, TokenCodec};
use classhub_entity::UserRole;

#[tokio::test]
async fn test_issue_token_round_trips_subject() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/auth-token",
            Some(json!({ "email": "ada@univ.edu", "name": "Ada" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let token = response.body["token"].as_str().unwrap();
    let claims = app.state.codec.verify(token).unwrap();
    assert_eq!(claims.email, "ada@univ.edu");
    assert_eq!(claims.extra["name"], "Ada");
}

#[tokio::test]
async fn test_jwt_alias_issues_tokens() {
    let app = helpers::TestApp::new();

    let response = app
        .request("POST", "/jwt", Some(json!({ "email": "ada@univ.edu" })), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["token"].is_string());
}

#[tokio::test]
async fn test_issue_token_requires_email() {
    let app = helpers::TestApp::new();

    let response = app
        .request("POST", "/auth-token", Some(json!({ "name": "Ada" })), None)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    assert_eq!(response.body["details"]["fields"], json!(["email"]));
}

#[tokio::test]
async fn test_issued_token_opens_protected_routes() {
    let app = helpers::TestApp::new();
    app.seed_user("ada@univ.edu", UserRole::Faculty).await;

    let issued = app
        .request(
            "POST",
            "/auth-token",
            Some(json!({ "email": "ada@univ.edu" })),
            None,
        )
        .await;
    let token = issued.body["token"].as_str().unwrap().to_string();

    let response = app
        .request("GET", "/users/faculty/ada@univ.edu", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({ "faculty": true }));
}

#[tokio::test]
async fn test_token_with_audience_claim_opens_protected_routes() {
    let app = helpers::TestApp::new();
    app.seed_user("ada@univ.edu", UserRole::Faculty).await;

    let issued = app
        .request(
            "POST",
            "/auth-token",
            Some(json!({ "email": "ada@univ.edu", "aud": "web" })),
            None,
        )
        .await;
    assert_eq!(issued.status, StatusCode::OK);
    let token = issued.body["token"].as_str().unwrap().to_string();
    assert_eq!(app.state.codec.verify(&token).unwrap().extra["aud"], "web");

    let response = app
        .request("GET", "/users/faculty/ada@univ.edu", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({ "faculty": true }));
}

#[tokio::test]
async fn test_missing_header_is_401_without_role_lookup() {
    let app = helpers::TestApp::new();
    app.seed_user("ada@univ.edu", UserRole::Admin).await;
    app.store.reset_counters();

    let response = app.request("GET", "/users", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "UNAUTHENTICATED");
    assert_eq!(app.store.reads(), 0);
}

#[tokio::test]
async fn test_scheme_without_token_is_401() {
    let app = helpers::TestApp::new();

    let response = app
        .request_with_authorization("GET", "/users/admin/ada@univ.edu", None, Some("Bearer"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_wrong_secret_is_403() {
    let app = helpers::TestApp::new();
    app.seed_user("ada@univ.edu", UserRole::Admin).await;
    app.store.reset_counters();

    let forger = TokenCodec::new("some-other-secret", Duration::hours(1)).unwrap();
    let token = forger.sign_subject("ada@univ.edu").unwrap();

    let response = app.request("GET", "/users", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["message"], "forbidden access");
    assert_eq!(app.store.reads(), 0);
}

#[tokio::test]
async fn test_expired_token_is_403_with_same_message() {
    let app = helpers::TestApp::new();
    app.seed_user("ada@univ.edu", UserRole::Admin).await;

    let now = Utc::now();
    let token = app
        .state
        .codec
        .issue(&Claims {
            email: "ada@univ.edu".to_string(),
            iat: (now - Duration::hours(2)).timestamp(),
            exp: (now - Duration::hours(1)).timestamp(),
            extra: Map::new(),
        })
        .unwrap();

    let response = app.request("GET", "/users", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["message"], "forbidden access");
}

#[tokio::test]
async fn test_malformed_token_is_403() {
    let app = helpers::TestApp::new();

    let response = app
        .request("GET", "/users/admin/ada@univ.edu", None, Some("not-a-jwt"))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["error"], "FORBIDDEN");
}

#[tokio::test]
async fn test_public_routes_need_no_token() {
    let app = helpers::TestApp::new();

    let root = app.request("GET", "/", None, None).await;
    assert_eq!(root.status, StatusCode::OK);
    assert_eq!(root.text, "Server is running");

    let health = app.request("GET", "/health", None, None).await;
    assert_eq!(health.status, StatusCode::OK);
    assert_eq!(health.body["store"], "memory");
    assert_eq!(health.body["database"], "in-memory");

    let courses = app.request("GET", "/courses", None, None).await;
    assert_eq!(courses.status, StatusCode::OK);
    assert_eq!(courses.body, json!([]));
}
