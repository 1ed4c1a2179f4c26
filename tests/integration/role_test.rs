//! Integration tests for role queries, role gates, and user management.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use classhub_entity::UserRole;

#[tokio::test]
async fn test_faculty_end_to_end() {
    let app = helpers::TestApp::new();
    let token = app.login_as("prof@univ.edu", UserRole::Faculty).await;

    let faculty = app
        .request("GET", "/users/faculty/prof@univ.edu", None, Some(&token))
        .await;
    assert_eq!(faculty.status, StatusCode::OK);
    assert_eq!(faculty.body, json!({ "faculty": true }));

    let admin = app
        .request("GET", "/users/admin/prof@univ.edu", None, Some(&token))
        .await;
    assert_eq!(admin.status, StatusCode::OK);
    assert_eq!(admin.body, json!({ "admin": false }));

    let gated = app.request("GET", "/users", None, Some(&token)).await;
    assert_eq!(gated.status, StatusCode::FORBIDDEN);
    assert_eq!(gated.body["message"], "forbidden access");
}

#[tokio::test]
async fn test_subject_mismatch_is_403_before_store_access() {
    let app = helpers::TestApp::new();
    let token = app.login_as("a@x.com", UserRole::Admin).await;
    app.seed_user("b@x.com", UserRole::Admin).await;
    app.store.reset_counters();

    for path in ["/users/admin/b@x.com", "/users/faculty/b@x.com"] {
        let response = app.request("GET", path, None, Some(&token)).await;
        assert_eq!(response.status, StatusCode::FORBIDDEN, "{path}");
    }
    assert_eq!(app.store.reads(), 0);
}

#[tokio::test]
async fn test_unknown_principal_has_no_role() {
    let app = helpers::TestApp::new();
    let token = app.token_for("ghost@univ.edu");

    let query = app
        .request("GET", "/users/admin/ghost@univ.edu", None, Some(&token))
        .await;
    assert_eq!(query.status, StatusCode::OK);
    assert_eq!(query.body, json!({ "admin": false }));

    let gated = app.request("GET", "/users", None, Some(&token)).await;
    assert_eq!(gated.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_role_lookup_failure_is_500_not_no() {
    let app = helpers::TestApp::new();
    let token = app.login_as("ada@univ.edu", UserRole::Admin).await;
    app.store.simulate_outage(true);

    let response = app
        .request("GET", "/users/admin/ada@univ.edu", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body["error"], "INTERNAL_ERROR");
    assert_eq!(response.body["message"], "internal server error");
}

#[tokio::test]
async fn test_admin_lists_users() {
    let app = helpers::TestApp::new();
    let token = app.login_as("root@univ.edu", UserRole::Admin).await;
    app.seed_user("ada@univ.edu", UserRole::User).await;

    let response = app.request("GET", "/users", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_register_is_create_if_absent() {
    let app = helpers::TestApp::new();

    let created = app
        .request(
            "POST",
            "/users",
            Some(json!({ "name": "Ada", "email": "ada@univ.edu", "role": "admin" })),
            None,
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert!(created.body["insertedId"].is_i64());
    assert_eq!(created.body["user"]["role"], "user");

    let again = app
        .request(
            "POST",
            "/users",
            Some(json!({ "email": "ada@univ.edu" })),
            None,
        )
        .await;
    assert_eq!(again.status, StatusCode::OK);
    assert_eq!(again.body["insertedId"], json!(null));
    assert_eq!(again.body["message"], "user already exists");
}

#[tokio::test]
async fn test_register_validates_email() {
    let app = helpers::TestApp::new();

    let missing = app
        .request("POST", "/users", Some(json!({ "name": "Ada" })), None)
        .await;
    assert_eq!(missing.status, StatusCode::BAD_REQUEST);
    assert_eq!(missing.body["details"]["fields"], json!(["email"]));

    let malformed = app
        .request("POST", "/users", Some(json!({ "email": "not-an-email" })), None)
        .await;
    assert_eq!(malformed.status, StatusCode::BAD_REQUEST);
    assert_eq!(malformed.body["details"]["field"], "email");
}

#[tokio::test]
async fn test_admin_updates_role() {
    let app = helpers::TestApp::new();
    let token = app.login_as("root@univ.edu", UserRole::Admin).await;
    let user = app.seed_user("ada@univ.edu", UserRole::User).await;
    let ada = app.token_for("ada@univ.edu");

    let response = app
        .request(
            "PATCH",
            &format!("/users/role/{}", user.id),
            Some(json!({ "role": "faculty" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["role"], "faculty");

    let check = app
        .request("GET", "/users/faculty/ada@univ.edu", None, Some(&ada))
        .await;
    assert_eq!(check.body, json!({ "faculty": true }));
}

#[tokio::test]
async fn test_role_update_rejects_unknown_role_and_missing_user() {
    let app = helpers::TestApp::new();
    let token = app.login_as("root@univ.edu", UserRole::Admin).await;
    let user = app.seed_user("ada@univ.edu", UserRole::User).await;

    let unknown = app
        .request(
            "PATCH",
            &format!("/users/role/{}", user.id),
            Some(json!({ "role": "dean" })),
            Some(&token),
        )
        .await;
    assert_eq!(unknown.status, StatusCode::BAD_REQUEST);
    assert_eq!(unknown.body["details"]["field"], "role");

    let absent = app
        .request(
            "PATCH",
            "/users/role/9999",
            Some(json!({ "role": "faculty" })),
            Some(&token),
        )
        .await;
    assert_eq!(absent.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_admin_deletes_user() {
    let app = helpers::TestApp::new();
    let token = app.login_as("root@univ.edu", UserRole::Admin).await;
    let user = app.seed_user("ada@univ.edu", UserRole::User).await;
    let path = format!("/users/{}", user.id);

    let deleted = app.request("DELETE", &path, None, Some(&token)).await;
    assert_eq!(deleted.status, StatusCode::OK);

    let again = app.request("DELETE", &path, None, Some(&token)).await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
    assert_eq!(again.body["error"], "NOT_FOUND");
}
