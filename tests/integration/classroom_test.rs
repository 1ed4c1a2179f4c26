//! Integration tests for classrooms and their posted resources.

mod helpers;

use axum::http::StatusCode;
use serde_json::{Value, json};

use classhub_entity::UserRole;

fn classroom_body(class_code: &str) -> Value {
    json!({
        "class_code": class_code,
        "course_code": "CSE110",
        "email": "prof@univ.edu",
        "section": "3",
        "semester": "Spring"
    })
}

fn class_resource_body(class_code: &str, link: &str) -> Value {
    json!({
        "class_code": class_code,
        "course_code": "CSE110",
        "description": "Assignment 1",
        "type": "pdf",
        "link": link
    })
}

#[tokio::test]
async fn test_faculty_creates_classroom() {
    let app = helpers::TestApp::new();
    let token = app.login_as("prof@univ.edu", UserRole::Faculty).await;
    app.seed_course("CSE110").await;

    let response = app
        .request("POST", "/classroom", Some(classroom_body("X7Y8Z9")), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["classroom"]["class_code"], "X7Y8Z9");
    assert_eq!(response.body["insertedId"], response.body["classroom"]["id"]);

    let fetched = app.request("GET", "/classroom/X7Y8Z9", None, None).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["section"], "3");
}

#[tokio::test]
async fn test_plain_user_cannot_create_classroom() {
    let app = helpers::TestApp::new();
    let token = app.login_as("student@univ.edu", UserRole::User).await;
    app.seed_course("CSE110").await;
    app.store.reset_counters();

    let response = app
        .request("POST", "/classroom", Some(classroom_body("X7Y8Z9")), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(app.store.writes(), 0);
}

#[tokio::test]
async fn test_classroom_requires_existing_course() {
    let app = helpers::TestApp::new();
    let token = app.login_as("root@univ.edu", UserRole::Admin).await;

    let response = app
        .request("POST", "/classroom", Some(classroom_body("X7Y8Z9")), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "REFERENCE_NOT_FOUND");
    assert_eq!(response.body["details"]["entity"], "course");
}

#[tokio::test]
async fn test_duplicate_class_code_is_conflict() {
    let app = helpers::TestApp::new();
    let token = app.login_as("prof@univ.edu", UserRole::Faculty).await;
    app.seed_course("CSE110").await;
    app.seed_classroom("X7Y8Z9", "CSE110").await;

    let response = app
        .request("POST", "/classroom", Some(classroom_body("X7Y8Z9")), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_check_class_code_ignores_case_and_whitespace() {
    let app = helpers::TestApp::new();
    app.seed_course("CSE110").await;
    app.seed_classroom("AbC123", "CSE110").await;

    let taken = app
        .request("GET", "/classroom/check-class-code/%20abc123%20", None, None)
        .await;
    assert_eq!(taken.status, StatusCode::OK);
    assert_eq!(taken.body, json!({ "exists": true }));

    let free = app
        .request("GET", "/classroom/check-class-code/ZZZ999", None, None)
        .await;
    assert_eq!(free.body, json!({ "exists": false }));
}

#[tokio::test]
async fn test_partial_update_changes_only_supplied_fields() {
    let app = helpers::TestApp::new();
    let token = app.login_as("prof@univ.edu", UserRole::Faculty).await;
    app.seed_course("CSE110").await;
    app.seed_classroom("X7Y8Z9", "CSE110").await;
    let before = app.request("GET", "/classroom/X7Y8Z9", None, None).await.body;

    let response = app
        .request(
            "PATCH",
            "/classroom/X7Y8Z9",
            Some(json!({ "section": "2" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({ "message": "classroom updated" }));

    let mut expected = before;
    expected["section"] = json!("2");
    let after = app.request("GET", "/classroom/X7Y8Z9", None, None).await.body;
    assert_eq!(after, expected);
}

#[tokio::test]
async fn test_unknown_column_fails_at_store_without_partial_write() {
    let app = helpers::TestApp::new();
    let token = app.login_as("prof@univ.edu", UserRole::Faculty).await;
    app.seed_course("CSE110").await;
    app.seed_classroom("X7Y8Z9", "CSE110").await;
    let before = app.request("GET", "/classroom/X7Y8Z9", None, None).await.body;

    let response = app
        .request(
            "PATCH",
            "/classroom/X7Y8Z9",
            Some(json!({ "section": "9", "room": "B1" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body["message"], "internal server error");
    assert!(!response.text.contains("room"));

    let after = app.request("GET", "/classroom/X7Y8Z9", None, None).await.body;
    assert_eq!(after, before);
}

#[tokio::test]
async fn test_surrogate_key_cannot_be_updated() {
    let app = helpers::TestApp::new();
    let token = app.login_as("prof@univ.edu", UserRole::Faculty).await;
    app.seed_course("CSE110").await;
    let seeded = app.seed_classroom("X7Y8Z9", "CSE110").await;
    app.store.reset_counters();

    let response = app
        .request(
            "PATCH",
            "/classroom/X7Y8Z9",
            Some(json!({ "id": 999, "section": "2" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["details"]["field"], "id");
    assert_eq!(app.store.writes(), 0);

    let after = app.request("GET", "/classroom/X7Y8Z9", None, None).await.body;
    assert_eq!(after["id"], seeded.id);
    assert_eq!(after["section"], "1");
}

#[tokio::test]
async fn test_empty_and_absent_updates() {
    let app = helpers::TestApp::new();
    let token = app.login_as("prof@univ.edu", UserRole::Faculty).await;
    app.seed_course("CSE110").await;
    app.seed_classroom("X7Y8Z9", "CSE110").await;

    let empty = app
        .request("PATCH", "/classroom/X7Y8Z9", Some(json!({})), Some(&token))
        .await;
    assert_eq!(empty.status, StatusCode::BAD_REQUEST);
    assert_eq!(empty.body["details"]["reason"], "no_fields");

    let absent = app
        .request(
            "PATCH",
            "/classroom/NOPE",
            Some(json!({ "section": "1" })),
            Some(&token),
        )
        .await;
    assert_eq!(absent.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_classroom_removes_its_resources() {
    let app = helpers::TestApp::new();
    let token = app.login_as("prof@univ.edu", UserRole::Faculty).await;
    app.seed_course("CSE110").await;
    app.seed_classroom("X7Y8Z9", "CSE110").await;
    let posted = app
        .request(
            "POST",
            "/classresources",
            Some(class_resource_body("X7Y8Z9", "https://files.example.com/a1.pdf")),
            Some(&token),
        )
        .await;
    assert_eq!(posted.status, StatusCode::CREATED);

    let deleted = app
        .request("DELETE", "/classroom/X7Y8Z9", None, Some(&token))
        .await;
    assert_eq!(deleted.status, StatusCode::OK);

    let gone = app.request("GET", "/classroom/X7Y8Z9", None, None).await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
    let resources = app.request("GET", "/classresources", None, None).await;
    assert_eq!(resources.body, json!([]));

    let again = app
        .request("DELETE", "/classroom/X7Y8Z9", None, Some(&token))
        .await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_class_resource_requires_existing_classroom() {
    let app = helpers::TestApp::new();
    let token = app.token_for("student@univ.edu");
    app.store.reset_counters();

    let response = app
        .request(
            "POST",
            "/classresources",
            Some(class_resource_body("NOPE", "https://files.example.com/a1.pdf")),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["details"]["entity"], "classroom");
    assert_eq!(response.body["details"]["key"], "NOPE");
    assert_eq!(app.store.writes(), 0);
}

#[tokio::test]
async fn test_class_resources_list_and_delete() {
    let app = helpers::TestApp::new();
    let token = app.token_for("student@univ.edu");
    app.seed_course("CSE110").await;
    app.seed_classroom("X7Y8Z9", "CSE110").await;
    app.seed_classroom("Q1W2E3", "CSE110").await;

    let first = app
        .request(
            "POST",
            "/classresources",
            Some(class_resource_body("X7Y8Z9", "https://files.example.com/a1.pdf")),
            Some(&token),
        )
        .await;
    assert_eq!(first.status, StatusCode::CREATED);
    assert_eq!(first.body["classResource"]["type"], "pdf");
    app.request(
        "POST",
        "/classresources",
        Some(class_resource_body("Q1W2E3", "https://files.example.com/b1.pdf")),
        Some(&token),
    )
    .await;

    let listed = app
        .request("GET", "/classresources/X7Y8Z9", None, None)
        .await;
    let items = listed.body.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["class_code"], "X7Y8Z9");

    let path = format!("/classresources/{}", first.body["insertedId"]);
    let deleted = app.request("DELETE", &path, None, Some(&token)).await;
    assert_eq!(deleted.status, StatusCode::OK);

    let again = app.request("DELETE", &path, None, Some(&token)).await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_class_resource_missing_fields() {
    let app = helpers::TestApp::new();
    let token = app.token_for("student@univ.edu");

    let response = app
        .request(
            "POST",
            "/classresources",
            Some(json!({ "class_code": "X7Y8Z9", "type": "pdf" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["details"]["fields"],
        json!(["description", "link"])
    );
}
