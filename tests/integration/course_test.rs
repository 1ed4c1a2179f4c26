//! Integration tests for the course catalog and its partial updates.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use classhub_entity::UserRole;

fn course_body() -> serde_json::Value {
    json!({
        "course_code": "CSE220",
        "course_title": "Data Structures",
        "pre_requisite": "CSE110",
        "lab": "true",
        "credit": "3",
        "course_description": "Lists, trees, graphs"
    })
}

#[tokio::test]
async fn test_admin_creates_course() {
    let app = helpers::TestApp::new();
    let token = app.login_as("root@univ.edu", UserRole::Admin).await;

    let response = app
        .request("POST", "/courses", Some(course_body()), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["insertedId"], "CSE220");
    assert_eq!(response.body["course"]["lab"], true);
    assert_eq!(response.body["course"]["credit"], 3.0);
    assert_eq!(response.body["course"]["soft_pre_requisite"], json!(null));

    let fetched = app.request("GET", "/courses/CSE220", None, None).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body, response.body["course"]);
}

#[tokio::test]
async fn test_non_admin_cannot_create_course() {
    let app = helpers::TestApp::new();
    let token = app.login_as("prof@univ.edu", UserRole::Faculty).await;
    app.store.reset_counters();

    let response = app
        .request("POST", "/courses", Some(course_body()), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(app.store.writes(), 0);
}

#[tokio::test]
async fn test_missing_field_is_named_and_nothing_written() {
    let app = helpers::TestApp::new();
    let token = app.login_as("root@univ.edu", UserRole::Admin).await;
    app.store.reset_counters();

    let mut body = course_body();
    body.as_object_mut().unwrap().remove("course_title");

    let response = app
        .request("POST", "/courses", Some(body), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["details"]["reason"], "missing_fields");
    assert_eq!(response.body["details"]["fields"], json!(["course_title"]));
    assert_eq!(app.store.writes(), 0);
}

#[tokio::test]
async fn test_non_numeric_credit_is_invalid_format() {
    let app = helpers::TestApp::new();
    let token = app.login_as("root@univ.edu", UserRole::Admin).await;

    let mut body = course_body();
    body["credit"] = json!("three");

    let response = app
        .request("POST", "/courses", Some(body), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["details"]["reason"], "invalid_format");
    assert_eq!(response.body["details"]["field"], "credit");
}

#[tokio::test]
async fn test_duplicate_course_is_conflict() {
    let app = helpers::TestApp::new();
    let token = app.login_as("root@univ.edu", UserRole::Admin).await;
    app.seed_course("CSE220").await;

    let response = app
        .request("POST", "/courses", Some(course_body()), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["error"], "CONFLICT");
}

#[tokio::test]
async fn test_empty_update_never_reaches_course_store() {
    let app = helpers::TestApp::new();
    let token = app.login_as("root@univ.edu", UserRole::Admin).await;
    app.seed_course("CSE110").await;
    app.store.reset_counters();

    let response = app
        .request("PATCH", "/courses/CSE110", Some(json!({})), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["details"]["reason"], "no_fields");
    // The only store access is the admin gate's role lookup.
    assert_eq!(app.store.reads(), 1);
    assert_eq!(app.store.writes(), 0);
}

#[tokio::test]
async fn test_unrecognised_fields_alone_are_no_fields() {
    let app = helpers::TestApp::new();
    let token = app.login_as("root@univ.edu", UserRole::Admin).await;
    app.seed_course("CSE110").await;

    let response = app
        .request(
            "PATCH",
            "/courses/CSE110",
            Some(json!({ "room": "B1" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["details"]["reason"], "no_fields");
}

#[tokio::test]
async fn test_blank_required_field_is_rejected_on_update() {
    let app = helpers::TestApp::new();
    let token = app.login_as("root@univ.edu", UserRole::Admin).await;
    app.seed_course("CSE110").await;
    app.store.reset_counters();

    let response = app
        .request(
            "PATCH",
            "/courses/CSE110",
            Some(json!({ "course_code": "" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["details"]["reason"], "invalid_format");
    assert_eq!(response.body["details"]["field"], "course_code");
    assert_eq!(app.store.writes(), 0);

    let still_there = app.request("GET", "/courses/CSE110", None, None).await;
    assert_eq!(still_there.status, StatusCode::OK);
}

#[tokio::test]
async fn test_partial_update_leaves_other_fields_unchanged() {
    let app = helpers::TestApp::new();
    let token = app.login_as("root@univ.edu", UserRole::Admin).await;
    app.seed_course("CSE110").await;
    let before = app.request("GET", "/courses/CSE110", None, None).await.body;

    let response = app
        .request(
            "PATCH",
            "/courses/CSE110",
            Some(json!({ "course_title": "Programming Language I" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["modifiedCount"], 1);

    let mut expected = before;
    expected["course_title"] = json!("Programming Language I");
    assert_eq!(response.body["course"], expected);

    let after = app.request("GET", "/courses/CSE110", None, None).await.body;
    assert_eq!(after, expected);
}

#[tokio::test]
async fn test_explicit_null_clears_optional_field() {
    let app = helpers::TestApp::new();
    let token = app.login_as("root@univ.edu", UserRole::Admin).await;
    app.seed_course("CSE110").await;

    let response = app
        .request(
            "PATCH",
            "/courses/CSE110",
            Some(json!({ "pre_requisite": null })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["course"]["pre_requisite"], json!(null));
    assert_eq!(response.body["course"]["course_title"], "CSE110 title");
}

#[tokio::test]
async fn test_renaming_course_rereads_under_new_code() {
    let app = helpers::TestApp::new();
    let token = app.login_as("root@univ.edu", UserRole::Admin).await;
    app.seed_course("CSE110").await;

    let response = app
        .request(
            "PATCH",
            "/courses/CSE110",
            Some(json!({ "course_code": "CSE111" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["course"]["course_code"], "CSE111");

    let old = app.request("GET", "/courses/CSE110", None, None).await;
    assert_eq!(old.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_of_absent_course_is_not_found() {
    let app = helpers::TestApp::new();
    let token = app.login_as("root@univ.edu", UserRole::Admin).await;

    let response = app
        .request(
            "PATCH",
            "/courses/NOPE",
            Some(json!({ "course_title": "x" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_course_cascades_to_resources() {
    let app = helpers::TestApp::new();
    let token = app.login_as("root@univ.edu", UserRole::Admin).await;
    app.seed_course("CSE110").await;
    app.request(
        "POST",
        "/resources",
        Some(json!({
            "course_code": "CSE110",
            "description": "Lecture 1",
            "type": "video",
            "link": "https://videos.example.com/cse110/1"
        })),
        Some(&token),
    )
    .await;

    let deleted = app
        .request("DELETE", "/courses/CSE110", None, Some(&token))
        .await;
    assert_eq!(deleted.status, StatusCode::OK);

    let gone = app.request("GET", "/courses/CSE110", None, None).await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
    let resources = app.request("GET", "/resources", None, None).await;
    assert_eq!(resources.body, json!([]));

    let again = app
        .request("DELETE", "/courses/CSE110", None, Some(&token))
        .await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_absent_course_is_not_found() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/courses/NOPE", None, None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], "Course not found");
}
