//! User API Tests
//!
//! Covers request decoding and validation behavior. These paths are
//! rejected before the repository runs, so no live database is needed.

use axum::http::StatusCode;

use crate::common::{response_json, TestApp};

/// Malformed JSON body is a 400, not a 422
#[tokio::test]
async fn test_create_user_malformed_body_returns_400() {
    let app = TestApp::new();

    let response = app.post_json("/users", "{not json").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// A body missing required fields is a 400
#[tokio::test]
async fn test_create_user_missing_fields_returns_400() {
    let app = TestApp::new();

    let response = app.post_json("/users", r#"{"name":"John Doe"}"#).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Name below the 2-character bound fails validation before storage
#[tokio::test]
async fn test_create_user_short_name_returns_400() {
    let app = TestApp::new();

    let response = app.post_json("/users", r#"{"name":"J","age":25}"#).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = response_json(response).await;
    let message = json["message"].as_str().expect("message missing");
    assert!(message.contains("name"));
}

/// Age above the 150 bound fails validation before storage
#[tokio::test]
async fn test_create_user_age_out_of_bounds_returns_400() {
    let app = TestApp::new();

    let response = app
        .post_json("/users", r#"{"name":"John Doe","age":200}"#)
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = response_json(response).await;
    let message = json["message"].as_str().expect("message missing");
    assert!(message.contains("age"));
}

/// Non-numeric path ids are rejected as bad requests
#[tokio::test]
async fn test_get_user_invalid_id_returns_400() {
    let app = TestApp::new();

    let response = app.get("/users/abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Update with a malformed body is rejected before the path id is used
#[tokio::test]
async fn test_update_user_malformed_body_returns_400() {
    let app = TestApp::new();

    let response = app.put_json("/users/1", "{not json").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Update validation failures are reported with the violating field
#[tokio::test]
async fn test_update_user_short_name_returns_400() {
    let app = TestApp::new();

    let response = app.put_json("/users/1", r#"{"name":"J","age":25}"#).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = response_json(response).await;
    let message = json["message"].as_str().expect("message missing");
    assert!(message.contains("name"));
}
