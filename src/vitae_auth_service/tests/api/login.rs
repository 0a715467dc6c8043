use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::{TestApp, get_random_email};

#[tokio::test]
async fn should_return_200_with_token() {
    let app = TestApp::new();
    let email = get_random_email();
    app.register(&email, "password123").await;

    let response = app.login(&email, "password123").await;

    assert_eq!(response.status, StatusCode::OK);
    let token = response.body["token"].as_str().unwrap();
    assert_eq!(token.split('.').count(), 3);
}

#[tokio::test]
async fn should_accept_surrounding_whitespace_in_email() {
    let app = TestApp::new();
    let email = get_random_email();
    app.register(&email, "password123").await;

    let response = app.login(&format!("  {email} "), "password123").await;

    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn unknown_email_and_wrong_password_are_indistinguishable() {
    let app = TestApp::new();
    let email = get_random_email();
    app.register(&email, "password123").await;

    let wrong_password = app.login(&email, "password124").await;
    let unknown_email = app.login(&get_random_email(), "password123").await;
    let invalid_email = app.login("not-an-email", "password123").await;

    assert_eq!(wrong_password.status, StatusCode::BAD_REQUEST);
    assert_eq!(wrong_password.status, unknown_email.status);
    assert_eq!(wrong_password.body, unknown_email.body);
    assert_eq!(wrong_password.status, invalid_email.status);
    assert_eq!(wrong_password.body, invalid_email.body);
}

#[tokio::test]
async fn should_not_apply_password_length_rule_on_login() {
    let app = TestApp::new();
    let email = get_random_email();
    app.register(&email, "password123").await;

    let response = app.login(&email, "short").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "Invalid credentials");
}

#[tokio::test]
async fn should_return_400_if_malformed_body() {
    let app = TestApp::new();

    let response = app
        .post_json("/auth/login", &json!({ "password": "password123" }))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
