use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::{TestApp, get_random_email};

#[tokio::test]
async fn should_return_201_with_account_id() {
    let app = TestApp::new();

    let response = app.register(&get_random_email(), "password123").await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["message"], "Account created successfully");
    assert!(response.body["id"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn should_ignore_profile_fields() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/auth/register",
            &json!({
                "email": get_random_email(),
                "password": "password123",
                "full_name": "Ada Lovelace",
                "headline": "Analyst",
            }),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
}

#[tokio::test]
async fn should_return_409_if_email_already_exists() {
    let app = TestApp::new();
    let email = get_random_email();

    app.register(&email, "password123").await;
    let response = app.register(&email, "another-password").await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["error"], "Account already exists");
}

#[tokio::test]
async fn should_return_400_if_invalid_input() {
    let app = TestApp::new();

    let cases = [
        ("not-an-email", "password123"),
        ("", "password123"),
        ("user@example.com", "short"),
        ("user@example.com", &"x".repeat(33)),
    ];

    for (email, password) in cases {
        let response = app.register(email, password).await;
        assert_eq!(
            response.status,
            StatusCode::BAD_REQUEST,
            "email: {email:?}, password length: {}",
            password.len()
        );
        assert!(response.body["error"].is_string());
    }
}

#[tokio::test]
async fn should_return_400_if_malformed_body() {
    let app = TestApp::new();

    let missing_password = app
        .post_json("/auth/register", &json!({ "email": get_random_email() }))
        .await;
    let not_json = app.post_raw("/auth/register", "email=a".to_string()).await;

    assert_eq!(missing_password.status, StatusCode::BAD_REQUEST);
    assert_eq!(not_json.status, StatusCode::BAD_REQUEST);
}
