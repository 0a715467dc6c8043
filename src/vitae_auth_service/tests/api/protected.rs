use axum::http::StatusCode;

use crate::helpers::{TestApp, get_random_email};

async fn registered_token(app: &TestApp) -> (i64, String) {
    let email = get_random_email();
    let registered = app.register(&email, "password123").await;
    let id = registered.body["id"].as_i64().unwrap();

    let login = app.login(&email, "password123").await;
    let token = login.body["token"].as_str().unwrap().to_owned();

    (id, token)
}

#[tokio::test]
async fn register_login_then_access_protected_route() {
    let app = TestApp::new();
    let (id, token) = registered_token(&app).await;

    let response = app.get("/user/me", Some(&format!("Bearer {token}"))).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["id"].as_i64(), Some(id));
}

#[tokio::test]
async fn scheme_is_case_insensitive() {
    let app = TestApp::new();
    let (_, token) = registered_token(&app).await;

    let response = app.get("/user/me", Some(&format!("bearer {token}"))).await;

    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn should_return_401_without_authorization_header() {
    let app = TestApp::new();

    let response = app.get("/user/me", None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert!(response.body["error"].is_string());
}

#[tokio::test]
async fn should_return_401_for_malformed_header() {
    let app = TestApp::new();
    let (_, token) = registered_token(&app).await;

    for value in [token.clone(), format!("Basic {token}"), "Bearer ".to_string()] {
        let response = app.get("/user/me", Some(&value)).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "{value:?}");
    }
}

#[tokio::test]
async fn should_return_401_for_altered_token() {
    let app = TestApp::new();
    let (_, token) = registered_token(&app).await;

    let signature_start = token.rfind('.').unwrap() + 1;
    let mut altered = token.into_bytes();
    altered[signature_start] = if altered[signature_start] == b'A' { b'B' } else { b'A' };
    let altered = String::from_utf8(altered).unwrap();

    let response = app
        .get("/user/me", Some(&format!("Bearer {altered}")))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn public_routes_do_not_require_a_token() {
    let app = TestApp::new();

    let health = app.get("/health", None).await;

    assert_eq!(health.status, StatusCode::OK);
    assert_eq!(health.body["status"], "ok");
}
