use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use fake::{Fake, faker::internet::en::SafeEmail};
use secrecy::Secret;
use serde_json::Value;
use tower::ServiceExt;
use vitae_adapters::{Argon2Codec, HashMapIdentityStore, JwtConfig, JwtTokenCodec};
use vitae_auth_service::AuthService;

pub const JWT_SECRET: &str = "integration-test-secret";

pub struct TestApp {
    pub router: Router,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestApp {
    pub fn new() -> Self {
        let identity_store = HashMapIdentityStore::new();
        // Cheap work factor keeps the suite fast
        let codec = Argon2Codec::new(64, 1, 1).unwrap();
        let token_codec = JwtTokenCodec::new(JwtConfig::new(Secret::from(JWT_SECRET.to_owned())));

        let router = AuthService::new(identity_store, codec, token_codec).as_router(&[]);

        Self { router }
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        TestResponse { status, body }
    }

    pub async fn post_json(&self, uri: &str, body: &Value) -> TestResponse {
        self.post_raw(uri, body.to_string()).await
    }

    pub async fn post_raw(&self, uri: &str, body: String) -> TestResponse {
        let request = Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap();
        self.send(request).await
    }

    pub async fn register(&self, email: &str, password: &str) -> TestResponse {
        self.post_json(
            "/auth/register",
            &serde_json::json!({ "email": email, "password": password }),
        )
        .await
    }

    pub async fn login(&self, email: &str, password: &str) -> TestResponse {
        self.post_json(
            "/auth/login",
            &serde_json::json!({ "email": email, "password": password }),
        )
        .await
    }

    pub async fn get(&self, uri: &str, authorization: Option<&str>) -> TestResponse {
        let mut request = Request::get(uri);
        if let Some(value) = authorization {
            request = request.header(header::AUTHORIZATION, value);
        }
        self.send(request.body(Body::empty()).unwrap()).await
    }
}

pub fn get_random_email() -> String {
    SafeEmail().fake()
}
