use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use uketsuke_api::config::{AdminCredentials, ServerConfig};
use uketsuke_api::router::build_app_router;
use uketsuke_api::state::AppState;

/// Admin credentials used by the test configuration.
pub const TEST_ADMIN_USER: &str = "admin";
pub const TEST_ADMIN_PASSWORD: &str = "test-password";

/// Build a test `ServerConfig` with safe defaults and admin
/// credentials set.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        admin: Some(AdminCredentials {
            username: TEST_ADMIN_USER.to_string(),
            password: TEST_ADMIN_PASSWORD.to_string(),
        }),
    }
}

/// Build the full application router with all middleware layers, using
/// the given database pool.
///
/// This goes through [`build_app_router`] so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout,
/// tracing, panic recovery) that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with(pool, test_config())
}

/// Like [`build_test_app`] but with a caller-supplied configuration
/// (e.g. admin credentials removed).
pub fn build_test_app_with(pool: PgPool, config: ServerConfig) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Send a GET request with no headers.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a GET request with an `Authorization` header.
pub async fn get_with_auth(app: Router, uri: &str, authorization: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .header("authorization", authorization)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Build an `Authorization: Basic ...` header value.
pub fn basic_auth(username: &str, password: &str) -> String {
    format!("Basic {}", BASE64.encode(format!("{username}:{password}")))
}
