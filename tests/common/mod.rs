#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use keygate::router::init_router;
use keygate::state::AppState;
use keygate_config::{CorsConfig, JwtConfig, SecurityConfig};
use keygate_core::{Role, hash_password};
use keygate_store::{UserRecord, UserStore};

/// bcrypt minimum cost keeps the hashing-heavy tests fast.
pub const TEST_BCRYPT_COST: u32 = 4;

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "integration-test-secret-key-0123456789".to_string(),
        access_token_expiry: 1800,
        refresh_token_expiry: 604_800,
    }
}

/// Fresh state per test: an empty directory, a fixed test secret, minimum
/// hashing cost. No global store means no cross-test bleed.
pub fn test_state() -> AppState {
    AppState {
        users: Arc::new(UserStore::new()),
        jwt_config: test_jwt_config(),
        security_config: SecurityConfig {
            bcrypt_cost: TEST_BCRYPT_COST,
        },
        cors_config: CorsConfig {
            allowed_origins: vec![],
        },
    }
}

pub fn setup_test_app(state: &AppState) -> Router {
    init_router(state.clone())
}

pub fn seed_user(state: &AppState, username: &str, password: &str, role: Role, disabled: bool) {
    let password_hash = hash_password(password, TEST_BCRYPT_COST).unwrap();
    state
        .users
        .insert(UserRecord {
            username: username.to_string(),
            name: format!("{username} Test"),
            email: format!("{username}@example.com"),
            role,
            disabled,
            password_hash,
        })
        .unwrap();
}

/// Form-encoded login request.
pub fn login_request(username: &str, password: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/login")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(format!(
            "username={username}&password={password}"
        )))
        .unwrap()
}

/// JSON request with an optional bearer token.
pub fn json_request(method: &str, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

/// Bodyless GET with an optional bearer token.
pub fn get_request(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Logs in through the router and returns the token pair JSON. Panics if
/// login does not succeed.
pub async fn login(app: &Router, username: &str, password: &str) -> Value {
    let response = app
        .clone()
        .oneshot(login_request(username, password))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}
