//! Shared helpers for HTTP-level integration tests.
//!
//! Tests drive the router directly through `tower::ServiceExt::oneshot`,
//! so no TCP listener is involved. Each test database comes from
//! `#[sqlx::test]`.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use lingo_api::auth::jwt::{generate_access_token, JwtConfig};
use lingo_api::auth::password::hash_password;
use lingo_api::config::ServerConfig;
use lingo_api::router::build_app_router;
use lingo_api::state::AppState;
use lingo_core::enums::Role;
use lingo_core::types::DbId;
use lingo_db::models::user::User;
use lingo_db::repositories::UserRepo;

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret-do-not-use-in-prod".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// Delegates to the same [`build_app_router`] that `main.rs` uses, so tests
/// exercise the production middleware stack (CORS, request ID, timeout,
/// tracing, panic recovery).
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Insert a user directly and mint an access token for them.
///
/// Returns the created row and a valid Bearer token signed with the test
/// secret. The password is always `"password123"`.
pub async fn seed_user(pool: &PgPool, email: &str, role: Role) -> (User, String) {
    let hash = hash_password("password123").expect("hash");
    let user = UserRepo::create(pool, email, &hash, "Test User", Some(role))
        .await
        .expect("seed user");
    let token =
        generate_access_token(user.id, role, &test_config().jwt).expect("token generation");
    (user, token)
}

/// Shorthand: seed an admin and return their token.
pub async fn admin_token(pool: &PgPool) -> String {
    seed_user(pool, "admin@test.dev", Role::Admin).await.1
}

/// Shorthand: seed a superadmin and return their token.
pub async fn superadmin_token(pool: &PgPool) -> String {
    seed_user(pool, "root@test.dev", Role::Superadmin).await.1
}

/// Send a GET request with a Bearer token.
pub async fn get(app: Router, uri: &str, token: &str) -> Response {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a GET request with no Authorization header.
pub async fn get_unauthed(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST with a JSON body and a Bearer token.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST with a JSON body and no Authorization header.
pub async fn post_json_unauthed(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a PUT with a JSON body and a Bearer token.
pub async fn put_json(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    let request = Request::builder()
        .method("PUT")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a DELETE request with a Bearer token.
pub async fn delete(app: Router, uri: &str, token: &str) -> Response {
    let request = Request::builder()
        .method("DELETE")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Read a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body is JSON")
}
