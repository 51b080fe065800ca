//! Shared helpers for HTTP-level integration tests.
//!
//! Tests drive the real router (full middleware stack) via
//! `tower::ServiceExt::oneshot`, against the per-test database that
//! `#[sqlx::test]` provisions. No TCP listener is involved.

// Not every test binary uses every helper.
#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::util::ServiceExt;

use workhive_api::auth::jwt::JwtConfig;
use workhive_api::config::ServerConfig;
use workhive_api::router::build_app_router;
use workhive_api::state::AppState;

/// Build a test `ServerConfig` with a fixed JWT secret and safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret-not-for-production".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        },
    }
}

/// Build the full application router with all middleware layers, using
/// the given database pool. Mirrors the construction in `main.rs`.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a request with optional bearer token and optional JSON body.
pub async fn request(
    app: Router,
    method: &str,
    path: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, path: &str) -> Response<Body> {
    request(app, "GET", path, None, None).await
}

pub async fn get_auth(app: Router, path: &str, token: &str) -> Response<Body> {
    request(app, "GET", path, Some(token), None).await
}

pub async fn post_json(app: Router, path: &str, body: serde_json::Value) -> Response<Body> {
    request(app, "POST", path, None, Some(body)).await
}

pub async fn post_json_auth(
    app: Router,
    path: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    request(app, "POST", path, Some(token), Some(body)).await
}

pub async fn put_json_auth(
    app: Router,
    path: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    request(app, "PUT", path, Some(token), Some(body)).await
}

pub async fn patch_json_auth(
    app: Router,
    path: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    request(app, "PATCH", path, Some(token), Some(body)).await
}

pub async fn delete_auth(app: Router, path: &str, token: &str) -> Response<Body> {
    request(app, "DELETE", path, Some(token), None).await
}

/// Collect a response body into parsed JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Auth fixtures
// ---------------------------------------------------------------------------

/// An authenticated test user: ids and tokens straight from `/auth/register`.
pub struct TestUser {
    pub id: i64,
    pub access_token: String,
    pub refresh_token: String,
}

/// Register a user through the real endpoint and return its tokens.
pub async fn register_user(pool: &PgPool, username: &str, role: &str) -> TestUser {
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/auth/register",
        serde_json::json!({
            "name": username,
            "username": username,
            "email": format!("{username}@example.com"),
            "password": "sufficiently-long-password",
            "role": role,
        }),
    )
    .await;
    assert_eq!(
        response.status(),
        StatusCode::CREATED,
        "register fixture failed for {username}"
    );
    let json = body_json(response).await;
    TestUser {
        id: json["user"]["id"].as_i64().unwrap(),
        access_token: json["access_token"].as_str().unwrap().to_string(),
        refresh_token: json["refresh_token"].as_str().unwrap().to_string(),
    }
}

/// Mint an ADMIN bearer token directly (registration refuses the admin
/// role, and RBAC checks only inspect the JWT).
pub fn admin_token() -> String {
    workhive_api::auth::jwt::generate_access_token(999_999, "ADMIN", &test_config().jwt).unwrap()
}

/// Create a project owned by `client` through the API; returns its id.
pub async fn create_project(pool: &PgPool, client: &TestUser, title: &str) -> i64 {
    let app = build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/projects",
        &client.access_token,
        serde_json::json!({
            "title": title,
            "description": "Build the thing described in the brief.",
            "budget": 1500.0,
            "deadline": "2026-12-31T00:00:00Z",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

/// Submit a bid by `freelancer` on `project_id`; returns the bid id.
pub async fn submit_bid(pool: &PgPool, freelancer: &TestUser, project_id: i64, amount: f64) -> i64 {
    let app = build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/bids",
        &freelancer.access_token,
        serde_json::json!({
            "project_id": project_id,
            "amount": amount,
            "duration": 14,
            "cover_letter": "I have shipped three of these before.",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}
