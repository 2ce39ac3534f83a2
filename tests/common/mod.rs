//! Shared helpers for the integration tests: an app wired to a fresh
//! in-memory database, plus a small request/response harness.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use tower::util::ServiceExt;

use studyflow::{
    config::Config,
    db,
    routes::{self, AppState},
};

fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
        session_ttl_days: 7,
        seed_admin_username: "admin".to_string(),
        seed_admin_password: "admin123".to_string(),
        seed_admin_full_name: "Administrator".to_string(),
        seed_demo_users: true,
    }
}

/// Fresh app over its own in-memory database, migrated and seeded with the
/// default accounts. A single pooled connection keeps the database alive
/// for the whole test.
pub async fn setup() -> (Router, SqlitePool) {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("migrations failed");

    db::users::seed_default_users(&pool, &test_config())
        .await
        .expect("seeding failed");

    let app = routes::router(AppState {
        pool: pool.clone(),
        session_ttl_days: 7,
    });

    (app, pool)
}

/// Drives one request through the router and decodes the JSON response.
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    cookie: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, HeaderMap, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, headers, body)
}

pub async fn get(app: &Router, uri: &str, cookie: Option<&str>) -> (StatusCode, Value) {
    let (status, _, body) = send(app, Method::GET, uri, cookie, None).await;
    (status, body)
}

pub async fn post(
    app: &Router,
    uri: &str,
    cookie: Option<&str>,
    body: Value,
) -> (StatusCode, Value) {
    let (status, _, body) = send(app, Method::POST, uri, cookie, Some(body)).await;
    (status, body)
}

pub async fn put(
    app: &Router,
    uri: &str,
    cookie: Option<&str>,
    body: Value,
) -> (StatusCode, Value) {
    let (status, _, body) = send(app, Method::PUT, uri, cookie, Some(body)).await;
    (status, body)
}

pub async fn delete(app: &Router, uri: &str, cookie: Option<&str>) -> (StatusCode, Value) {
    let (status, _, body) = send(app, Method::DELETE, uri, cookie, None).await;
    (status, body)
}

/// Logs in and returns the session cookie (as a `Cookie:` header value)
/// plus the returned user object.
pub async fn login(app: &Router, username: &str, password: &str) -> (String, Value) {
    let (status, headers, body) = send(
        app,
        Method::POST,
        "/api/login",
        None,
        Some(json!({ "username": username, "password": password })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed: {body}");

    let set_cookie = headers
        .get(header::SET_COOKIE)
        .expect("login did not set a cookie")
        .to_str()
        .unwrap();
    let cookie = set_cookie.split(';').next().unwrap().to_string();

    (cookie, body["user"].clone())
}

/// Creates a subject for the logged-in caller and returns its id.
pub async fn create_subject(app: &Router, cookie: &str, name: &str, color: &str) -> i64 {
    let (status, body) = post(
        app,
        "/api/subjects",
        Some(cookie),
        json!({ "name": name, "color": color }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create subject failed: {body}");
    body["id"].as_i64().unwrap()
}
