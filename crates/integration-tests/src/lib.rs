//! Shared helpers for integration tests.
//!
//! Tests drive the full router in process against a fresh in-memory
//! `SQLite` database, so they need no running server or external
//! infrastructure.

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::missing_panics_doc)] // test helpers panic by design

use std::net::{IpAddr, Ipv4Addr};

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use chrono::{DateTime, Utc};
use http_body_util::BodyExt;
use secrecy::SecretString;
use serde_json::Value;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

use comanda_api::config::ApiConfig;
use comanda_api::state::AppState;
use comanda_api::{App, app, db};

/// A fully wired application over a private in-memory database.
///
/// `router` is the same service `main` serves, trailing-slash trimming
/// included, so tests see production routing behavior.
pub struct TestApp {
    pub router: App,
    pub pool: SqlitePool,
}

/// Build the application against a fresh in-memory database with the
/// schema applied.
pub async fn test_app() -> TestApp {
    // A single connection so every query sees the same in-memory database.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory database");

    db::MIGRATOR
        .run(&pool)
        .await
        .expect("failed to apply migrations");

    let config = ApiConfig {
        database_url: SecretString::from("sqlite::memory:".to_owned()),
        host: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port: 0,
    };

    TestApp {
        router: app(AppState::new(config, pool.clone())),
        pool,
    }
}

/// Send one request and return the status plus the body parsed as JSON.
///
/// Non-JSON bodies come back as a JSON string so assertions stay uniform.
pub async fn send(
    router: &App,
    method: &str,
    path: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(path);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("invalid test request"),
        None => builder.body(Body::empty()).expect("invalid test request"),
    };

    let response = router
        .clone()
        .oneshot(request)
        .await
        .expect("request failed");
    let status = response.status();

    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("failed to read response body")
        .to_bytes();

    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };

    (status, value)
}

/// Shorthand for a body-less GET.
pub async fn get(router: &App, path: &str) -> (StatusCode, Value) {
    send(router, "GET", path, None).await
}

/// Parse the `created_at` / `updated_at` pair off a serialized entity.
#[must_use]
pub fn timestamps(value: &Value) -> (DateTime<Utc>, DateTime<Utc>) {
    let parse = |key: &str| {
        value[key]
            .as_str()
            .expect("timestamp string")
            .parse::<DateTime<Utc>>()
            .expect("RFC 3339 timestamp")
    };
    (parse("created_at"), parse("updated_at"))
}
