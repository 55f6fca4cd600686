//! Comanda API - restaurant ordering service.
//!
//! Serves the CRUD REST API for users, orders, order line items, the three
//! catalogs, and the append-only change log.
//!
//! # Architecture
//!
//! - Axum web framework
//! - `SQLite` via sqlx (file-backed by default, `DATABASE_URL` to override)
//! - Embedded migrations applied on startup

#![cfg_attr(not(test), forbid(unsafe_code))]

use axum::ServiceExt;
use axum::extract::Request;
use comanda_api::config::ApiConfig;
use comanda_api::state::AppState;
use comanda_api::{app, db};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // A .env file is optional; real deployments set the environment directly.
    let _ = dotenvy::dotenv();

    let config = ApiConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter.
    // Defaults to info level for our crate if RUST_LOG is not set.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "comanda_api=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Initialize database connection pool
    let pool = db::create_pool(&config.database_url)
        .await
        .expect("Failed to create database pool");
    tracing::info!("Database pool created");

    db::MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to apply migrations");

    let addr = config.socket_addr();
    let state = AppState::new(config, pool);

    tracing::info!("api listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    // The app is a wrapped service, not a bare Router, so it needs an
    // explicit make-service conversion.
    let service = ServiceExt::<Request>::into_make_service(app(state));
    axum::serve(listener, service)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
