//! Comanda API library.
//!
//! This crate provides the ordering API as a library, allowing it to be
//! tested in process and reused.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::NormalizePath;
use tower_http::trace::TraceLayer;

use state::AppState;

/// The application service: the router behind trailing-slash trimming.
pub type App = NormalizePath<Router>;

/// Build the application service with its middleware stack.
///
/// Cross-origin requests are allowed from anywhere; the API carries no
/// credentials or cookies. `/users/` and `/users` hit the same handler:
/// the trim wrapper must enclose the whole `Router` rather than sit in
/// its layer stack, because routing runs before router-level middleware.
pub fn app(state: AppState) -> App {
    let router = routes::routes()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    NormalizePath::trim_trailing_slash(router)
}
