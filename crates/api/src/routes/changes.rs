//! Audit log handlers.
//!
//! The change log is append-only: only POST is exposed.

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::post};
use serde_json::json;

use crate::db::ChangeRepository;
use crate::error::AppError;
use crate::models::change::NewChange;
use crate::state::AppState;

/// Build the change log router.
pub fn router() -> Router<AppState> {
    Router::new().route("/changes", post(register_change))
}

/// Append an audit record; the timestamp is server-assigned.
async fn register_change(
    State(state): State<AppState>,
    Json(input): Json<NewChange>,
) -> Result<impl IntoResponse, AppError> {
    ChangeRepository::new(state.pool()).record(&input).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Change registered successfully" })),
    ))
}
