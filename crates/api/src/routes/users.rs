//! User resource handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde_json::json;

use comanda_core::UserId;

use crate::db::UserRepository;
use crate::error::AppError;
use crate::models::user::{NewUser, User};
use crate::state::AppState;

/// Build the user routes router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
}

/// List all users. The password is never part of the serialized form.
async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    let users = UserRepository::new(state.pool()).list().await?;
    Ok(Json(users))
}

/// Get a single user by id.
async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
) -> Result<Json<User>, AppError> {
    let user = UserRepository::new(state.pool())
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("user {id}")))?;

    Ok(Json(user))
}

/// Create a user. A duplicate `user_name` answers 409.
async fn create_user(
    State(state): State<AppState>,
    Json(input): Json<NewUser>,
) -> Result<impl IntoResponse, AppError> {
    UserRepository::new(state.pool()).create(&input).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "User created successfully" })),
    ))
}

/// Full-replace update: every mutable field must be supplied.
async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
    Json(input): Json<NewUser>,
) -> Result<impl IntoResponse, AppError> {
    UserRepository::new(state.pool()).update(id, &input).await?;

    Ok(Json(json!({ "message": "User updated successfully" })))
}

/// Physically delete a user.
async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
) -> Result<impl IntoResponse, AppError> {
    UserRepository::new(state.pool()).delete(id).await?;

    Ok(Json(json!({ "message": "User deleted successfully" })))
}
