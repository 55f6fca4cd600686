//! Integration tests for the user resource.

use axum::http::StatusCode;
use serde_json::json;

use comanda_integration_tests::{get, send, test_app};

fn alice() -> serde_json::Value {
    json!({
        "name": "Alice",
        "role": "waiter",
        "date_of_birth": "1990-04-12",
        "user_name": "alice",
        "password": "hunter2"
    })
}

#[tokio::test]
async fn test_create_then_get_round_trips_without_password() {
    let app = test_app().await;

    let (status, body) = send(&app.router, "POST", "/users", Some(alice())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "User created successfully");

    let (status, users) = get(&app.router, "/users").await;
    assert_eq!(status, StatusCode::OK);
    let users = users.as_array().expect("array of users");
    assert_eq!(users.len(), 1);

    let user = &users[0];
    assert_eq!(user["name"], "Alice");
    assert_eq!(user["role"], "waiter");
    assert_eq!(user["date_of_birth"], "1990-04-12");
    assert_eq!(user["user_name"], "alice");
    assert!(user.get("password").is_none(), "password must never serialize");

    let id = user["id"].as_i64().expect("numeric id");
    let (status, fetched) = get(&app.router, &format!("/users/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["user_name"], "alice");
    assert!(fetched.get("password").is_none());
}

#[tokio::test]
async fn test_duplicate_user_name_is_rejected() {
    let app = test_app().await;

    let (status, _) = send(&app.router, "POST", "/users", Some(alice())).await;
    assert_eq!(status, StatusCode::CREATED);

    let mut clone = alice();
    clone["name"] = json!("Other Alice");
    let (status, body) = send(&app.router, "POST", "/users", Some(clone)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].as_str().expect("error body").contains("user_name"));
}

#[tokio::test]
async fn test_put_fully_overwrites() {
    let app = test_app().await;

    send(&app.router, "POST", "/users", Some(alice())).await;
    let (_, users) = get(&app.router, "/users").await;
    let id = users[0]["id"].as_i64().expect("numeric id");

    let replacement = json!({
        "name": "Alice B.",
        "role": "manager",
        "date_of_birth": "1990-04-13",
        "user_name": "aliceb",
        "password": "correct-horse"
    });
    let (status, body) = send(
        &app.router,
        "PUT",
        &format!("/users/{id}"),
        Some(replacement),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "User updated successfully");

    let (_, fetched) = get(&app.router, &format!("/users/{id}")).await;
    assert_eq!(fetched["name"], "Alice B.");
    assert_eq!(fetched["role"], "manager");
    assert_eq!(fetched["date_of_birth"], "1990-04-13");
    assert_eq!(fetched["user_name"], "aliceb");
}

#[tokio::test]
async fn test_put_with_missing_field_is_rejected() {
    let app = test_app().await;

    send(&app.router, "POST", "/users", Some(alice())).await;
    let (_, users) = get(&app.router, "/users").await;
    let id = users[0]["id"].as_i64().expect("numeric id");

    // Full-replace semantics: omitting a mutable field is an error, not
    // "leave unchanged".
    let partial = json!({ "name": "Only A Name" });
    let (status, _) = send(&app.router, "PUT", &format!("/users/{id}"), Some(partial)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (_, fetched) = get(&app.router, &format!("/users/{id}")).await;
    assert_eq!(fetched["name"], "Alice");
}

#[tokio::test]
async fn test_delete_removes_the_row() {
    let app = test_app().await;

    send(&app.router, "POST", "/users", Some(alice())).await;
    let (_, users) = get(&app.router, "/users").await;
    let id = users[0]["id"].as_i64().expect("numeric id");

    let (status, body) = send(&app.router, "DELETE", &format!("/users/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "User deleted successfully");

    let (status, _) = get(&app.router, &format!("/users/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, users) = get(&app.router, "/users").await;
    assert_eq!(users.as_array().expect("array").len(), 0);
}

#[tokio::test]
async fn test_missing_user_answers_404() {
    let app = test_app().await;

    let (status, body) = get(&app.router, "/users/99999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().expect("error body").contains("99999"));

    let (status, _) = send(&app.router, "PUT", "/users/99999", Some(alice())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app.router, "DELETE", "/users/99999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
