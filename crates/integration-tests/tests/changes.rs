//! Integration tests for the append-only change log.

use axum::http::StatusCode;
use serde_json::json;

use comanda_integration_tests::{send, test_app};

#[tokio::test]
async fn test_register_change_stamps_the_server_time() {
    let app = test_app().await;

    let (status, body) = send(
        &app.router,
        "POST",
        "/changes",
        Some(json!({
            "user_name": "alice",
            "change_type": "order.created",
            "change_data": "{\"order_id\": 1}"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Change registered successfully");

    // The change log has no read endpoint; inspect the table directly.
    let (timestamp, change_type, change_data): (String, String, String) =
        sqlx::query_as("SELECT timestamp, change_type, change_data FROM changes")
            .fetch_one(&app.pool)
            .await
            .expect("change row");

    assert!(!timestamp.is_empty(), "timestamp is server-assigned");
    assert_eq!(change_type, "order.created");
    assert_eq!(change_data, "{\"order_id\": 1}");
}

#[tokio::test]
async fn test_change_log_exposes_no_other_operations() {
    let app = test_app().await;

    let (status, _) = send(&app.router, "GET", "/changes", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

    let (status, _) = send(&app.router, "DELETE", "/changes/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_change_with_missing_field_is_rejected() {
    let app = test_app().await;

    let (status, _) = send(
        &app.router,
        "POST",
        "/changes",
        Some(json!({ "user_name": "alice" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM changes")
        .fetch_one(&app.pool)
        .await
        .expect("count");
    assert_eq!(count.0, 0);
}
