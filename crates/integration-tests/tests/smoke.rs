//! Smoke tests for the diagnostic endpoints and request routing.

use axum::http::StatusCode;
use serde_json::{Value, json};

use comanda_integration_tests::{get, send, test_app};

#[tokio::test]
async fn test_health() {
    let app = test_app().await;

    let (status, body) = get(&app.router, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::String("ok".to_owned()));
}

#[tokio::test]
async fn test_sitemap_lists_registered_routes() {
    let app = test_app().await;

    let (status, body) = get(&app.router, "/").await;
    assert_eq!(status, StatusCode::OK);

    let routes = body["routes"].as_array().expect("routes array");
    assert!(!routes.is_empty());

    let paths: Vec<&str> = routes
        .iter()
        .filter_map(|r| r["path"].as_str())
        .collect();
    for expected in ["/users", "/changes", "/orders", "/orderitems", "/fooditems"] {
        assert!(paths.contains(&expected), "sitemap missing {expected}");
    }
}

#[tokio::test]
async fn test_trailing_slash_routes_to_same_handler() {
    let app = test_app().await;

    let (status, _) = send(
        &app.router,
        "POST",
        "/users/",
        Some(json!({
            "name": "Kim",
            "role": "chef",
            "date_of_birth": "1985-09-30",
            "user_name": "kim",
            "password": "pw"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, users) = get(&app.router, "/users/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(users.as_array().expect("users array").len(), 1);

    // Item routes trim too.
    let (status, user) = get(&app.router, "/users/1/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(user["user_name"], "kim");
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = test_app().await;

    let (status, _) = get(&app.router, "/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
