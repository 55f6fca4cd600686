//! Integration tests for the three catalog resources.

use axum::http::StatusCode;
use serde_json::json;

use comanda_integration_tests::{get, send, test_app, timestamps};

#[tokio::test]
async fn test_food_item_round_trip() {
    let app = test_app().await;

    let (status, body) = send(
        &app.router,
        "POST",
        "/fooditems",
        Some(json!({ "name": "Burger", "price": 9.5, "quantity": 20, "status": "available" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Food item created successfully");

    let (status, items) = get(&app.router, "/fooditems").await;
    assert_eq!(status, StatusCode::OK);
    let items = items.as_array().expect("array of food items");
    assert_eq!(items.len(), 1);

    let item = &items[0];
    assert_eq!(item["name"], "Burger");
    assert_eq!(item["price"], 9.5);
    assert_eq!(item["quantity"], 20);
    assert_eq!(item["status"], "available");
    assert!(item["created_at"].is_string());
    assert!(item["updated_at"].is_string());
}

#[tokio::test]
async fn test_food_item_requires_status() {
    let app = test_app().await;

    let (status, body) = send(
        &app.router,
        "POST",
        "/fooditems",
        Some(json!({ "name": "Soup", "price": 4.0, "quantity": 10 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().expect("error body").contains("status"));
}

#[tokio::test]
async fn test_store_item_crud_without_status() {
    let app = test_app().await;

    let (status, _) = send(
        &app.router,
        "POST",
        "/storeitems",
        Some(json!({ "name": "T-Shirt", "price": 15.0, "quantity": 5 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, items) = get(&app.router, "/storeitems").await;
    let item = &items.as_array().expect("array")[0];
    assert_eq!(item["name"], "T-Shirt");
    assert!(
        item.get("status").is_none(),
        "store items have no status field"
    );
    let id = item["id"].as_i64().expect("numeric id");

    let (status, _) = send(
        &app.router,
        "PUT",
        &format!("/storeitems/{id}"),
        Some(json!({ "name": "T-Shirt XL", "price": 17.0, "quantity": 3 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, item) = get(&app.router, &format!("/storeitems/{id}")).await;
    assert_eq!(item["name"], "T-Shirt XL");
    assert_eq!(item["price"], 17.0);
    assert_eq!(item["quantity"], 3);

    let (status, body) = send(&app.router, "DELETE", &format!("/storeitems/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Store item deleted successfully");

    let (status, _) = get(&app.router, &format!("/storeitems/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_food_item_update_refreshes_updated_at() {
    let app = test_app().await;

    send(
        &app.router,
        "POST",
        "/fooditems",
        Some(json!({ "name": "Burger", "price": 9.5, "quantity": 20, "status": "available" })),
    )
    .await;

    let (_, items) = get(&app.router, "/fooditems").await;
    let item = &items.as_array().expect("array")[0];
    let id = item["id"].as_i64().expect("numeric id");
    let (created_before, updated_before) = timestamps(item);

    let (status, _) = send(
        &app.router,
        "PUT",
        &format!("/fooditems/{id}"),
        Some(json!({ "name": "Burger", "price": 10.0, "quantity": 18, "status": "sold_out" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, item) = get(&app.router, &format!("/fooditems/{id}")).await;
    assert_eq!(item["status"], "sold_out");
    let (created_after, updated_after) = timestamps(&item);
    assert_eq!(created_after, created_before, "created_at must not move");
    assert!(
        updated_after > updated_before,
        "updated_at must advance on update: {updated_before} -> {updated_after}"
    );
}

#[tokio::test]
async fn test_aquatic_item_round_trip() {
    let app = test_app().await;

    let (status, body) = send(
        &app.router,
        "POST",
        "/aquaticitems",
        Some(json!({ "name": "Clownfish", "price": 24.0, "quantity": 3 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Aquatic item created successfully");

    let (_, items) = get(&app.router, "/aquaticitems").await;
    let item = &items.as_array().expect("array")[0];
    assert_eq!(item["name"], "Clownfish");
    assert_eq!(item["price"], 24.0);
    assert_eq!(item["quantity"], 3);
}

#[tokio::test]
async fn test_catalogs_are_separate_tables() {
    let app = test_app().await;

    send(
        &app.router,
        "POST",
        "/fooditems",
        Some(json!({ "name": "Burger", "price": 9.5, "quantity": 20, "status": "available" })),
    )
    .await;

    let (_, store_items) = get(&app.router, "/storeitems").await;
    assert_eq!(store_items.as_array().expect("array").len(), 0);

    let (_, aquatic_items) = get(&app.router, "/aquaticitems").await;
    assert_eq!(aquatic_items.as_array().expect("array").len(), 0);
}

#[tokio::test]
async fn test_missing_catalog_item_answers_404() {
    let app = test_app().await;

    let (status, _) = get(&app.router, "/fooditems/99999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app.router, "DELETE", "/aquaticitems/99999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app.router,
        "PUT",
        "/storeitems/99999",
        Some(json!({ "name": "x", "price": 1.0, "quantity": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
