//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET    /                 - Route listing (diagnostic)
//! GET    /health           - Liveness check
//!
//! # Users
//! GET    /users            - List users (password never serialized)
//! POST   /users            - Create user
//! GET    /users/{id}       - Get user
//! PUT    /users/{id}       - Full-replace update
//! DELETE /users/{id}       - Delete user
//!
//! # Audit log (append-only)
//! POST   /changes          - Register a change record
//!
//! # Orders (nest their line items)
//! GET/POST        /orders
//! GET/PUT/DELETE  /orders/{id}
//!
//! # Order line items
//! GET/POST        /orderitems
//! GET/PUT/DELETE  /orderitems/{id}
//!
//! # Catalogs (one generic handler set, three mounts)
//! GET/POST        /fooditems     GET/PUT/DELETE /fooditems/{id}
//! GET/POST        /storeitems    GET/PUT/DELETE /storeitems/{id}
//! GET/POST        /aquaticitems  GET/PUT/DELETE /aquaticitems/{id}
//! ```

pub mod catalog;
pub mod changes;
pub mod order_items;
pub mod orders;
pub mod users;

use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

use comanda_core::ItemKind;

use crate::state::AppState;

/// Mount points of the resources that expose the full CRUD route set
/// (list, create, get, replace, delete). The catalog entries come from the
/// same mapping the catalog routers mount under.
fn crud_resources() -> Vec<&'static str> {
    let mut bases = vec!["/users", "/orders", "/orderitems"];
    bases.extend(ItemKind::ALL.map(catalog::base_path));
    bases
}

/// Build the full application router.
pub fn routes() -> Router<AppState> {
    let mut router = Router::new()
        .route("/", get(sitemap))
        .route("/health", get(health))
        .merge(users::router())
        .merge(changes::router())
        .merge(orders::router())
        .merge(order_items::router());

    for kind in ItemKind::ALL {
        router = router.merge(catalog::router(kind));
    }
    router
}

/// The registered route table, served by the sitemap endpoint. Generated
/// from [`crud_resources`] so the table and the mounted routers share one
/// resource list.
fn route_table() -> Vec<(&'static str, String)> {
    let mut table = vec![
        ("GET", "/".to_owned()),
        ("GET", "/health".to_owned()),
        ("POST", "/changes".to_owned()),
    ];

    for base in crud_resources() {
        table.push(("GET", base.to_owned()));
        table.push(("POST", base.to_owned()));
        for method in ["GET", "PUT", "DELETE"] {
            table.push((method, format!("{base}/{{id}}")));
        }
    }
    table
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// List every registered route as JSON (diagnostic only).
async fn sitemap() -> Json<Value> {
    let routes: Vec<Value> = route_table()
        .into_iter()
        .map(|(method, path)| json!({ "method": method, "path": path }))
        .collect();

    Json(json!({ "routes": routes }))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn test_route_table_is_the_exact_mounted_set() {
        let table = route_table();
        let unique: BTreeSet<(String, String)> = table
            .iter()
            .map(|(method, path)| ((*method).to_owned(), path.clone()))
            .collect();
        assert_eq!(unique.len(), table.len(), "duplicate route rows");

        let mut expected = BTreeSet::new();
        for (method, path) in [("GET", "/"), ("GET", "/health"), ("POST", "/changes")] {
            expected.insert((method.to_owned(), path.to_owned()));
        }
        for base in [
            "/users",
            "/orders",
            "/orderitems",
            "/fooditems",
            "/storeitems",
            "/aquaticitems",
        ] {
            for method in ["GET", "POST"] {
                expected.insert((method.to_owned(), base.to_owned()));
            }
            for method in ["GET", "PUT", "DELETE"] {
                expected.insert((method.to_owned(), format!("{base}/{{id}}")));
            }
        }

        assert_eq!(unique, expected);
    }
}
