//! In-process scenario tests for cafe-daemon HTTP endpoints.
//!
//! These tests spin up the Axum router **without** binding a TCP socket.
//! Each test calls `routes::build_router` and drives it via
//! `tower::ServiceExt::oneshot` — no network I/O required.

use std::sync::Arc;

use axum::http::{Request, StatusCode};
use cafe_daemon::{routes, state};
use http_body_util::BodyExt;
use tower::ServiceExt; // oneshot

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Build a fresh in-process router backed by a clean AppState.
fn make_router() -> axum::Router {
    let st = Arc::new(state::AppState::new());
    routes::build_router(st)
}

/// Drive the router with a single request and return (status, body_bytes).
async fn call(router: axum::Router, req: Request<axum::body::Body>) -> (StatusCode, bytes::Bytes) {
    let resp = router.oneshot(req).await.expect("oneshot failed");
    let status = resp.status();
    let body = resp
        .into_body()
        .collect()
        .await
        .expect("body collect failed")
        .to_bytes();
    (status, body)
}

/// Parse body bytes as a `serde_json::Value`.
fn parse_json(b: bytes::Bytes) -> serde_json::Value {
    serde_json::from_slice(&b).expect("body is not valid JSON")
}

fn get(uri: &str) -> Request<axum::body::Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(axum::body::Body::empty())
        .unwrap()
}

fn post_json(uri: &str, body: &str) -> Request<axum::body::Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(axum::body::Body::from(body.to_string()))
        .unwrap()
}

// ---------------------------------------------------------------------------
// GET /health
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_returns_200_ok_true() {
    let (status, body) = call(make_router(), get("/health")).await;
    assert_eq!(status, StatusCode::OK);

    let json = parse_json(body);
    assert_eq!(json["ok"], true);
    assert_eq!(json["service"], "cafe-daemon");
}

// ---------------------------------------------------------------------------
// GET /menu
// ---------------------------------------------------------------------------

#[tokio::test]
async fn menu_returns_20_items_in_fixed_order() {
    let (status, body) = call(make_router(), get("/menu")).await;
    assert_eq!(status, StatusCode::OK);

    let json = parse_json(body);
    let items = json.as_array().expect("menu is an array");
    assert_eq!(items.len(), 20);

    assert_eq!(items[0]["id"], 1);
    assert_eq!(items[0]["name"], "Espresso");
    assert_eq!(items[0]["prepTime"], 4);
    assert_eq!(items[0]["category"], "Coffee");
    assert!(items[0]["imageUrl"].as_str().unwrap().starts_with("https://"));

    assert_eq!(items[19]["name"], "Smoothie");
    assert_eq!(items[19]["category"], "Dessert");
}

// ---------------------------------------------------------------------------
// GET /waiters
// ---------------------------------------------------------------------------

#[tokio::test]
async fn waiters_returns_roster_in_registration_order() {
    let (status, body) = call(make_router(), get("/waiters")).await;
    assert_eq!(status, StatusCode::OK);

    let json = parse_json(body);
    let waiters = json.as_array().expect("waiters is an array");
    let names: Vec<&str> = waiters
        .iter()
        .map(|w| w["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Amit", "Riya", "Karan", "Priya", "Sam"]);

    for w in waiters {
        assert_eq!(w["occupiedTime"], 0.0);
        assert_eq!(w["currentOrders"], 0);
        assert_eq!(w["totalOrders"], 0);
    }
}

// ---------------------------------------------------------------------------
// POST /orders
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_order_returns_201_with_order_and_roster() {
    let (status, body) = call(
        make_router(),
        post_json("/orders", r#"{"itemId": 1, "priority": "Regular"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let json = parse_json(body);
    let order = &json["order"];
    assert_eq!(order["itemId"], 1);
    assert_eq!(order["itemName"], "Espresso");
    assert_eq!(order["prepTime"], 4);
    assert_eq!(order["priority"], "Regular");
    assert_eq!(order["status"], "In Progress");
    assert_eq!(order["waiterName"], "Amit");

    let id = order["id"].as_str().unwrap();
    assert!(id.starts_with("ORD-"), "order id format: {id}");
    assert_eq!(id.len(), 12);

    // Timestamps are RFC 3339 UTC strings.
    assert!(order["timestamp"].as_str().is_some());
    assert!(order["estimatedCompletion"].as_str().is_some());

    // Roster in the response already reflects the new workload.
    let waiters = json["waiters"].as_array().unwrap();
    assert_eq!(waiters.len(), 5);
    let amit = waiters.iter().find(|w| w["name"] == "Amit").unwrap();
    assert_eq!(amit["currentOrders"], 1);
    assert_eq!(amit["totalOrders"], 1);
}

#[tokio::test]
async fn create_order_unknown_item_returns_404() {
    let st = Arc::new(state::AppState::new());

    let (status, body) = call(
        routes::build_router(Arc::clone(&st)),
        post_json("/orders", r#"{"itemId": 999, "priority": "VIP"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(parse_json(body)["error"], "Menu item not found");

    // Ledger untouched: the order list stays empty.
    let (_, body) = call(routes::build_router(Arc::clone(&st)), get("/orders")).await;
    assert_eq!(parse_json(body).as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn create_order_rejects_malformed_priority() {
    let (status, _) = call(
        make_router(),
        post_json("/orders", r#"{"itemId": 1, "priority": "Rush"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

// ---------------------------------------------------------------------------
// Unknown routes return 404
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_route_returns_404() {
    let (status, _) = call(make_router(), get("/does_not_exist")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
