//! Axum router and all HTTP handlers for cafe-daemon.
//!
//! `build_router` is the single entry point; `main.rs` calls it and
//! attaches middleware layers.  All handlers are `pub(crate)` so the
//! scenario tests in `tests/` can compose the router directly.

use std::{convert::Infallible, sync::Arc};

use axum::{
    extract::State,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{
        sse::{Event, KeepAlive, Sse},
        IntoResponse, Response,
    },
    routing::get,
    Json, Router,
};
use chrono::Utc;
use futures_util::{Stream, StreamExt};
use tokio::sync::broadcast;
use tokio_stream::wrappers::BroadcastStream;
use tracing::{info, warn};

use cafe_core::CafeError;

use crate::{
    api_types::{CreateOrderRequest, CreateOrderResponse, ErrorResponse, HealthResponse},
    state::{AppState, BusMsg},
};

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

/// Build the complete application router wired to the given shared state.
///
/// Middleware layers (CORS, tracing) are **not** applied here; `main.rs`
/// attaches them after this call so tests can use the bare router.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/menu", get(menu))
        .route("/orders", get(list_orders).post(create_order))
        .route("/waiters", get(list_waiters))
        .route("/stream", get(stream))
        .with_state(state)
}

// ---------------------------------------------------------------------------
// GET /health
// ---------------------------------------------------------------------------

pub(crate) async fn health(State(st): State<Arc<AppState>>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            ok: true,
            service: st.build.service,
            version: st.build.version,
        }),
    )
}

// ---------------------------------------------------------------------------
// GET /menu
// ---------------------------------------------------------------------------

pub(crate) async fn menu(State(st): State<Arc<AppState>>) -> impl IntoResponse {
    // The catalog is immutable; no synchronization needed.
    let cafe = st.cafe.read().await;
    (StatusCode::OK, Json(cafe.menu().to_vec()))
}

// ---------------------------------------------------------------------------
// GET /orders
// ---------------------------------------------------------------------------

pub(crate) async fn list_orders(State(st): State<Arc<AppState>>) -> impl IntoResponse {
    // Write lock: listing synchronizes derived state (completions, workload).
    let mut cafe = st.cafe.write().await;
    let orders = cafe.orders_sorted(Utc::now());
    (StatusCode::OK, Json(orders))
}

// ---------------------------------------------------------------------------
// GET /waiters
// ---------------------------------------------------------------------------

pub(crate) async fn list_waiters(State(st): State<Arc<AppState>>) -> impl IntoResponse {
    let mut cafe = st.cafe.write().await;
    let waiters = cafe.waiters(Utc::now());
    (StatusCode::OK, Json(waiters))
}

// ---------------------------------------------------------------------------
// POST /orders
// ---------------------------------------------------------------------------

/// Place an order. 201 with the order + refreshed roster on success,
/// 404 when the item id is not in the catalog.
pub(crate) async fn create_order(
    State(st): State<Arc<AppState>>,
    Json(req): Json<CreateOrderRequest>,
) -> Response {
    let receipt = {
        let mut cafe = st.cafe.write().await;
        cafe.create_order(Utc::now(), req.item_id, req.priority)
    };

    match receipt {
        Ok(receipt) => {
            info!(order_id = %receipt.order.id, waiter = %receipt.order.waiter_name, "orders/create");
            let _ = st.bus.send(BusMsg::OrderPlaced {
                order: receipt.order.clone(),
            });
            (
                StatusCode::CREATED,
                Json(CreateOrderResponse {
                    order: receipt.order,
                    waiters: receipt.waiters,
                }),
            )
                .into_response()
        }
        Err(CafeError::UnknownMenuItem { item_id }) => {
            warn!(item_id, "orders/create: unknown menu item");
            (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: "Menu item not found".to_string(),
                }),
            )
                .into_response()
        }
        Err(err @ CafeError::EmptyRoster) => {
            // Misconfiguration, not a client error. The default roster is
            // never empty, so this path is unreachable in production.
            warn!(error = %err, "orders/create: precondition violation");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: err.to_string(),
                }),
            )
                .into_response()
        }
    }
}

// ---------------------------------------------------------------------------
// GET /stream  (SSE)
// ---------------------------------------------------------------------------

pub(crate) async fn stream(State(st): State<Arc<AppState>>) -> Response {
    let mut headers = HeaderMap::new();
    headers.insert("Cache-Control", HeaderValue::from_static("no-cache"));
    headers.insert("Connection", HeaderValue::from_static("keep-alive"));

    let rx = st.bus.subscribe();
    let events = broadcast_to_sse(rx);

    (headers, Sse::new(events).keep_alive(KeepAlive::new())).into_response()
}

fn broadcast_to_sse(
    rx: broadcast::Receiver<BusMsg>,
) -> impl Stream<Item = Result<Event, Infallible>> {
    BroadcastStream::new(rx).filter_map(|msg| async move {
        match msg {
            Ok(m) => {
                let event_name = match &m {
                    BusMsg::Heartbeat { .. } => "heartbeat",
                    BusMsg::OrderPlaced { .. } => "order",
                };
                let data = serde_json::to_string(&m).ok()?;
                Some(Ok(Event::default().event(event_name).data(data)))
            }
            Err(_) => None, // lagged / closed
        }
    })
}
