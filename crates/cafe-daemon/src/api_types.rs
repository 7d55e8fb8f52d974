//! Request/response payloads for the café HTTP API.
//!
//! The core types (`MenuItem`, `Order`, `Waiter`) already carry their wire
//! shape (camelCase fields, "In Progress"/"Completed" statuses); this
//! module only adds the daemon-specific envelopes.

use cafe_core::{Order, Waiter};
use serde::{Deserialize, Serialize};

/// GET /health payload.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub service: &'static str,
    pub version: &'static str,
}

/// POST /orders request body.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub item_id: u32,
    pub priority: cafe_core::Priority,
}

/// POST /orders 201 body: the new order plus the refreshed roster.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateOrderResponse {
    pub order: Order,
    pub waiters: Vec<Waiter>,
}

/// Error envelope for client errors (404 unknown menu item).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
