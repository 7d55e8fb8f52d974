use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Menu section a catalog item belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Coffee,
    Food,
    Dessert,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Coffee => write!(f, "Coffee"),
            Category::Food => write!(f, "Food"),
            Category::Dessert => write!(f, "Dessert"),
        }
    }
}

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

/// Order priority. Display rank: VIP = 0, Regular = 1, Online = 2.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    #[serde(rename = "VIP")]
    Vip,
    Regular,
    Online,
}

impl Priority {
    /// Sort key for display ordering (lower = shown first).
    pub fn rank(self) -> u8 {
        match self {
            Priority::Vip => 0,
            Priority::Regular => 1,
            Priority::Online => 2,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::Vip => write!(f, "VIP"),
            Priority::Regular => write!(f, "Regular"),
            Priority::Online => write!(f, "Online"),
        }
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "vip" => Ok(Priority::Vip),
            "regular" => Ok(Priority::Regular),
            "online" => Ok(Priority::Online),
            other => Err(format!(
                "unknown priority {other:?} (expected VIP | Regular | Online)"
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// OrderStatus
// ---------------------------------------------------------------------------

/// Order lifecycle state. The transition InProgress -> Completed happens
/// exactly once, applied only by [`crate::sync_state`].
///
/// Wire strings ("In Progress" / "Completed") match the original API.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::InProgress => write!(f, "In Progress"),
            OrderStatus::Completed => write!(f, "Completed"),
        }
    }
}

// ---------------------------------------------------------------------------
// MenuItem
// ---------------------------------------------------------------------------

/// Immutable catalog entry. The catalog is fixed at startup and never
/// mutated, so orders may safely denormalize name/prep time at creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: u32,
    pub name: String,
    /// Preparation time in minutes.
    pub prep_time: u32,
    pub category: Category,
    pub image_url: String,
}

impl MenuItem {
    pub fn new<S: Into<String>, U: Into<String>>(
        id: u32,
        name: S,
        prep_time: u32,
        category: Category,
        image_url: U,
    ) -> Self {
        debug_assert!(prep_time > 0, "MenuItem.prep_time must be > 0");
        Self {
            id,
            name: name.into(),
            prep_time,
            category,
            image_url: image_url.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Waiter
// ---------------------------------------------------------------------------

/// Roster entry. `occupied_time`, `current_orders` and `total_orders` are
/// derived fields: they are recomputed by [`crate::sync_state`] from the
/// order ledger and must never be written independently.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Waiter {
    /// Identity key, unique within the roster.
    pub name: String,
    /// Remaining aggregate workload in minutes, decaying as assigned
    /// orders approach completion. Rounded to 2 decimal places.
    pub occupied_time: f64,
    pub current_orders: usize,
    pub total_orders: usize,
}

impl Waiter {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            occupied_time: 0.0,
            current_orders: 0,
            total_orders: 0,
        }
    }
}

// ---------------------------------------------------------------------------
// Order
// ---------------------------------------------------------------------------

/// Ledger entry for a placed order. Never deleted; the only mutation after
/// creation is the one-way status transition applied by the synchronizer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// "ORD-" + 8 uppercase hex characters.
    pub id: String,
    pub item_id: u32,
    /// Denormalized copy of the menu item name at creation time.
    pub item_name: String,
    pub priority: Priority,
    /// Name of the assigned roster waiter.
    pub waiter_name: String,
    /// Minutes, copied from the menu item at creation time so later menu
    /// edits cannot retroactively change placed orders.
    pub prep_time: u32,
    pub status: OrderStatus,
    pub timestamp: DateTime<Utc>,
    /// `timestamp + prep_time` minutes.
    pub estimated_completion: DateTime<Utc>,
}
