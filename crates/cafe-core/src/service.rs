//! `CafeService` — the context object owning all mutable café state.
//!
//! Replaces the original backend's module-level collections with an
//! explicit, test-constructible service. Every operation takes `now`
//! so callers control the clock; the service itself never samples time.
//!
//! Order creation either fully succeeds (ledger entry appended, state
//! re-synchronized) or fails before any mutation: the menu lookup and
//! waiter selection both happen before the ledger is touched.

use chrono::{DateTime, Duration, Utc};
use tracing::info;
use uuid::Uuid;

use crate::assign::select_waiter;
use crate::menu::{default_menu, default_roster};
use crate::sync::sync_state;
use crate::types::{MenuItem, Order, OrderStatus, Priority, Waiter};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failures surfaced by [`CafeService`] operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CafeError {
    /// The requested item id is not in the catalog. Client error; the
    /// ledger and roster are left untouched.
    UnknownMenuItem { item_id: u32 },
    /// The roster is empty. The default roster is never empty, so this
    /// indicates misconfiguration, not a runtime condition to retry.
    EmptyRoster,
}

impl std::fmt::Display for CafeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CafeError::UnknownMenuItem { item_id } => {
                write!(f, "menu item {item_id} not found in catalog")
            }
            CafeError::EmptyRoster => {
                write!(f, "waiter roster is empty; cannot assign orders")
            }
        }
    }
}

impl std::error::Error for CafeError {}

// ---------------------------------------------------------------------------
// OrderReceipt
// ---------------------------------------------------------------------------

/// Result of a successful order creation: the new order plus the full
/// roster with workload metrics refreshed to reflect it.
#[derive(Clone, Debug, PartialEq)]
pub struct OrderReceipt {
    pub order: Order,
    pub waiters: Vec<Waiter>,
}

// ---------------------------------------------------------------------------
// CafeService
// ---------------------------------------------------------------------------

/// In-memory café state: immutable catalog, fixed roster, growing order
/// ledger. State is process-lifetime only; there is no persistence.
pub struct CafeService {
    menu: Vec<MenuItem>,
    waiters: Vec<Waiter>,
    orders: Vec<Order>,
}

impl Default for CafeService {
    fn default() -> Self {
        Self::new()
    }
}

impl CafeService {
    /// Service with the standard catalog and roster.
    pub fn new() -> Self {
        Self::with_tables(default_menu(), default_roster())
    }

    /// Service with custom tables (tests use small rosters).
    pub fn with_tables(menu: Vec<MenuItem>, waiters: Vec<Waiter>) -> Self {
        Self {
            menu,
            waiters,
            orders: Vec::new(),
        }
    }

    /// The catalog, in fixed display order.
    pub fn menu(&self) -> &[MenuItem] {
        &self.menu
    }

    /// Number of ledger entries (orders are never deleted).
    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    /// Bring derived state (completions, workload metrics) up to `now`.
    pub fn sync(&mut self, now: DateTime<Utc>) {
        sync_state(&mut self.orders, &mut self.waiters, now);
    }

    /// Synchronized roster snapshot, in registration order.
    pub fn waiters(&mut self, now: DateTime<Utc>) -> Vec<Waiter> {
        self.sync(now);
        self.waiters.clone()
    }

    /// Synchronized order view, sorted by (priority rank, placement time).
    ///
    /// The sort is stable and operates on a copy; ledger order (insertion
    /// order) is preserved internally.
    pub fn orders_sorted(&mut self, now: DateTime<Utc>) -> Vec<Order> {
        self.sync(now);
        let mut view = self.orders.clone();
        view.sort_by(|a, b| {
            a.priority
                .rank()
                .cmp(&b.priority.rank())
                .then_with(|| a.timestamp.cmp(&b.timestamp))
        });
        view
    }

    /// Place an order for `item_id` at `priority`.
    ///
    /// Synchronizes, resolves the item, selects the least-busy waiter,
    /// appends the new ledger entry, then re-synchronizes so the returned
    /// roster already reflects the increased workload.
    pub fn create_order(
        &mut self,
        now: DateTime<Utc>,
        item_id: u32,
        priority: Priority,
    ) -> Result<OrderReceipt, CafeError> {
        self.sync(now);

        let item = self
            .menu
            .iter()
            .find(|m| m.id == item_id)
            .cloned()
            .ok_or(CafeError::UnknownMenuItem { item_id })?;

        let waiter_name = select_waiter(&self.waiters)
            .ok_or(CafeError::EmptyRoster)?
            .name
            .clone();

        let order = Order {
            id: new_order_id(),
            item_id: item.id,
            item_name: item.name.clone(),
            priority,
            waiter_name,
            prep_time: item.prep_time,
            status: OrderStatus::InProgress,
            timestamp: now,
            estimated_completion: now + Duration::minutes(item.prep_time as i64),
        };

        info!(
            order_id = %order.id,
            item = %order.item_name,
            priority = %order.priority,
            waiter = %order.waiter_name,
            "order placed"
        );

        self.orders.push(order.clone());
        self.sync(now);

        Ok(OrderReceipt {
            order,
            waiters: self.waiters.clone(),
        })
    }
}

/// `ORD-` + first 8 hex characters of a v4 uuid, uppercased.
///
/// Uniqueness is probabilistic (32 bits of entropy); collisions are out of
/// scope, matching the original service.
fn new_order_id() -> String {
    let hex = Uuid::new_v4().simple().to_string();
    format!("ORD-{}", hex[..8].to_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_ids_have_the_expected_shape() {
        let id = new_order_id();
        assert_eq!(id.len(), 12);
        assert!(id.starts_with("ORD-"));
        assert!(id[4..]
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()));
    }
}
