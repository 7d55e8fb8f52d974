//! State synchronizer.
//!
//! Pull-based recomputation of order completion and waiter workload from an
//! explicit timestamp. There are no background timers: callers invoke
//! [`sync_state`] before and after every externally observable operation.
//!
//! # Determinism
//! `sync_state` is a pure function of the ledger, the roster, and `now` —
//! no IO, no clock sampling, no randomness. Calling it twice with the same
//! `now` is a no-op the second time.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::types::{Order, OrderStatus, Waiter};

/// Bring derived state up to date with `now`.
///
/// 1. Every in-progress order whose estimated completion has passed is
///    marked `Completed`. The transition is one-directional: a completed
///    order is never touched again.
/// 2. Every waiter's `total_orders`, `current_orders` and `occupied_time`
///    are recomputed from the (possibly just-updated) ledger:
///    - `total_orders`  = all orders ever assigned to the waiter
///    - `current_orders` = assigned orders still in progress
///    - `occupied_time` = sum of `max(prep_time - elapsed_minutes, 0)`
///      over in-progress orders, rounded to 2 decimal places
pub fn sync_state(orders: &mut [Order], waiters: &mut [Waiter], now: DateTime<Utc>) {
    for order in orders.iter_mut() {
        if order.status == OrderStatus::InProgress && now >= order.estimated_completion {
            order.status = OrderStatus::Completed;
            debug!(order_id = %order.id, waiter = %order.waiter_name, "order completed");
        }
    }

    for waiter in waiters.iter_mut() {
        let mut total = 0usize;
        let mut current = 0usize;
        let mut remaining = 0.0f64;

        for order in orders.iter().filter(|o| o.waiter_name == waiter.name) {
            total += 1;
            if order.status == OrderStatus::InProgress {
                current += 1;
                let elapsed_min = (now - order.timestamp).num_milliseconds() as f64 / 60_000.0;
                remaining += (order.prep_time as f64 - elapsed_min).max(0.0);
            }
        }

        waiter.total_orders = total;
        waiter.current_orders = current;
        waiter.occupied_time = round2(remaining);
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Priority;
    use chrono::{Duration, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
    }

    fn order(id: &str, waiter: &str, prep: u32, placed: DateTime<Utc>) -> Order {
        Order {
            id: id.to_string(),
            item_id: 1,
            item_name: "Espresso".to_string(),
            priority: Priority::Regular,
            waiter_name: waiter.to_string(),
            prep_time: prep,
            status: OrderStatus::InProgress,
            timestamp: placed,
            estimated_completion: placed + Duration::minutes(prep as i64),
        }
    }

    #[test]
    fn no_completion_before_estimated_completion() {
        let mut orders = vec![order("ORD-1", "Amit", 4, t0())];
        let mut waiters = vec![Waiter::new("Amit")];

        sync_state(&mut orders, &mut waiters, t0() + Duration::minutes(3));
        assert_eq!(orders[0].status, OrderStatus::InProgress);
        assert_eq!(waiters[0].current_orders, 1);
        assert_eq!(waiters[0].total_orders, 1);
        // 4 minutes of prep, 3 elapsed -> 1 minute remaining.
        assert_eq!(waiters[0].occupied_time, 1.0);
    }

    #[test]
    fn completes_exactly_at_estimated_completion() {
        let mut orders = vec![order("ORD-1", "Amit", 4, t0())];
        let mut waiters = vec![Waiter::new("Amit")];

        sync_state(&mut orders, &mut waiters, t0() + Duration::minutes(4));
        assert_eq!(orders[0].status, OrderStatus::Completed);
        assert_eq!(waiters[0].current_orders, 0);
        assert_eq!(waiters[0].total_orders, 1);
        assert_eq!(waiters[0].occupied_time, 0.0);
    }

    #[test]
    fn sync_is_idempotent_for_a_fixed_now() {
        let mut orders = vec![
            order("ORD-1", "Amit", 4, t0()),
            order("ORD-2", "Riya", 6, t0() + Duration::minutes(1)),
        ];
        let mut waiters = vec![Waiter::new("Amit"), Waiter::new("Riya")];

        let now = t0() + Duration::minutes(5);
        sync_state(&mut orders, &mut waiters, now);
        let orders_snapshot = orders.to_vec();
        let waiters_snapshot = waiters.to_vec();

        sync_state(&mut orders, &mut waiters, now);
        assert_eq!(orders, orders_snapshot);
        assert_eq!(waiters, waiters_snapshot);
    }

    #[test]
    fn completed_orders_do_not_contribute_workload() {
        let mut orders = vec![
            order("ORD-1", "Amit", 4, t0()),
            order("ORD-2", "Amit", 6, t0()),
        ];
        let mut waiters = vec![Waiter::new("Amit")];

        // 5 minutes in: the 4-minute order is done, 1 minute left on the other.
        sync_state(&mut orders, &mut waiters, t0() + Duration::minutes(5));
        assert_eq!(orders[0].status, OrderStatus::Completed);
        assert_eq!(orders[1].status, OrderStatus::InProgress);
        assert_eq!(waiters[0].total_orders, 2);
        assert_eq!(waiters[0].current_orders, 1);
        assert_eq!(waiters[0].occupied_time, 1.0);
    }

    #[test]
    fn fractional_elapsed_minutes_round_to_two_decimals() {
        let mut orders = vec![order("ORD-1", "Amit", 4, t0())];
        let mut waiters = vec![Waiter::new("Amit")];

        // 90 seconds elapsed -> 2.5 minutes remaining.
        sync_state(&mut orders, &mut waiters, t0() + Duration::seconds(90));
        assert_eq!(waiters[0].occupied_time, 2.5);

        // 100 seconds elapsed -> 4 - 1.666.. = 2.3333.. -> 2.33.
        sync_state(&mut orders, &mut waiters, t0() + Duration::seconds(100));
        assert_eq!(waiters[0].occupied_time, 2.33);
    }

    #[test]
    fn workload_never_goes_negative() {
        let mut orders = vec![order("ORD-1", "Amit", 4, t0())];
        // Force the order to stay in progress past its window by giving it
        // a far-future estimated completion but a short prep time.
        orders[0].estimated_completion = t0() + Duration::hours(10);
        let mut waiters = vec![Waiter::new("Amit")];

        sync_state(&mut orders, &mut waiters, t0() + Duration::minutes(30));
        assert_eq!(orders[0].status, OrderStatus::InProgress);
        assert_eq!(waiters[0].occupied_time, 0.0);
    }
}
