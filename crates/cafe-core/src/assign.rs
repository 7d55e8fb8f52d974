//! Waiter assignment policy.
//!
//! Selects the least-busy waiter for a new order. Callers must synchronize
//! first so the workload metrics reflect the current time; the selection
//! itself is a pure read with no reservation side effect — assignment is
//! realized by creating the order that references the chosen waiter.

use crate::types::Waiter;

/// Pick the waiter minimizing `(occupied_time, current_orders, name)`.
///
/// The name is part of the key so equal-workload waiters resolve the same
/// way on every call. Returns `None` only for an empty roster, which the
/// service treats as a fatal misconfiguration rather than a recoverable
/// error.
pub fn select_waiter(waiters: &[Waiter]) -> Option<&Waiter> {
    waiters.iter().min_by(|a, b| {
        a.occupied_time
            .total_cmp(&b.occupied_time)
            .then_with(|| a.current_orders.cmp(&b.current_orders))
            .then_with(|| a.name.cmp(&b.name))
    })
}
