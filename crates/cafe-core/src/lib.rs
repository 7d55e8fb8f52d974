//! cafe-core
//!
//! Transport-agnostic core of the BrewBytes café order system:
//! - Fixed menu catalog and waiter roster
//! - Order ledger with a one-way InProgress -> Completed lifecycle
//! - Pull-based state synchronization driven by an explicit `now`
//! - Least-busy waiter assignment with deterministic tie-breaking
//!
//! The core is deterministic and does no IO: every operation that depends
//! on time takes `now: DateTime<Utc>` as a parameter, so callers (and
//! tests) control the clock. The HTTP daemon samples `Utc::now()` once per
//! request and passes it down.

mod assign;
mod menu;
mod service;
mod sync;
mod types;

pub use assign::select_waiter;
pub use menu::{default_menu, default_roster};
pub use service::{CafeError, CafeService, OrderReceipt};
pub use sync::sync_state;
pub use types::{Category, MenuItem, Order, OrderStatus, Priority, Waiter};
