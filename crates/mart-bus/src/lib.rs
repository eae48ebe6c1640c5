//! # Mart Bus - Ordered Transaction Broadcaster
//!
//! Coordinates a process-wide "transaction in progress" flag and notifies a
//! dynamically registered set of listeners, in a fixed priority order, when
//! a logical edit episode starts and ends.
//!
//! ## Broadcast Shape
//!
//! ```text
//! ┌──────────────┐  begin/end   ┌─────────────────────────┐
//! │ Dialog/Panel │ ───────────▶ │ TransactionCoordinator  │
//! └──────────────┘              │  depth, current episode │
//!                               └───────────┬─────────────┘
//!                                           │ sweep, category order
//!                        ┌──────────────────┼──────────────────┐
//!                        ▼                  ▼                  ▼
//!                 schema listeners   dataset listeners   diagram listeners
//! ```
//!
//! ## Guarantees
//!
//! - **Collapsed nesting:** only the outermost begin/end pair is observable;
//!   both sweeps carry the same [`Transaction`] value.
//! - **Fixed dispatch order:** the ten [`ListenerCategory`] values, in
//!   declaration order, recomputed fresh on every sweep.
//! - **Best-effort commit delivery:** a failing `transaction_ended` is
//!   reported once via the [`ErrorReporter`] and never stops the sweep.
//! - **Weak registration:** the registry never keeps a listener alive; dead
//!   handles are pruned silently.

// Nursery lints that are too strict
#![allow(clippy::missing_const_for_fn)]
// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
#![cfg_attr(test, allow(clippy::panic))]

pub mod coordinator;
pub mod registry;
pub mod reporter;

// Re-export main types
pub use coordinator::TransactionCoordinator;
pub use registry::ListenerRegistry;
pub use reporter::{ErrorReporter, TracingReporter};

// Re-export the contract so consumers depend on one crate.
pub use mart_types::{
    DynTransactionListener, ListenerCategory, ModifiedFlags, NotificationError, Transaction,
    TransactionListener,
};

/// Number of dispatch-priority categories.
pub const DISPATCH_CATEGORY_COUNT: usize = ListenerCategory::ALL.len();
