//! # Transaction Coordinator
//!
//! Serializes "begin batch of changes" / "end batch of changes" signals and
//! fans them out to every registered listener in dispatch-priority order.
//!
//! Nested begin/end pairs collapse into the single outer episode: only the
//! 0→1 and 1→0 nesting transitions are observable, and both sweeps carry
//! the same [`Transaction`] value.
//!
//! The nesting counter and the current transaction live under one mutex so
//! concurrent begin/end bookkeeping serializes correctly. Listener callbacks
//! run on the calling thread after the lock is released: sweeps are
//! synchronous, never hand off to another thread, and always run through the
//! full listener list.

use crate::registry::ListenerRegistry;
use crate::reporter::{ErrorReporter, TracingReporter};
use mart_types::{DynTransactionListener, ListenerCategory, Transaction};
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::debug;

/// Nesting state guarded by the coordinator's mutex.
struct TxnState {
    /// Number of currently-open (possibly nested) transactions.
    depth: u32,
    /// The in-flight episode value, set on 0→1 and cleared on 1→0.
    current: Option<Arc<Transaction>>,
}

/// The transaction broadcaster.
///
/// One instance per application, owned by the root context and shared by
/// `Arc` with every collaborator that begins/ends transactions or registers
/// as a listener.
pub struct TransactionCoordinator {
    /// Registered listeners, weakly held.
    registry: ListenerRegistry,

    /// Nesting counter and current episode.
    state: Mutex<TxnState>,

    /// Where transaction-ended failures are surfaced.
    reporter: Arc<dyn ErrorReporter>,
}

impl TransactionCoordinator {
    /// Create a coordinator that reports listener failures via `tracing`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_reporter(Arc::new(TracingReporter))
    }

    /// Create a coordinator with a custom error reporter.
    #[must_use]
    pub fn with_reporter(reporter: Arc<dyn ErrorReporter>) -> Self {
        Self {
            registry: ListenerRegistry::new(),
            state: Mutex::new(TxnState {
                depth: 0,
                current: None,
            }),
            reporter,
        }
    }

    /// Register a listener under the given dispatch category.
    ///
    /// The handle is held weakly; dropping the listener's last `Arc`
    /// removes it from future sweeps. Registering the same listener twice
    /// makes it fire twice.
    pub fn register_listener(
        &self,
        listener: &DynTransactionListener,
        category: ListenerCategory,
    ) {
        self.registry.register(listener, category);
    }

    /// Deterministically remove a listener from future sweeps.
    ///
    /// Returns whether anything was removed.
    pub fn unregister_listener(&self, listener: &DynTransactionListener) -> bool {
        self.registry.unregister(listener)
    }

    /// Open a (possibly nested) transaction.
    ///
    /// On the 0→1 transition this creates the episode value carrying
    /// `allow_visible_mod_change` and notifies every live listener in
    /// dispatch order: first `reset_direct_modified`, then
    /// `transaction_started`. Nested calls only bump the counter; their
    /// flag argument is discarded.
    pub fn begin_transaction(&self, allow_visible_mod_change: bool) {
        let opened = {
            let mut state = self.state.lock();
            state.depth += 1;
            if state.depth == 1 {
                let txn = Arc::new(Transaction::new(allow_visible_mod_change));
                state.current = Some(Arc::clone(&txn));
                Some(txn)
            } else {
                None
            }
        };

        let Some(txn) = opened else {
            return;
        };

        let listeners = self.registry.snapshot();
        debug!(
            txn_id = %txn.id(),
            allow_visible = txn.allows_visible_mod_change(),
            listeners = listeners.len(),
            "transaction opened"
        );
        for (listener, _category) in listeners {
            // Opening an episode resets direct modification only; visible
            // highlighting is cleared solely by explicit reset sweeps.
            listener.reset_direct_modified();
            listener.transaction_started(&txn);
        }
    }

    /// Close a transaction.
    ///
    /// A no-op when no transaction is open. On the 1→0 transition the
    /// episode value is taken and every live listener receives
    /// `transaction_ended` in dispatch order; each failure is forwarded to
    /// the error reporter once and the sweep continues through the full
    /// list.
    pub fn end_transaction(&self) {
        let closed = {
            let mut state = self.state.lock();
            if state.depth == 0 {
                return;
            }
            state.depth -= 1;
            if state.depth == 0 {
                state.current.take()
            } else {
                None
            }
        };

        let Some(txn) = closed else {
            return;
        };

        let listeners = self.registry.snapshot();
        debug!(
            txn_id = %txn.id(),
            listeners = listeners.len(),
            "transaction closed"
        );
        for (listener, category) in listeners {
            if let Err(err) = listener.transaction_ended(&txn) {
                self.reporter.report(category, &err);
            }
        }
    }

    /// Clear the direct-modified flag on every live listener, in dispatch
    /// order, regardless of nesting state.
    pub fn reset_direct_modified(&self) {
        for (listener, _category) in self.registry.snapshot() {
            listener.reset_direct_modified();
        }
    }

    /// Clear the visible-modified flag on every live listener, in dispatch
    /// order, regardless of nesting state.
    pub fn reset_visible_modified(&self) {
        for (listener, _category) in self.registry.snapshot() {
            listener.reset_visible_modified();
        }
    }

    /// The in-flight episode, or `None` when idle.
    #[must_use]
    pub fn current_transaction(&self) -> Option<Arc<Transaction>> {
        self.state.lock().current.clone()
    }

    /// Whether a transaction is currently open.
    #[must_use]
    pub fn in_transaction(&self) -> bool {
        self.state.lock().depth > 0
    }

    /// Current nesting depth.
    #[must_use]
    pub fn depth(&self) -> u32 {
        self.state.lock().depth
    }

    /// Number of live registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.registry.live_len()
    }
}

impl Default for TransactionCoordinator {
    fn default() -> Self {
        Self::new()
    }
}
