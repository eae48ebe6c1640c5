//! # Listener Registry
//!
//! A process-wide collection of weakly-held listener handles plus the
//! dispatch-priority tag each listener was registered under.
//!
//! Handles are non-owning: registering a listener never keeps it alive
//! beyond its natural owner's lifetime. Entries whose target is gone are
//! pruned silently at the start of every dispatch snapshot; callers that
//! want deterministic removal use [`ListenerRegistry::unregister`].

use mart_types::{DynTransactionListener, ListenerCategory, TransactionListener};
use parking_lot::RwLock;
use std::sync::{Arc, Weak};
use tracing::debug;

/// One registered listener: the weak handle and its dispatch category.
struct Entry {
    listener: Weak<dyn TransactionListener>,
    category: ListenerCategory,
}

/// Weak-handle listener registry with per-sweep snapshotting.
pub struct ListenerRegistry {
    /// Registered entries, in registration order.
    entries: RwLock<Vec<Entry>>,
}

impl ListenerRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }

    /// Add a listener under the given dispatch category.
    ///
    /// Never fails. Duplicate registrations are tolerated; each entry fires
    /// independently, so callers should register a listener at most once.
    pub fn register(&self, listener: &DynTransactionListener, category: ListenerCategory) {
        self.entries.write().push(Entry {
            listener: Arc::downgrade(listener),
            category,
        });
        debug!(category = %category, "listener registered");
    }

    /// Remove every entry whose target is the given listener.
    ///
    /// Returns whether anything was removed.
    pub fn unregister(&self, listener: &DynTransactionListener) -> bool {
        let target = Arc::as_ptr(listener) as *const ();
        let mut entries = self.entries.write();
        let before = entries.len();
        entries.retain(|entry| entry.listener.as_ptr() as *const () != target);
        let removed = before - entries.len();
        if removed > 0 {
            debug!(removed, "listener unregistered");
        }
        removed > 0
    }

    /// Take a point-in-time snapshot of the live listeners, sorted into
    /// dispatch order.
    ///
    /// Dead entries are dropped from the registry first. The snapshot is
    /// recomputed fresh on every call, never cached, so a registry mutated
    /// between sweeps is always re-ordered correctly, and a listener
    /// registering or unregistering itself mid-sweep cannot affect the
    /// in-flight sweep.
    ///
    /// The sort is stable: within one category, registration order is kept,
    /// though callers must not rely on it.
    #[must_use]
    pub fn snapshot(&self) -> Vec<(DynTransactionListener, ListenerCategory)> {
        let mut live: Vec<(DynTransactionListener, ListenerCategory)> = {
            let mut entries = self.entries.write();
            entries.retain(|entry| entry.listener.strong_count() > 0);
            entries
                .iter()
                .filter_map(|entry| entry.listener.upgrade().map(|l| (l, entry.category)))
                .collect()
        };
        live.sort_by_key(|(_, category)| category.dispatch_rank());
        live
    }

    /// Number of entries whose target is still alive.
    #[must_use]
    pub fn live_len(&self) -> usize {
        self.entries
            .read()
            .iter()
            .filter(|entry| entry.listener.strong_count() > 0)
            .count()
    }

    /// Whether no live listeners are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live_len() == 0
    }
}

impl Default for ListenerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
