//! # Transaction Listener Contract
//!
//! Defines the capability trait every coordinated object implements to take
//! part in transaction broadcasts, plus [`ModifiedFlags`], an embeddable
//! flag pair that makes the four modified-state operations one-liners.
//!
//! ## Modified-state model
//!
//! Every listener tracks two flags:
//!
//! - **direct modified**: the object itself was changed during the current
//!   episode. Reset by the broadcaster at the start of every episode.
//! - **visible modified**: the object should be highlighted as changed in
//!   the UI. Only reset through an explicit [`reset_visible_modified`]
//!   sweep, never as part of opening an episode.
//!
//! [`reset_visible_modified`]: TransactionListener::reset_visible_modified
//!
//! ## Example Implementation
//!
//! ```rust
//! use mart_types::{ModifiedFlags, NotificationError, Transaction, TransactionListener};
//!
//! struct SchemaPanel {
//!     flags: ModifiedFlags,
//! }
//!
//! impl TransactionListener for SchemaPanel {
//!     fn set_direct_modified(&self, modified: bool) {
//!         self.flags.set_direct(modified);
//!     }
//!     fn is_direct_modified(&self) -> bool {
//!         self.flags.is_direct()
//!     }
//!     fn set_visible_modified(&self, modified: bool) {
//!         self.flags.set_visible(modified);
//!     }
//!     fn is_visible_modified(&self) -> bool {
//!         self.flags.is_visible()
//!     }
//!     fn transaction_started(&self, _txn: &Transaction) {}
//!     fn transaction_ended(&self, _txn: &Transaction) -> Result<(), NotificationError> {
//!         Ok(())
//!     }
//! }
//! ```

use crate::errors::NotificationError;
use crate::transaction::Transaction;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// The capability contract for objects coordinated by the broadcaster.
///
/// All hooks take `&self`: listeners are shared across the registry and the
/// owning view, so mutable state lives behind interior mutability (see
/// [`ModifiedFlags`]).
pub trait TransactionListener: Send + Sync {
    /// Mark or clear the direct-modified flag.
    fn set_direct_modified(&self, modified: bool);

    /// Whether this object was changed during the current episode.
    fn is_direct_modified(&self) -> bool;

    /// Mark or clear the visible-modified (highlight) flag.
    fn set_visible_modified(&self, modified: bool);

    /// Whether this object is highlighted as changed.
    fn is_visible_modified(&self) -> bool;

    /// Clear the direct-modified flag.
    ///
    /// Invoked by the broadcaster on every listener immediately before
    /// `transaction_started`, and by explicit reset sweeps.
    fn reset_direct_modified(&self) {
        self.set_direct_modified(false);
    }

    /// Clear the visible-modified flag.
    ///
    /// Only invoked by explicit reset sweeps; opening an episode never
    /// touches visible highlighting.
    fn reset_visible_modified(&self) {
        self.set_visible_modified(false);
    }

    /// A new outermost episode was opened.
    fn transaction_started(&self, txn: &Transaction);

    /// The outermost episode was closed.
    ///
    /// A failure here is reported once and does not stop the sweep; the
    /// remaining listeners are still notified.
    fn transaction_ended(&self, txn: &Transaction) -> Result<(), NotificationError>;
}

/// A type-erased, shared listener handle.
pub type DynTransactionListener = Arc<dyn TransactionListener>;

/// Embeddable direct/visible modified-flag pair.
///
/// Interior mutability via atomics so listener hooks can stay `&self`.
#[derive(Debug, Default)]
pub struct ModifiedFlags {
    direct: AtomicBool,
    visible: AtomicBool,
}

impl ModifiedFlags {
    /// Create a flag pair with both flags cleared.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or clear the direct-modified flag.
    pub fn set_direct(&self, modified: bool) {
        self.direct.store(modified, Ordering::Relaxed);
    }

    /// Read the direct-modified flag.
    #[must_use]
    pub fn is_direct(&self) -> bool {
        self.direct.load(Ordering::Relaxed)
    }

    /// Set or clear the visible-modified flag.
    pub fn set_visible(&self, modified: bool) {
        self.visible.store(modified, Ordering::Relaxed);
    }

    /// Read the visible-modified flag.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible.load(Ordering::Relaxed)
    }
}
