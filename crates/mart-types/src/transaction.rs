//! # Transaction Value
//!
//! A [`Transaction`] represents one logical edit episode on the
//! configuration model: everything that happens between the outermost
//! `begin_transaction` and its matching `end_transaction`.
//!
//! The value is transient. The coordinator creates it on the 0→1 nesting
//! transition, hands the same value to every listener hook fired during the
//! episode, and drops it on the 1→0 transition. It is never persisted.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One logical edit episode on the configuration model.
///
/// Identity is the episode id: two `Transaction` values compare equal iff
/// they describe the same episode, regardless of how they were cloned or
/// shared.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique episode id.
    id: Uuid,

    /// Whether this episode may alter "visible modified" highlighting.
    ///
    /// Captured from the outermost `begin_transaction` call only; the flag
    /// arguments of nested begin calls are discarded.
    allow_visible_mod_change: bool,
}

impl Transaction {
    /// Create a new episode value with a fresh id.
    #[must_use]
    pub fn new(allow_visible_mod_change: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            allow_visible_mod_change,
        }
    }

    /// Get the unique episode id.
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Whether this episode is allowed to change visible-modified
    /// highlighting on the objects it touches.
    #[must_use]
    pub fn allows_visible_mod_change(&self) -> bool {
        self.allow_visible_mod_change
    }
}

impl PartialEq for Transaction {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Transaction {}
