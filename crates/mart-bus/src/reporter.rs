//! # Error Reporter
//!
//! Seam for the external error-display collaborator. When a listener fails
//! its transaction-ended hook, the coordinator forwards the failure here
//! exactly once and carries on with the remaining listeners.

use mart_types::{ListenerCategory, NotificationError};
use tracing::error;

/// Receives listener failures surfaced during an ended sweep.
pub trait ErrorReporter: Send + Sync {
    /// Report one listener failure.
    ///
    /// `category` is the dispatch category the failing listener was
    /// registered under.
    fn report(&self, category: ListenerCategory, error: &NotificationError);
}

/// Default reporter: emits the failure as a structured error log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl ErrorReporter for TracingReporter {
    fn report(&self, category: ListenerCategory, error: &NotificationError) {
        error!(
            category = %category,
            error = %error,
            "listener failed during transaction-ended sweep"
        );
    }
}
