//! # Notification Errors
//!
//! Failure value a listener returns when it cannot apply a commit
//! notification. The broadcaster treats these as best-effort delivery
//! failures: the error is handed to the error reporter and the sweep
//! continues with the remaining listeners.

use thiserror::Error;

/// Errors raised by listener notification hooks.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NotificationError {
    /// The listener failed while applying a transaction-ended notification.
    #[error("listener `{listener}` failed to apply commit: {message}")]
    CommitFailed {
        /// Name of the failing listener, for the error report.
        listener: String,
        /// What went wrong, in the listener's own words.
        message: String,
    },

    /// The listener failed for a reason unrelated to the commit itself.
    #[error("notification failed: {0}")]
    Internal(String),
}

impl NotificationError {
    /// Shorthand for a [`NotificationError::CommitFailed`].
    pub fn commit_failed(listener: impl Into<String>, message: impl Into<String>) -> Self {
        Self::CommitFailed {
            listener: listener.into(),
            message: message.into(),
        }
    }
}
