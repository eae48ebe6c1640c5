//! # Test Fixtures
//!
//! Recording listeners that log every hook invocation into a shared,
//! ordered log, plus a reporter that collects failures instead of logging
//! them.

use mart_bus::ErrorReporter;
use mart_types::{
    DynTransactionListener, ListenerCategory, ModifiedFlags, NotificationError, Transaction,
    TransactionListener,
};
use parking_lot::Mutex;
use std::sync::Arc;
use uuid::Uuid;

/// One observed hook invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hook {
    ResetDirect,
    ResetVisible,
    Started(Uuid),
    Ended(Uuid),
}

/// Shared, ordered log of `(listener name, hook)` pairs.
pub type HookLog = Arc<Mutex<Vec<(String, Hook)>>>;

/// Create an empty shared hook log.
///
/// Every scenario builds its log here, so this is also where the suite
/// installs the `RUST_LOG`-driven subscriber for debugging runs.
pub fn hook_log() -> HookLog {
    crate::init_logging();
    Arc::new(Mutex::new(Vec::new()))
}

/// A listener that records every hook into the shared log.
pub struct RecordingListener {
    name: String,
    flags: ModifiedFlags,
    fail_on_end: bool,
    log: HookLog,
}

impl RecordingListener {
    /// A well-behaved recording listener.
    pub fn new(name: &str, log: &HookLog) -> DynTransactionListener {
        Arc::new(Self {
            name: name.to_string(),
            flags: ModifiedFlags::new(),
            fail_on_end: false,
            log: Arc::clone(log),
        })
    }

    /// A listener whose `transaction_ended` always fails (after recording).
    pub fn failing(name: &str, log: &HookLog) -> DynTransactionListener {
        Arc::new(Self {
            name: name.to_string(),
            flags: ModifiedFlags::new(),
            fail_on_end: true,
            log: Arc::clone(log),
        })
    }

    fn record(&self, hook: Hook) {
        self.log.lock().push((self.name.clone(), hook));
    }
}

impl TransactionListener for RecordingListener {
    fn set_direct_modified(&self, modified: bool) {
        self.flags.set_direct(modified);
    }

    fn is_direct_modified(&self) -> bool {
        self.flags.is_direct()
    }

    fn set_visible_modified(&self, modified: bool) {
        self.flags.set_visible(modified);
    }

    fn is_visible_modified(&self) -> bool {
        self.flags.is_visible()
    }

    fn reset_direct_modified(&self) {
        self.record(Hook::ResetDirect);
        self.flags.set_direct(false);
    }

    fn reset_visible_modified(&self) {
        self.record(Hook::ResetVisible);
        self.flags.set_visible(false);
    }

    fn transaction_started(&self, txn: &Transaction) {
        self.record(Hook::Started(txn.id()));
    }

    fn transaction_ended(&self, txn: &Transaction) -> Result<(), NotificationError> {
        self.record(Hook::Ended(txn.id()));
        if self.fail_on_end {
            return Err(NotificationError::commit_failed(
                self.name.clone(),
                "synthetic failure",
            ));
        }
        Ok(())
    }
}

/// Reporter that collects every reported failure for later assertions.
#[derive(Default)]
pub struct CollectingReporter {
    reports: Mutex<Vec<(ListenerCategory, NotificationError)>>,
}

impl CollectingReporter {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Snapshot of everything reported so far.
    pub fn reports(&self) -> Vec<(ListenerCategory, NotificationError)> {
        self.reports.lock().clone()
    }
}

impl ErrorReporter for CollectingReporter {
    fn report(&self, category: ListenerCategory, error: &NotificationError) {
        self.reports.lock().push((category, error.clone()));
    }
}

/// Names, in log order, of listeners that observed the given hook kind.
pub fn names_for<F>(log: &HookLog, mut pred: F) -> Vec<String>
where
    F: FnMut(&Hook) -> bool,
{
    log.lock()
        .iter()
        .filter(|(_, hook)| pred(hook))
        .map(|(name, _)| name.clone())
        .collect()
}
