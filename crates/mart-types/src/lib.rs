//! # Mart Types Crate
//!
//! This crate contains the domain types shared between the transaction
//! broadcaster (`mart-bus`) and the model/view objects it coordinates.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: the coordination contract (transaction
//!   value, listener capabilities, dispatch categories, errors) is defined
//!   here and nowhere else.
//! - **Explicit Categories**: dispatch priority is a tag the caller supplies
//!   at registration time, never derived from runtime type inspection.
//! - **Failures Are Values**: a listener that cannot apply a commit returns
//!   a [`NotificationError`]; nothing in this crate panics.

pub mod category;
pub mod errors;
pub mod listener;
pub mod transaction;

pub use category::ListenerCategory;
pub use errors::NotificationError;
pub use listener::{DynTransactionListener, ModifiedFlags, TransactionListener};
pub use transaction::Transaction;
