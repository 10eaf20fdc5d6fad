//! Finance domain: transactions, processing channels, accounts.
//!
//! Account behaviour is selected by [`AccountKind`] rather than subclassing;
//! applying a transaction yields a [`TransactionOutcome`] so an overdraw on a
//! savings account is a reportable outcome, not a hard failure.

pub mod account;
pub mod transaction;

pub use account::{Account, AccountKind, TransactionOutcome};
pub use transaction::{format_cents, Channel, Transaction};
