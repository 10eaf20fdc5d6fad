use serde::{Deserialize, Serialize};

use crate::transaction::Transaction;

/// Account behaviour selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    /// Deducts unconditionally; the balance may go negative.
    Standard,
    /// Refuses to overdraw.
    Savings,
}

/// Outcome of applying a transaction to an account.
///
/// An overdraw attempt on a savings account is a warning-level outcome, not an
/// error: the account is untouched and the session continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionOutcome {
    Applied {
        new_balance_cents: i64,
    },
    InsufficientFunds {
        balance_cents: i64,
        requested_cents: i64,
    },
}

/// Money-holding account. Balance is cents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    number: String,
    kind: AccountKind,
    balance_cents: i64,
}

impl Account {
    pub fn new(number: impl Into<String>, kind: AccountKind, initial_balance_cents: i64) -> Self {
        Self {
            number: number.into(),
            kind,
            balance_cents: initial_balance_cents,
        }
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    pub fn balance_cents(&self) -> i64 {
        self.balance_cents
    }

    /// Apply a debit per the account kind.
    ///
    /// `Standard` always deducts. `Savings` checks the balance first: a
    /// transaction larger than the balance leaves the account untouched, and a
    /// zero-amount transaction applies.
    pub fn apply(&mut self, tx: &Transaction) -> TransactionOutcome {
        match self.kind {
            AccountKind::Standard => {
                self.balance_cents -= tx.amount_cents;
                TransactionOutcome::Applied {
                    new_balance_cents: self.balance_cents,
                }
            }
            AccountKind::Savings => {
                if tx.amount_cents > self.balance_cents {
                    TransactionOutcome::InsufficientFunds {
                        balance_cents: self.balance_cents,
                        requested_cents: tx.amount_cents,
                    }
                } else {
                    self.balance_cents -= tx.amount_cents;
                    TransactionOutcome::Applied {
                        new_balance_cents: self.balance_cents,
                    }
                }
            }
        }
    }
}
