use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tally_core::{Entity, TransactionId};

/// Immutable transaction record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub date: DateTime<Utc>,
    /// Positive amount in the smallest currency unit (cents).
    pub amount_cents: i64,
    pub category: String,
}

impl Transaction {
    pub fn new(
        id: TransactionId,
        date: DateTime<Utc>,
        amount_cents: i64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            date,
            amount_cents,
            category: category.into(),
        }
    }
}

impl Entity for Transaction {
    type Id = TransactionId;

    fn id(&self) -> TransactionId {
        self.id
    }
}

/// Payment rail a transaction is processed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    BankTransfer,
    MobileMoney,
    CryptoWallet,
}

impl Channel {
    pub fn label(&self) -> &'static str {
        match self {
            Channel::BankTransfer => "Bank Transfer",
            Channel::MobileMoney => "Mobile Money",
            Channel::CryptoWallet => "Crypto Wallet",
        }
    }

    /// Run the transaction through this rail, returning the printable receipt.
    pub fn process(&self, tx: &Transaction) -> String {
        format!(
            "[{}] Processed {} for {}",
            self.label(),
            format_cents(tx.amount_cents),
            tx.category
        )
    }
}

/// Render cents as a currency string, e.g. `$70.00`.
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{sign}${}.{:02}", abs / 100, abs % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(amount_cents: i64, category: &str) -> Transaction {
        Transaction::new(TransactionId::new(1), Utc::now(), amount_cents, category)
    }

    #[test]
    fn receipt_carries_channel_label_amount_and_category() {
        let receipt = Channel::MobileMoney.process(&tx(40_000, "Groceries"));
        assert_eq!(receipt, "[Mobile Money] Processed $400.00 for Groceries");
    }

    #[test]
    fn cents_render_with_two_decimal_places() {
        assert_eq!(format_cents(0), "$0.00");
        assert_eq!(format_cents(5), "$0.05");
        assert_eq!(format_cents(270_000), "$2700.00");
        assert_eq!(format_cents(-1_250), "-$12.50");
    }
}
