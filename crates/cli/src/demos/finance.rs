use anyhow::Result;
use chrono::Utc;

use tally_core::{Repository, TransactionId};
use tally_finance::{
    format_cents, Account, AccountKind, Channel, Transaction, TransactionOutcome,
};

pub fn run() -> Result<()> {
    println!("\n=== Finance ===");

    let mut account = Account::new("ACC77438", AccountKind::Savings, 1_000_000);
    let mut log: Repository<Transaction> = Repository::new();

    let batch = [
        (
            Transaction::new(TransactionId::new(1), Utc::now(), 40_000, "Groceries"),
            Channel::MobileMoney,
        ),
        (
            Transaction::new(TransactionId::new(2), Utc::now(), 700_000, "Rent"),
            Channel::BankTransfer,
        ),
        (
            Transaction::new(TransactionId::new(3), Utc::now(), 270_000, "Fees"),
            Channel::CryptoWallet,
        ),
    ];

    for (tx, channel) in batch {
        println!("{}", channel.process(&tx));

        match account.apply(&tx) {
            TransactionOutcome::Applied { new_balance_cents } => {
                println!(
                    "Transaction of {} applied. Updated balance: {}",
                    format_cents(tx.amount_cents),
                    format_cents(new_balance_cents)
                );
            }
            TransactionOutcome::InsufficientFunds {
                balance_cents,
                requested_cents,
            } => {
                tracing::warn!(
                    "insufficient funds on {}: requested {}, balance {}",
                    account.number(),
                    format_cents(requested_cents),
                    format_cents(balance_cents)
                );
            }
        }

        log.add(tx)?;
    }

    println!("{} transactions recorded", log.len());
    Ok(())
}
