use chrono::Local;
use rust_decimal_macros::dec;

use crate::finance::account::Account;
use crate::finance::processor::{get_processor, ProcessorKind};
use crate::finance::transaction::Transaction;

/// Owns the recorded transactions for one demo run
#[derive(Debug, Default)]
pub struct FinanceApp {
    transactions: Vec<Transaction>,
}

impl FinanceApp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    /// Snapshot of recorded transactions, in recording order
    pub fn transactions(&self) -> Vec<Transaction> {
        self.transactions.clone()
    }

    /// Run the demo and return every console line it produced
    pub fn run(&mut self) -> Vec<String> {
        let mut output = Vec::new();
        let mut account = Account::savings("SA-12345", dec!(1000));

        let now = Local::now();
        let batch = [
            (Transaction::new(1, now, dec!(150), "Groceries"), ProcessorKind::MobileMoney),
            (Transaction::new(2, now, dec!(200), "Utilities"), ProcessorKind::BankTransfer),
            (Transaction::new(3, now, dec!(50), "Entertainment"), ProcessorKind::CryptoWallet),
        ];

        for (tx, kind) in &batch {
            output.push(get_processor(*kind).process(tx));
        }

        for (tx, _) in &batch {
            output.push(account.apply_transaction(tx).message());
        }

        for (tx, _) in batch {
            self.record(tx);
        }

        output.push(String::new());
        output.push("All Transactions Recorded:".to_string());
        output.extend(self.transactions.iter().map(Transaction::summary_line));

        output
    }
}
