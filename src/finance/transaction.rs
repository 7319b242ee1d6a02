use chrono::{DateTime, Local};
use rust_decimal::Decimal;

use crate::money::format_currency;

/// A single payment: consumed by processors and accounts, never mutated
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: u32,
    pub date: DateTime<Local>,
    pub amount: Decimal,
    pub category: String,
}

impl Transaction {
    pub fn new(id: u32, date: DateTime<Local>, amount: Decimal, category: impl Into<String>) -> Self {
        Transaction {
            id,
            date,
            amount,
            category: category.into(),
        }
    }

    /// Line used in the "All Transactions Recorded" listing
    ///
    /// Example: `1: Groceries - $150.00 on 2024-03-20 14:05:09`
    pub fn summary_line(&self) -> String {
        format!(
            "{}: {} - {} on {}",
            self.id,
            self.category,
            format_currency(self.amount),
            self.date.format("%Y-%m-%d %H:%M:%S")
        )
    }
}
