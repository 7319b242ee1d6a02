// 💳 Account - balance owner that consumes transactions
//
// Two debit policies share one `apply_transaction` entry point:
// - Standard: always debits (balance may go negative)
// - Savings: debits only when the balance covers the amount
//
// Insufficient funds is a reported outcome, not an error.

use rust_decimal::Decimal;

use crate::finance::transaction::Transaction;
use crate::money::format_currency;

// ============================================================================
// ACCOUNT KIND
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    /// Unchecked debits
    Standard,

    /// Debits rejected when amount > balance
    Savings,
}

impl AccountKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountKind::Standard => "Standard",
            AccountKind::Savings => "Savings",
        }
    }
}

// ============================================================================
// APPLY OUTCOME
// ============================================================================

/// What happened when a transaction was applied to an account
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// Amount was debited
    Applied {
        kind: AccountKind,
        amount: Decimal,
        new_balance: Decimal,
    },

    /// Savings account refused the debit; balance untouched
    InsufficientFunds { amount: Decimal, balance: Decimal },
}

impl ApplyOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, ApplyOutcome::Applied { .. })
    }

    /// Console message for this outcome
    pub fn message(&self) -> String {
        match self {
            ApplyOutcome::Applied {
                kind,
                amount,
                new_balance,
            } => {
                let label = match kind {
                    AccountKind::Standard => "New Balance",
                    AccountKind::Savings => "Updated Balance",
                };
                format!(
                    "Transaction applied: {} | {}: {}",
                    format_currency(*amount),
                    label,
                    format_currency(*new_balance)
                )
            }
            ApplyOutcome::InsufficientFunds { .. } => "Insufficient funds".to_string(),
        }
    }
}

// ============================================================================
// ACCOUNT
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub account_number: String,
    balance: Decimal,
    pub kind: AccountKind,
}

impl Account {
    pub fn new(account_number: impl Into<String>, initial_balance: Decimal, kind: AccountKind) -> Self {
        Account {
            account_number: account_number.into(),
            balance: initial_balance,
            kind,
        }
    }

    /// Standard account
    pub fn standard(account_number: impl Into<String>, initial_balance: Decimal) -> Self {
        Self::new(account_number, initial_balance, AccountKind::Standard)
    }

    /// Savings account
    pub fn savings(account_number: impl Into<String>, initial_balance: Decimal) -> Self {
        Self::new(account_number, initial_balance, AccountKind::Savings)
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Apply a transaction according to this account's debit policy
    pub fn apply_transaction(&mut self, transaction: &Transaction) -> ApplyOutcome {
        if self.kind == AccountKind::Savings && transaction.amount > self.balance {
            tracing::debug!(
                account = %self.account_number,
                tx_id = transaction.id,
                "insufficient funds, transaction rejected"
            );
            return ApplyOutcome::InsufficientFunds {
                amount: transaction.amount,
                balance: self.balance,
            };
        }

        self.balance -= transaction.amount;
        tracing::debug!(
            account = %self.account_number,
            tx_id = transaction.id,
            balance = %self.balance,
            "transaction applied"
        );

        ApplyOutcome::Applied {
            kind: self.kind,
            amount: transaction.amount,
            new_balance: self.balance,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
