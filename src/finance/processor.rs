// 🏦 Payment Processors
// One implementation per payment channel, selected through `get_processor`

use crate::finance::transaction::Transaction;
use crate::money::format_currency;

// ============================================================================
// PROCESSOR KIND
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessorKind {
    BankTransfer,
    MobileMoney,
    CryptoWallet,
}

impl ProcessorKind {
    /// Human-readable channel name
    pub fn label(&self) -> &'static str {
        match self {
            ProcessorKind::BankTransfer => "Bank Transfer",
            ProcessorKind::MobileMoney => "Mobile Money",
            ProcessorKind::CryptoWallet => "Crypto Wallet",
        }
    }
}

// ============================================================================
// PROCESSOR TRAIT
// ============================================================================

/// TransactionProcessor - one payment channel
///
/// Adding a channel means adding an implementation; existing processors are untouched.
pub trait TransactionProcessor {
    /// Channel this processor handles
    fn kind(&self) -> ProcessorKind;

    /// Process a transaction and return the confirmation message
    ///
    /// Example: `[Mobile Money] Processed $150.00 for Groceries`
    fn process(&self, transaction: &Transaction) -> String {
        let message = format!(
            "[{}] Processed {} for {}",
            self.kind().label(),
            format_currency(transaction.amount),
            transaction.category
        );
        tracing::debug!(tx_id = transaction.id, channel = self.kind().label(), "processed transaction");
        message
    }
}

/// Factory: processor for a given channel
pub fn get_processor(kind: ProcessorKind) -> Box<dyn TransactionProcessor> {
    match kind {
        ProcessorKind::BankTransfer => Box::new(BankTransferProcessor),
        ProcessorKind::MobileMoney => Box::new(MobileMoneyProcessor),
        ProcessorKind::CryptoWallet => Box::new(CryptoWalletProcessor),
    }
}

// ============================================================================
// IMPLEMENTATIONS
// ============================================================================

pub struct BankTransferProcessor;

impl TransactionProcessor for BankTransferProcessor {
    fn kind(&self) -> ProcessorKind {
        ProcessorKind::BankTransfer
    }
}

pub struct MobileMoneyProcessor;

impl TransactionProcessor for MobileMoneyProcessor {
    fn kind(&self) -> ProcessorKind {
        ProcessorKind::MobileMoney
    }
}

pub struct CryptoWalletProcessor;

impl TransactionProcessor for CryptoWalletProcessor {
    fn kind(&self) -> ProcessorKind {
        ProcessorKind::CryptoWallet
    }
}
