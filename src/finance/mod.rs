// Finance Demo - payment processors and account balance application
//
// Each transaction is an immutable value:
// - processors only report that a payment went through a channel
// - accounts consume transactions and mutate their own balance

pub mod transaction;
pub mod processor;
pub mod account;
pub mod app;

pub use transaction::Transaction;
pub use processor::{
    get_processor, BankTransferProcessor, CryptoWalletProcessor, MobileMoneyProcessor,
    ProcessorKind, TransactionProcessor,
};
pub use account::{Account, AccountKind, ApplyOutcome};
pub use app::FinanceApp;
