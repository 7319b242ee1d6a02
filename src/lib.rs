// Coursework - five independent console programs
// Exposes every program's types for the binaries and tests

pub mod config;
pub mod error;
pub mod logging;
pub mod money;

pub mod finance;        // Transaction demo: processors + accounts
pub mod health;         // Patient / prescription registry
pub mod warehouse;      // Typed inventory repository
pub mod grading;        // Student result processor
pub mod inventory_log;  // JSON-backed inventory logger

// Re-export commonly used types
pub use config::{InventoryLogConfig, StudentReportConfig};
pub use error::{GradingError, InventoryError, StudentField};
pub use money::format_currency;
pub use finance::{
    Account, AccountKind, ApplyOutcome, FinanceApp,
    ProcessorKind, Transaction, TransactionProcessor, get_processor,
};
pub use health::{HealthSystemApp, Patient, Prescription, Repository};
pub use warehouse::{
    ElectronicItem, GroceryItem, InventoryItem, InventoryRepository, WarehouseManager,
};
pub use grading::{Grade, Student, StudentResultProcessor, parse_students};
pub use inventory_log::{
    InventoryApp, InventoryEntity, InventoryLogger, LoadOutcome, LoggedItem, SaveOutcome,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
