// Inventory Log - append-only in-memory log persisted wholesale as JSON

pub mod item;
pub mod logger;
pub mod app;

pub use item::{InventoryEntity, LoggedItem};
pub use logger::{InventoryLogger, LoadOutcome, SaveOutcome};
pub use app::InventoryApp;
