// Warehouse - typed inventory repositories with validated mutations

pub mod item;
pub mod repository;
pub mod manager;

pub use item::{ElectronicItem, GroceryItem, InventoryItem};
pub use repository::InventoryRepository;
pub use manager::WarehouseManager;
