// Warehouse Inventory - typed repositories with validated updates

use anyhow::Result;
use coursework::{logging, WarehouseManager};

fn main() -> Result<()> {
    logging::init();

    let mut manager = WarehouseManager::new();
    manager.run();

    Ok(())
}
