// Inventory Logger - save a seeded session, reload it in a fresh one
//
// Usage: inventory-logger [path]

use anyhow::Result;
use coursework::{logging, InventoryApp, InventoryLogConfig};
use std::env;

fn main() -> Result<()> {
    logging::init();

    let config = InventoryLogConfig::from_args(env::args().skip(1));
    InventoryApp::run(config.path);

    Ok(())
}
