use std::path::Path;

use anyhow::Result;
use chrono::Utc;

use tally_core::{Entity, RecordId, StockLevel};
use tally_inventory::{InventoryLog, StockRecord};

pub fn run(scratch: &Path) -> Result<()> {
    println!("\n=== Inventory ===");

    let path = scratch.join("inventory.json");

    // Session 1: seed and save.
    let mut log = InventoryLog::new(&path);
    log.add(StockRecord::new(RecordId::new(1), "Laptop", 7, Utc::now()))?;
    log.add(StockRecord::new(RecordId::new(2), "Mouse", 20, Utc::now()))?;
    log.add(StockRecord::new(RecordId::new(3), "Keyboard", 22, Utc::now()))?;
    log.add(StockRecord::new(RecordId::new(4), "IPad", 3, Utc::now()))?;
    log.add(StockRecord::new(RecordId::new(5), "HDMI Cable", 19, Utc::now()))?;

    // Save/load failures are logged, never fatal.
    match log.save() {
        Ok(()) => println!("Data saved to {}", path.display()),
        Err(e) => tracing::warn!("save failed: {e}"),
    }

    // Session 2: a fresh log reads the dump back.
    let mut reloaded: InventoryLog<StockRecord> = InventoryLog::new(&path);
    match reloaded.load() {
        Ok(count) => println!("Loaded {count} records from file"),
        Err(e) => tracing::warn!("load failed: {e}"),
    }

    println!("--- Inventory Items ---");
    let mut records = reloaded.records();
    records.sort_by_key(|r| r.id());
    for record in records {
        println!(
            "  ID: {}, Name: {}, Quantity: {}, Date Added: {}",
            record.id(),
            record.name(),
            record.quantity(),
            record.date_added().format("%Y-%m-%d %H:%M")
        );
    }

    Ok(())
}
