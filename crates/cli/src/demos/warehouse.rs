use anyhow::Result;

use tally_core::{Entity, ItemId, StockLevel};
use tally_warehouse::{increase_stock, ElectronicItem, Warehouse};

pub fn run() -> Result<()> {
    println!("\n=== Warehouse ===");

    let mut warehouse = Warehouse::new();
    warehouse.seed()?;

    println!("All grocery items:");
    for item in warehouse.groceries().list_all() {
        println!(
            "  ID: {}, Name: {}, Quantity: {}",
            item.id(),
            item.name(),
            item.quantity()
        );
    }

    println!("All electronic items:");
    for item in warehouse.electronics().list_all() {
        println!(
            "  ID: {}, Name: {}, Quantity: {}",
            item.id(),
            item.name(),
            item.quantity()
        );
    }

    match increase_stock(warehouse.electronics_mut(), ItemId::new(2), 10) {
        Ok(level) => println!("Phone stock increased to {level}"),
        Err(e) => tracing::warn!("stock increase rejected: {e}"),
    }

    // The failure tour: each of these is reported and the session continues.
    if let Err(e) = warehouse.electronics_mut().add(ElectronicItem::new(
        ItemId::new(1),
        "Tablet",
        4,
        "Lenovo",
        18,
    )) {
        tracing::warn!("add rejected: {e}");
    }

    if let Err(e) = warehouse.groceries_mut().remove(ItemId::new(89)) {
        tracing::warn!("remove rejected: {e}");
    }

    if let Err(e) = warehouse
        .electronics_mut()
        .update_quantity(ItemId::new(1), -5)
    {
        tracing::warn!("quantity update rejected: {e}");
    }

    Ok(())
}
