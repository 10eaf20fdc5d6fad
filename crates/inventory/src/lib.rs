//! Inventory log domain: stock records persisted as a JSON dump file.

pub mod log;
pub mod record;

pub use log::{InventoryLog, LogError};
pub use record::StockRecord;
