use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tally_core::{Entity, ItemId, StockLevel};

/// Electronic stock item.
///
/// Brand and warranty are fixed at intake; only the quantity moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectronicItem {
    id: ItemId,
    name: String,
    quantity: i64,
    brand: String,
    warranty_months: u32,
}

impl ElectronicItem {
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        quantity: i64,
        brand: impl Into<String>,
        warranty_months: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            brand: brand.into(),
            warranty_months,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn warranty_months(&self) -> u32 {
        self.warranty_months
    }
}

impl Entity for ElectronicItem {
    type Id = ItemId;

    fn id(&self) -> ItemId {
        self.id
    }
}

impl StockLevel for ElectronicItem {
    fn quantity(&self) -> i64 {
        self.quantity
    }

    fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
    }
}

/// Grocery stock item with a fixed expiry date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroceryItem {
    id: ItemId,
    name: String,
    quantity: i64,
    expiry: DateTime<Utc>,
}

impl GroceryItem {
    pub fn new(id: ItemId, name: impl Into<String>, quantity: i64, expiry: DateTime<Utc>) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            expiry,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn expiry(&self) -> DateTime<Utc> {
        self.expiry
    }
}

impl Entity for GroceryItem {
    type Id = ItemId;

    fn id(&self) -> ItemId {
        self.id
    }
}

impl StockLevel for GroceryItem {
    fn quantity(&self) -> i64 {
        self.quantity
    }

    fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
    }
}
