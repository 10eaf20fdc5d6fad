use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tally_core::{Entity, RecordId, StockLevel};

/// Persisted inventory record.
///
/// Wire field names keep the original PascalCase form (`Id`, `Name`,
/// `Quantity`, `DateAdded`) so existing dump files load unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockRecord {
    #[serde(rename = "Id")]
    id: RecordId,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Quantity")]
    quantity: i64,
    #[serde(rename = "DateAdded")]
    date_added: DateTime<Utc>,
}

impl StockRecord {
    pub fn new(
        id: RecordId,
        name: impl Into<String>,
        quantity: i64,
        date_added: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            date_added,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn date_added(&self) -> DateTime<Utc> {
        self.date_added
    }
}

impl Entity for StockRecord {
    type Id = RecordId;

    fn id(&self) -> RecordId {
        self.id
    }
}

impl StockLevel for StockRecord {
    fn quantity(&self) -> i64 {
        self.quantity
    }

    fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
    }
}
