//! Warehouse manager: one typed store per product family.

use chrono::{Duration, Utc};

use tally_core::{DomainResult, Entity, ItemId, Repository, StockLevel};

use crate::item::{ElectronicItem, GroceryItem};

/// Two typed stores under one roof.
///
/// Stock operations return errors to the caller; user-facing reporting happens
/// at the call site.
#[derive(Debug, Default)]
pub struct Warehouse {
    electronics: Repository<ElectronicItem>,
    groceries: Repository<GroceryItem>,
}

impl Warehouse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the stock on hand at opening.
    pub fn seed(&mut self) -> DomainResult<()> {
        self.electronics.add(ElectronicItem::new(
            ItemId::new(1),
            "Laptop",
            7,
            "Dell",
            24,
        ))?;
        self.electronics.add(ElectronicItem::new(
            ItemId::new(2),
            "Phone",
            29,
            "Samsung",
            12,
        ))?;
        self.groceries.add(GroceryItem::new(
            ItemId::new(1),
            "Rice cakes",
            25,
            Utc::now() + Duration::days(180),
        ))?;
        self.groceries.add(GroceryItem::new(
            ItemId::new(2),
            "Milk",
            13,
            Utc::now() + Duration::days(7),
        ))?;
        Ok(())
    }

    pub fn electronics(&self) -> &Repository<ElectronicItem> {
        &self.electronics
    }

    pub fn electronics_mut(&mut self) -> &mut Repository<ElectronicItem> {
        &mut self.electronics
    }

    pub fn groceries(&self) -> &Repository<GroceryItem> {
        &self.groceries
    }

    pub fn groceries_mut(&mut self) -> &mut Repository<GroceryItem> {
        &mut self.groceries
    }
}

/// Raise the stored quantity for `id` by `amount`, returning the new level.
///
/// Works against any stockable store. A delta that would push the level below
/// zero is rejected by the store's own quantity check.
pub fn increase_stock<T>(repo: &mut Repository<T>, id: T::Id, amount: i64) -> DomainResult<i64>
where
    T: Entity + StockLevel,
{
    let new_quantity = repo.get(id)?.quantity() + amount;
    repo.update_quantity(id, new_quantity)?;
    Ok(new_quantity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_core::DomainError;

    #[test]
    fn seed_fills_both_stores() {
        let mut warehouse = Warehouse::new();
        warehouse.seed().unwrap();

        assert_eq!(warehouse.electronics().len(), 2);
        assert_eq!(warehouse.groceries().len(), 2);
    }

    #[test]
    fn increase_stock_adds_to_the_current_level() {
        let mut warehouse = Warehouse::new();
        warehouse.seed().unwrap();

        let new_level = increase_stock(warehouse.electronics_mut(), ItemId::new(1), 3).unwrap();
        assert_eq!(new_level, 10);
        assert_eq!(
            warehouse
                .electronics()
                .get(ItemId::new(1))
                .unwrap()
                .quantity(),
            10
        );
    }

    #[test]
    fn increase_stock_on_unknown_item_fails() {
        let mut warehouse = Warehouse::new();
        warehouse.seed().unwrap();

        let err = increase_stock(warehouse.groceries_mut(), ItemId::new(89), 5).unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[test]
    fn decrease_below_zero_is_rejected() {
        let mut warehouse = Warehouse::new();
        warehouse.seed().unwrap();

        let err = increase_stock(warehouse.electronics_mut(), ItemId::new(1), -50).unwrap_err();
        assert!(matches!(err, DomainError::InvalidValue(_)));
        assert_eq!(
            warehouse
                .electronics()
                .get(ItemId::new(1))
                .unwrap()
                .quantity(),
            7
        );
    }

    #[test]
    fn duplicate_intake_is_rejected() {
        let mut warehouse = Warehouse::new();
        warehouse.seed().unwrap();

        let err = warehouse
            .electronics_mut()
            .add(ElectronicItem::new(ItemId::new(1), "Tablet", 4, "Lenovo", 18))
            .unwrap_err();
        assert!(matches!(err, DomainError::DuplicateKey(_)));
        assert_eq!(warehouse.electronics().len(), 2);
    }

    #[test]
    fn grocery_and_electronic_ids_live_in_separate_stores() {
        let mut warehouse = Warehouse::new();
        warehouse.seed().unwrap();

        // Same raw id 1 on both sides; removing a grocery leaves the laptop.
        warehouse.groceries_mut().remove(ItemId::new(1)).unwrap();
        assert!(warehouse.electronics().contains(ItemId::new(1)));
        assert!(!warehouse.groceries().contains(ItemId::new(1)));
    }
}
