//! Generic keyed repository: the one reusable store behind every domain.

use std::collections::HashMap;

use crate::entity::{Entity, StockLevel};
use crate::error::{DomainError, DomainResult};

/// In-memory mapping from identifier to record.
///
/// Invariant: at most one record per id. The store is created empty, populated
/// through [`add`](Self::add), and lives only as long as its owner; nothing is
/// persisted unless a caller serializes a snapshot.
///
/// All operations are synchronous, immediately consistent map operations.
#[derive(Debug, Clone)]
pub struct Repository<T: Entity> {
    items: HashMap<T::Id, T>,
}

impl<T: Entity> Repository<T> {
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
        }
    }

    /// Insert a record, rejecting identifier collisions.
    ///
    /// On [`DomainError::DuplicateKey`] the store is left untouched.
    pub fn add(&mut self, item: T) -> DomainResult<()> {
        let id = item.id();
        if self.items.contains_key(&id) {
            return Err(DomainError::duplicate_key(format!("id {id} already exists")));
        }
        self.items.insert(id, item);
        Ok(())
    }

    /// Shared access to the stored record (not a copy).
    pub fn get(&self, id: T::Id) -> DomainResult<&T> {
        self.items
            .get(&id)
            .ok_or_else(|| DomainError::not_found(format!("id {id}")))
    }

    /// Mutable access to the stored record, same contract as [`get`](Self::get).
    pub fn get_mut(&mut self, id: T::Id) -> DomainResult<&mut T> {
        self.items
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found(format!("id {id}")))
    }

    /// Delete and return the stored record.
    pub fn remove(&mut self, id: T::Id) -> DomainResult<T> {
        self.items
            .remove(&id)
            .ok_or_else(|| DomainError::not_found(format!("id {id}")))
    }

    /// Snapshot of all records. Order is unspecified.
    pub fn list_all(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.values().cloned().collect()
    }

    pub fn contains(&self, id: T::Id) -> bool {
        self.items.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Entity + StockLevel> Repository<T> {
    /// Replace a record's stock quantity in place.
    ///
    /// The negative-value check runs before the existence check, so a negative
    /// update always reports the bad value even when the id is absent.
    pub fn update_quantity(&mut self, id: T::Id, new_quantity: i64) -> DomainResult<()> {
        if new_quantity < 0 {
            return Err(DomainError::invalid_value(format!(
                "quantity cannot be negative (got {new_quantity})"
            )));
        }
        let item = self
            .items
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found(format!("id {id}")))?;
        item.set_quantity(new_quantity);
        Ok(())
    }
}

impl<T: Entity> Default for Repository<T> {
    fn default() -> Self {
        Self::new()
    }
}
