//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Identifiers are small `Copy` values (integer newtypes from [`crate::id`]),
/// so entities hand them out by value rather than by reference.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug + core::fmt::Display;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;
}

/// Capability: a mutable stock quantity.
///
/// Implemented by records whose on-hand count can be adjusted through
/// [`Repository::update_quantity`](crate::Repository::update_quantity).
/// Descriptive fields stay immutable; the quantity is the one field that
/// changes over a record's life.
pub trait StockLevel {
    /// Current on-hand quantity.
    fn quantity(&self) -> i64;

    /// Replace the on-hand quantity.
    fn set_quantity(&mut self, quantity: i64);
}
