//! `tally-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the entity capability traits, integer-backed identifier newtypes, the closed
//! error taxonomy, and the generic keyed [`Repository`].

pub mod entity;
pub mod error;
pub mod id;
pub mod repository;

pub use entity::{Entity, StockLevel};
pub use error::{DomainError, DomainResult};
pub use id::{ItemId, PatientId, PrescriptionId, RecordId, StudentId, TransactionId};
pub use repository::Repository;
