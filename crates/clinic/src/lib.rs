//! Clinic domain: patients, prescriptions, and the derived lookup index.

pub mod patient;
pub mod prescription;
pub mod system;

pub use patient::{Gender, Patient};
pub use prescription::Prescription;
pub use system::Clinic;
