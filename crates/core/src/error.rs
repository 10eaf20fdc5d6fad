//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// A closed taxonomy: every deterministic domain failure in the workspace is
/// one of these kinds. Infrastructure failures (file I/O) belong to the crates
/// that touch files and wrap this type instead of extending it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An insert collided with an identifier already in the store.
    #[error("duplicate key: {0}")]
    DuplicateKey(String),

    /// A lookup, removal or update referenced an absent identifier.
    #[error("not found: {0}")]
    NotFound(String),

    /// A value failed a field-level check (e.g. negative quantity).
    #[error("invalid value: {0}")]
    InvalidValue(String),

    /// A flat-file record had missing/extra fields or an unparsable number.
    #[error("line {line}: {message}")]
    MalformedRecord { line: usize, message: String },
}

impl DomainError {
    pub fn duplicate_key(msg: impl Into<String>) -> Self {
        Self::DuplicateKey(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn invalid_value(msg: impl Into<String>) -> Self {
        Self::InvalidValue(msg.into())
    }

    pub fn malformed_record(line: usize, message: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line,
            message: message.into(),
        }
    }
}
