//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// The valuation pipeline itself never fails: missing dates, zero room
/// counts, unknown currencies and absent percent overrides all take
/// documented defaults. These variants exist for the boundary owned by the
/// surrounding CRUD layer (payload validation, identifier parsing, lookup
/// of a booking that does not exist).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A request payload failed validation (e.g. a missing required field).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A requested resource was not found (domain-level).
    #[error("not found")]
    NotFound,
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}
