//! Unified error type for the domain layer

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A stat or experience value would leave its numeric range
    #[error("Stat overflow: {0}")]
    Overflow(String),
}

impl DomainError {
    /// Creates a validation error for rejected configuration or field values.
    ///
    /// # Example
    /// ```ignore
    /// if rules.exp_increment == 0 {
    ///     return Err(DomainError::validation("exp increment must be positive"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates an overflow error naming the value that went out of range.
    pub fn overflow(what: impl Into<String>) -> Self {
        Self::Overflow(what.into())
    }
}
