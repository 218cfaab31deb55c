//! Domain error model.

use thiserror::Error;

use crate::id::EmployeeId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures. Field-level
/// form validation is returned as data by the validator and never lands here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// No live record carries the requested identifier.
    #[error("employee not found: {0}")]
    NotFound(EmployeeId),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A conflict occurred (e.g. two records sharing one identifier).
    #[error("conflict: {0}")]
    Conflict(String),
}

impl DomainError {
    pub fn not_found(id: impl Into<EmployeeId>) -> Self {
        Self::NotFound(id.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }
}
