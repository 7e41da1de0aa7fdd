//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every rejection the store can produce is one of these variants. Callers
/// branch on the variant (see [`DomainError::is_not_found`]), never on the
/// message text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Malformed input: wrong payload shape, unknown field, bad name.
    #[error("{0}")]
    Validation(String),

    /// The amount was missing, not an integer, or below the minimum.
    #[error("{0}")]
    InvalidAmount(String),

    /// An item with the same name already exists.
    #[error("{0}")]
    DuplicateName(String),

    /// A referenced item does not exist.
    #[error("{0}")]
    NotFound(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_amount(msg: impl Into<String>) -> Self {
        Self::InvalidAmount(msg.into())
    }

    pub fn duplicate_name(msg: impl Into<String>) -> Self {
        Self::DuplicateName(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// `true` for errors that reference something absent (HTTP 404), `false`
    /// for rejected input (HTTP 400).
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Stable machine-readable code for this error kind.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation_error",
            Self::InvalidAmount(_) => "invalid_amount",
            Self::DuplicateName(_) => "duplicate_name",
            Self::NotFound(_) => "not_found",
        }
    }
}
