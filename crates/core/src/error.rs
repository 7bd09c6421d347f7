//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Only deterministic, business-level failures live here. An empty stock line
/// and a full alert log are ordinary outcomes and are modelled as values, not
/// errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A SKU does not follow the `<family letter><size>` shape.
    #[error("malformed sku {sku:?}: {reason}")]
    MalformedSku { sku: String, reason: String },

    /// A value failed validation (e.g. blank input, bad configuration).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A domain invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn malformed_sku(sku: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedSku {
            sku: sku.into(),
            reason: reason.into(),
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// True for errors caused by caller input rather than engine state.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::MalformedSku { .. } | Self::Validation(_) | Self::InvalidId(_))
    }
}
