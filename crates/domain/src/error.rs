//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`PantryError`]
//! via `From`.

/// Top-level error returned by application operations.
#[derive(Debug, thiserror::Error)]
pub enum PantryError {
    /// User input failed a domain invariant.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The persistence backend failed to read or write.
    #[error("storage error")]
    Storage(Box<dyn std::error::Error + Send + Sync>),

    /// The report could not be handed to its destination.
    #[error("report export error")]
    Export(Box<dyn std::error::Error + Send + Sync>),
}

/// Invariant violations detected while building an [`Item`](crate::item::Item).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("expiry date must not be empty")]
    EmptyExpiryDate,

    #[error("quantity must not be empty")]
    EmptyQuantity,

    #[error("quantity must be a non-negative integer, got {0:?}")]
    InvalidQuantity(String),
}
