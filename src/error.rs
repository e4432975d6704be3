//! Error types shared by the data model and persistence services.

use thiserror::Error;

/// Errors surfaced by inventory operations and persistence.
///
/// Every failure is reported before any state is mutated, so a caller that
/// receives an error can assume the inventory it passed in is unchanged.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// A rejected input: non-positive quantity, empty name, or a removal
    /// exceeding the stored quantity.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An inventory with this name is already registered in the session.
    #[error("an inventory named '{0}' already exists")]
    DuplicateName(String),

    /// A persisted inventory file is structurally invalid.
    #[error("malformed inventory data: {0}")]
    MalformedData(String),

    /// Filesystem failure during save, load, or delete.
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),
}

impl InventoryError {
    /// Shorthand for an [`InventoryError::InvalidArgument`].
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Shorthand for an [`InventoryError::MalformedData`].
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedData(message.into())
    }
}

/// Result alias used throughout the core modules.
pub type Result<T, E = InventoryError> = std::result::Result<T, E>;
