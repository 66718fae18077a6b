//! Catalog error types

use thiserror::Error;

/// Errors that can occur while building a catalog
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    /// Two items share an id
    #[error("duplicate catalog id: {0}")]
    DuplicateId(String),

    /// Configuration rejected by validation
    #[error("invalid catalog config: {0}")]
    InvalidConfig(String),

    /// Serialization/deserialization error
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
