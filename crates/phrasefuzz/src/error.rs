//! Error types for the phrasefuzz command.

use phrasefuzz_core::CatalogError;
use thiserror::Error;

/// Error type for phrasefuzz operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Catalog could not be built
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias using phrasefuzz Error.
pub type Result<T> = std::result::Result<T, Error>;
