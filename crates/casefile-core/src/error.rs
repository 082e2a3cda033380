//! Catalog error types.

use thiserror::Error;

/// Top-level error type for emitting a translation catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The output sink rejected a write.
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),

    /// Entries could not be encoded.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// A configuration value is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),
}
