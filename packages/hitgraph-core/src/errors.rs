//! Error types for hitgraph-core
//!
//! Provides unified error handling across the crate.

use thiserror::Error;

/// Main error type for hitgraph-core operations
#[derive(Debug, Error)]
pub enum HitGraphError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Hits-table ingestion error
    #[error("Ingest error: {0}")]
    Ingest(String),

    /// Graph construction error
    #[error("Construction error: {0}")]
    Construction(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Graph store error
    #[error("Storage error: {0}")]
    Storage(#[from] hitgraph_storage::StorageError),
}

impl HitGraphError {
    /// Create an ingest error
    pub fn ingest(msg: impl Into<String>) -> Self {
        HitGraphError::Ingest(msg.into())
    }

    /// Create a construction error
    pub fn construction(msg: impl Into<String>) -> Self {
        HitGraphError::Construction(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        HitGraphError::Config(msg.into())
    }
}

/// Result type alias for hitgraph operations
pub type Result<T> = std::result::Result<T, HitGraphError>;
