//! Document sink trait and storage error types

use crate::extract::ProductRecord;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        StorageError::Serialization(e.to_string())
    }
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Trait for document store backends
///
/// A sink accepts one record at a time. Inserts are not idempotent: the
/// store enforces no uniqueness, so identical records produce distinct
/// documents.
pub trait DocumentSink {
    /// Inserts a single record into the configured collection
    fn insert(&mut self, record: &ProductRecord) -> StorageResult<()>;

    /// Counts documents currently stored in the configured collection
    fn count(&self) -> StorageResult<u64>;
}
