//! # Record Store Errors

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Record store errors
///
/// Read failures are deliberately absent: `RecordStore::load` swallows
/// them into an empty collection, so only writes surface errors.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("Failed to serialize records: {0}")]
    Serialize(String),

    #[error("Failed to write store file: {0}")]
    Write(String),
}
