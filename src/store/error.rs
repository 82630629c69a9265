//! Storage error types.

use thiserror::Error;

/// Errors raised by a [`BoardStore`](super::BoardStore) backend.
///
/// Missing or unreadable boards are not errors; these only cover the store
/// itself being unusable.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The embedded database rejected an operation
    #[error("Database operation failed: {0}")]
    Database(#[from] redb::Error),

    /// Creating the database location failed
    #[error("Failed to prepare storage path: {0}")]
    Io(#[from] std::io::Error),

    /// A board could not be encoded for storage
    #[error("Serialization failed: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    /// A blocking storage task was cancelled or panicked
    #[error("Storage task failed: {0}")]
    Task(String),
}
