use std::path::PathBuf;

use keysweep_types::Key;

/// Errors from per-key store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The document does not exist (only reported by `delete`; a missing
    /// document on `fetch` is `Ok(None)`).
    #[error("document not found: {0}")]
    NotFound(Key),

    /// The stored payload could not be decoded as a document.
    #[error("corrupt document {key}: {reason}")]
    CorruptDocument { key: Key, reason: String },

    /// The store rejected the operation.
    #[error("store rejected operation on {key}: {reason}")]
    Rejected { key: Key, reason: String },

    /// I/O error from the underlying backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors establishing the store connection.
///
/// All of these are fatal at startup: the run never begins.
#[derive(Debug, thiserror::Error)]
pub enum ConnectError {
    #[error("store root does not exist: {0}")]
    RootNotFound(PathBuf),

    #[error("bucket not found: {0}")]
    BucketNotFound(String),

    #[error("authentication failed for bucket {0}")]
    Unauthorized(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
