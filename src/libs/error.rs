//! Typed errors for the storage layer.
//!
//! Storage errors propagate to the caller unchanged. The one deliberate
//! exception is `delete`, which both backends treat as idempotent, so a
//! missing id is never an error there.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    /// The operation targeted an id that is not present in storage.
    #[error("task '{0}' not found in storage")]
    NotFound(String),

    /// Schema or file creation failed during first-time bootstrap.
    #[error("failed to initialize storage at {path}: {reason}")]
    Init { path: PathBuf, reason: String },

    /// A stored record could not be parsed back into a task.
    #[error("malformed record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
