//! Error types for board storage.

use std::path::PathBuf;

/// Errors that can occur while writing the board document.
///
/// Read failures never surface as errors; see
/// [`BoardStore::load`](crate::BoardStore::load).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Failed to determine the user data directory.
    #[error("could not determine data directory")]
    NoDataDirectory,

    /// Failed to write the board document.
    #[error("failed to write board at {path}: {source}")]
    WriteFile {
        /// The path that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize the board to JSON.
    #[error("failed to serialize board: {0}")]
    SerializeJson(#[from] serde_json::Error),
}

/// A specialized Result type for storage operations.
pub type Result<T> = std::result::Result<T, StoreError>;
