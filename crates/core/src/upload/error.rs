//! Upload error types.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::storage::StorageError;

/// Upload operation errors.
#[derive(Debug, Error)]
pub enum UploadError {
    /// The image path cannot be used. No I/O was performed.
    #[error("invalid image path: {0}")]
    InvalidArgument(String),

    /// The image file could not be read. No upload was attempted.
    #[error("failed to read {}", path.display())]
    FileRead {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The object store request failed.
    #[error("upload failed")]
    Upload(#[from] StorageError),
}

impl UploadError {
    /// Create an invalid argument error.
    #[must_use]
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a file read error.
    #[must_use]
    pub fn file_read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }
}
