//! Error types for ziptrim.

use thiserror::Error;

/// Errors that can occur while measuring, copying or truncating an archive.
#[derive(Debug, Error)]
pub enum Error {
    /// Seek, read, write, open or truncate failure on the underlying storage.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// No end of central directory signature within the search range.
    #[error("cannot find ZIP end of central directory record")]
    SignatureNotFound,

    /// The number of bytes copied differs from the computed ZIP size.
    #[error("copy size does not match; expected {expected}, actual {actual}")]
    SizeMismatch { expected: u64, actual: u64 },

    /// Invalid command line usage.
    #[error("{0}")]
    Usage(String),
}

/// Result type for ziptrim operations.
pub type Result<T> = std::result::Result<T, Error>;
