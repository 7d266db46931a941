//! Error types for Nordic ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that end ingestion of a file or of one event block.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file does not exist or cannot be opened.
    #[error("file {path} does not exist")]
    InputNotFound { path: PathBuf },

    /// Failed to read an opened file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Record Errors ===
    /// The file holds no event blocks.
    #[error("no Nordic events found in {path}")]
    NoEvents { path: PathBuf },

    /// A line cannot be decoded under any layout.
    #[error("malformed record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
