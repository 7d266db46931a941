//! Error types for QuakeML mapping and serialization.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MapError {
    /// The event has no type 1 header to build an origin from.
    #[error("event has no main header")]
    MissingMainHeader,

    /// A main header lacks the date needed for origin and pick times.
    #[error("main header {index} has no date")]
    MissingDate { index: usize },

    #[error("failed to write XML: {0}")]
    Write(#[from] std::io::Error),

    #[error("serialized XML is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

pub type Result<T> = std::result::Result<T, MapError>;
