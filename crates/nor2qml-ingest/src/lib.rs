//! Nordic bulletin ingestion.
//!
//! Splits a bulletin into event blocks and decodes each block's fixed-column
//! lines into a [`NordicEvent`](nor2qml_model::NordicEvent). Field-level
//! decode failures are collected as discrepancies instead of aborting.

pub mod columns;
pub mod error;
pub mod header;
pub mod parser;
pub mod phase;
pub mod reader;

use std::path::Path;

pub use columns::{Columns, FieldReader, LINE_WIDTH};
pub use error::{IngestError, Result};
pub use parser::{ParsedEvent, parse_block, parse_lines};
pub use reader::{EventBlock, read_nordic_file, split_events};

/// Read `path` and split it into event blocks.
///
/// Fails with [`IngestError::NoEvents`] when the file holds only blank lines.
pub fn read_event_blocks(path: &Path) -> Result<Vec<EventBlock>> {
    let text = read_nordic_file(path)?;
    let blocks = split_events(&text);
    if blocks.is_empty() {
        return Err(IngestError::NoEvents {
            path: path.to_path_buf(),
        });
    }
    tracing::info!(path = %path.display(), events = blocks.len(), "split Nordic file into events");
    Ok(blocks)
}
