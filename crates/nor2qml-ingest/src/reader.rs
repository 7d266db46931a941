//! Reading Nordic files and splitting them into event blocks.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::error::{IngestError, Result};

/// Lines of one event, as they appeared in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventBlock {
    /// 1-based line number of the first line in the source file.
    pub first_line: usize,
    pub lines: Vec<String>,
}

impl EventBlock {
    pub fn new(first_line: usize, lines: Vec<String>) -> Self {
        Self { first_line, lines }
    }
}

/// Read a whole Nordic file into memory.
pub fn read_nordic_file(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => IngestError::InputNotFound {
            path: path.to_path_buf(),
        },
        _ => IngestError::FileRead {
            path: path.to_path_buf(),
            source,
        },
    })?;
    // Bulletins written by older tools are often Latin-1.
    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => err.into_bytes().iter().map(|&b| char::from(b)).collect(),
    };
    debug!(path = %path.display(), bytes = text.len(), "read Nordic file");
    Ok(text)
}

/// Split file contents into event blocks at blank lines.
pub fn split_events(text: &str) -> Vec<EventBlock> {
    let mut blocks = Vec::new();
    let mut current: Option<EventBlock> = None;

    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            if let Some(block) = current.take() {
                blocks.push(block);
            }
            continue;
        }
        current
            .get_or_insert_with(|| EventBlock::new(index + 1, Vec::new()))
            .lines
            .push(line.trim_end_matches('\r').to_string());
    }
    if let Some(block) = current {
        blocks.push(block);
    }
    blocks
}
