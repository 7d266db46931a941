use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

use nor2qml_ingest::IngestError;
use nor2qml_map::MapError;
use nor2qml_model::Discrepancy;
use nor2qml_schema::SchemaError;

/// Why an event did not make it to the output.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error("event failed validation with {count} discrepancies")]
    Validation { count: usize },

    #[error(transparent)]
    Map(#[from] MapError),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    /// Document written.
    Converted,
    /// Document passed every stage; nothing written in a dry run.
    Checked,
    /// The block could not be decoded.
    Malformed,
    /// Validation found discrepancies.
    Invalid,
}

impl EventStatus {
    pub fn label(&self) -> &'static str {
        match self {
            EventStatus::Converted => "converted",
            EventStatus::Checked => "checked",
            EventStatus::Malformed => "malformed",
            EventStatus::Invalid => "invalid",
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, EventStatus::Malformed | EventStatus::Invalid)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EventSummary {
    /// 1-based position of the event in the file.
    pub index: usize,
    /// Line on which the event block starts.
    pub first_line: usize,
    pub origin_time: Option<String>,
    pub event_type: Option<String>,
    pub headers: usize,
    pub phases: usize,
    pub status: EventStatus,
    pub output: Option<PathBuf>,
    /// Event-fatal error text for malformed blocks.
    pub error: Option<String>,
    pub discrepancies: Vec<Discrepancy>,
}

#[derive(Debug, Serialize)]
pub struct ConversionResult {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub schema: PathBuf,
    pub events: Vec<EventSummary>,
    pub report: Option<PathBuf>,
    pub has_errors: bool,
}
