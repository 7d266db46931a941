//! Conversion pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Ingest**: Read the Nordic file, split it into event blocks and decode them
//! 2. **Validate**: Run the field rules; parse-time discrepancies are merged in
//! 3. **Map**: Build the QuakeML element tree
//! 4. **Schema**: Serialize, re-parse and validate against the XSD
//! 5. **Write**: Store each accepted document under its origin-time name
//!
//! Each stage takes the output of the previous stage and returns typed results.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Datelike;
use tracing::{error, info, info_span, warn};

use nor2qml_ingest::{EventBlock, IngestError, ParsedEvent, parse_block, read_event_blocks};
use nor2qml_map::{IdSequence, XmlElement, build_quakeml, codes, format_time};
use nor2qml_model::{ConversionOptions, MainHeader, NordicEvent, ValidationReport};
use nor2qml_schema::{SchemaGate, SchemaOracle};
use nor2qml_validate::validate_event;

use crate::types::{ConversionResult, EventStatus, EventSummary, PipelineError};

/// Default XSD location relative to the executable.
pub const DEFAULT_SCHEMA: &str = "xml/QuakeML-1.2.xsd";

// ============================================================================
// Stage 1: Ingest
// ============================================================================

/// Read the input file and split it into event blocks.
pub fn ingest(input: &Path) -> Result<Vec<EventBlock>, PipelineError> {
    let _span = info_span!("ingest", input = %input.display()).entered();
    read_event_blocks(input).map_err(|err| {
        if matches!(err, IngestError::InputNotFound { .. }) {
            error!(path = %input.display(), "input file not found");
        }
        PipelineError::from(err)
    })
}

/// Decode one event block.
pub fn parse(block: &EventBlock) -> Result<ParsedEvent, PipelineError> {
    let _span = info_span!("ingest", first_line = block.first_line).entered();
    parse_block(block).map_err(|err| {
        warn!(first_line = block.first_line, error = %err, "event block cannot be decoded");
        PipelineError::from(err)
    })
}

// ============================================================================
// Stage 2: Validate
// ============================================================================

/// A decoded event with every discrepancy found in it.
#[derive(Debug)]
pub struct CheckedEvent {
    pub event: NordicEvent,
    pub report: ValidationReport,
}

impl CheckedEvent {
    pub fn ensure_valid(&self) -> Result<(), PipelineError> {
        if self.report.is_valid() {
            Ok(())
        } else {
            Err(PipelineError::Validation {
                count: self.report.len(),
            })
        }
    }
}

/// Validate a parsed event. Decode discrepancies come first in the report.
pub fn validate(parsed: ParsedEvent) -> CheckedEvent {
    let _span = info_span!("validate").entered();
    let ParsedEvent {
        event,
        discrepancies,
    } = parsed;

    let mut report = ValidationReport::new();
    report.extend(discrepancies);
    report.extend(validate_event(&event).discrepancies);

    for discrepancy in &report.discrepancies {
        warn!(
            code = discrepancy.issue.code(),
            category = discrepancy.issue.category().label(),
            location = %discrepancy.location,
            "{}",
            discrepancy.issue.message()
        );
    }
    if !report.is_valid() {
        warn!(discrepancies = report.len(), "event failed validation");
    }
    CheckedEvent { event, report }
}

// ============================================================================
// Stage 3: Map
// ============================================================================

pub fn map_event(
    event: &NordicEvent,
    options: &ConversionOptions,
    sequence: &mut IdSequence,
) -> Result<XmlElement, PipelineError> {
    let _span = info_span!("map", mode = %options.mode).entered();
    Ok(build_quakeml(event, options, sequence)?)
}

// ============================================================================
// Stage 4: Schema
// ============================================================================

/// Serialize and validate; only conforming text is returned.
pub fn check_schema<O: SchemaOracle>(
    gate: &SchemaGate<O>,
    root: &XmlElement,
) -> Result<String, PipelineError> {
    Ok(gate.check(root)?)
}

// ============================================================================
// Stage 5: Write
// ============================================================================

/// Output name `<year><day of year><hour><minute><second>.xml` of the first
/// Main header. Missing time components count as zero.
pub fn output_file_name(main: &MainHeader) -> Option<String> {
    let date = main.date?;
    let second = main.second.unwrap_or(0.0).trunc() as u32;
    Some(format!(
        "{}{:03}{:02}{:02}{:02}.xml",
        date.year(),
        date.ordinal(),
        main.hour.unwrap_or(0),
        main.minute.unwrap_or(0),
        second
    ))
}

/// Output names handed out in one run.
///
/// Events sharing an origin second would share a file name; the second one
/// becomes `<name>_2.xml`, the third `<name>_3.xml`, and so on.
#[derive(Debug, Default)]
pub struct FileNames {
    claimed: HashMap<String, usize>,
}

impl FileNames {
    pub fn claim(&mut self, name: String) -> String {
        let count = self.claimed.entry(name.clone()).or_insert(0);
        *count += 1;
        if *count == 1 {
            return name;
        }
        let stem = name.strip_suffix(".xml").unwrap_or(&name);
        let unique = format!("{stem}_{count}.xml");
        warn!(file = %name, renamed = %unique, "events share an origin second");
        // A renamed file may itself collide with a later origin-time name.
        self.claim(unique)
    }
}

pub fn write_document(
    output_dir: &Path,
    file_name: &str,
    text: &str,
) -> Result<PathBuf, PipelineError> {
    let path = output_dir.join(file_name);
    let _span = info_span!("write", path = %path.display()).entered();
    fs::create_dir_all(output_dir).map_err(|source| PipelineError::Write {
        path: output_dir.to_path_buf(),
        source,
    })?;
    fs::write(&path, text).map_err(|source| PipelineError::Write {
        path: path.clone(),
        source,
    })?;
    info!(path = %path.display(), bytes = text.len(), "wrote QuakeML document");
    Ok(path)
}

/// Write the JSON report of a run.
pub fn write_report(path: &Path, result: &ConversionResult) -> Result<()> {
    let text = serde_json::to_string_pretty(result).context("serialize report")?;
    fs::write(path, text).with_context(|| format!("write report {}", path.display()))?;
    info!(path = %path.display(), "wrote conversion report");
    Ok(())
}

// ============================================================================
// Helpers
// ============================================================================

/// Schema next to the running executable.
pub fn default_schema_path() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("locate executable")?;
    let dir = exe
        .parent()
        .context("executable has no parent directory")?;
    Ok(dir.join(DEFAULT_SCHEMA))
}

/// Summary of an event before it enters the later stages.
pub fn summarize(index: usize, block: &EventBlock, event: &NordicEvent) -> EventSummary {
    let origin_time = event.first_main().and_then(|main| {
        main.date
            .map(|date| format_time(date, main.hour, main.minute, main.second))
    });
    let event_type = event
        .first_main()
        .map(|_| event.main_headers().filter_map(|main| main.event_desc_id).last())
        .map(|id| codes::event_type(id).to_string());
    EventSummary {
        index,
        first_line: block.first_line,
        origin_time,
        event_type,
        headers: event.headers.len(),
        phases: event.phase_data.len(),
        status: EventStatus::Checked,
        output: None,
        error: None,
        discrepancies: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_output_file_name() {
        let main = MainHeader {
            date: NaiveDate::from_ymd_opt(2021, 3, 15),
            hour: Some(3),
            minute: Some(7),
            second: Some(9.5),
            ..MainHeader::default()
        };
        assert_eq!(output_file_name(&main).as_deref(), Some("2021074030709.xml"));

        let midnight = MainHeader {
            date: NaiveDate::from_ymd_opt(2020, 12, 31),
            ..MainHeader::default()
        };
        assert_eq!(output_file_name(&midnight).as_deref(), Some("2020366000000.xml"));
        assert_eq!(output_file_name(&MainHeader::default()), None);
    }

    #[test]
    fn test_file_names_suffix_repeats() {
        let mut names = FileNames::default();
        assert_eq!(names.claim("2021074030709.xml".to_string()), "2021074030709.xml");
        assert_eq!(names.claim("2021074030709.xml".to_string()), "2021074030709_2.xml");
        assert_eq!(names.claim("2021074030709.xml".to_string()), "2021074030709_3.xml");
        assert_eq!(names.claim("2021075224530.xml".to_string()), "2021075224530.xml");
    }

    #[test]
    fn test_write_document_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("out");
        let path = write_document(&nested, "a.xml", "<a/>").unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "<a/>");
    }
}
