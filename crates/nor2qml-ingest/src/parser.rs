//! Event block parsing.

use tracing::{debug, trace};

use nor2qml_model::{Discrepancy, Header, HeaderKind, NordicEvent, RecordLocation};

use crate::columns::{Columns, FieldReader, LINE_WIDTH};
use crate::error::{IngestError, Result};
use crate::header::{
    decode_comment, decode_error, decode_macroseismic, decode_main, decode_other,
    decode_waveform,
};
use crate::phase::decode_phase;
use crate::reader::EventBlock;

/// Type code of the phase caption line.
const CAPTION_CODE: char = '7';

/// One decoded event plus everything that failed to decode in it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedEvent {
    pub event: NordicEvent,
    pub discrepancies: Vec<Discrepancy>,
}

impl ParsedEvent {
    pub fn is_clean(&self) -> bool {
        self.discrepancies.is_empty()
    }
}

/// What a single line holds.
enum LineKind {
    Header(HeaderKind),
    Phase,
    Caption,
}

fn classify(columns: &Columns, is_first: bool) -> LineKind {
    let code = columns.type_code();
    if code == CAPTION_CODE {
        return LineKind::Caption;
    }
    if is_first && code == ' ' {
        return LineKind::Header(HeaderKind::Main);
    }
    match HeaderKind::from_type_code(code) {
        Some(kind) => LineKind::Header(kind),
        None => LineKind::Phase,
    }
}

/// Parse one event block.
pub fn parse_block(block: &EventBlock) -> Result<ParsedEvent> {
    parse_lines(&block.lines, block.first_line)
}

/// Parse the lines of one event. `first_line` is used for error positions.
pub fn parse_lines<S: AsRef<str>>(lines: &[S], first_line: usize) -> Result<ParsedEvent> {
    if lines.is_empty() {
        return Err(IngestError::MalformedRecord {
            line: first_line,
            reason: "empty event block".to_string(),
        });
    }

    let mut parsed = ParsedEvent::default();
    for (offset, line) in lines.iter().enumerate() {
        let line_number = first_line + offset;
        let columns =
            Columns::new(line.as_ref()).ok_or_else(|| IngestError::MalformedRecord {
                line: line_number,
                reason: format!("line longer than {LINE_WIDTH} columns"),
            })?;

        match classify(&columns, offset == 0) {
            LineKind::Caption => {
                trace!(line = line_number, "skipping phase caption line");
            }
            LineKind::Header(kind) => {
                let location = RecordLocation::Header {
                    index: parsed.event.headers.len(),
                    kind,
                };
                let header = decode_header(&columns, kind, location, &mut parsed.discrepancies);
                parsed.event.headers.push(header);
            }
            LineKind::Phase => {
                if columns.is_blank() {
                    continue;
                }
                let location = RecordLocation::Phase {
                    index: parsed.event.phase_data.len(),
                };
                let mut reader = FieldReader::new(&columns, location, &mut parsed.discrepancies);
                let phase = decode_phase(&mut reader);
                parsed.event.phase_data.push(phase);
            }
        }
    }

    debug!(
        first_line,
        headers = parsed.event.headers.len(),
        phases = parsed.event.phase_data.len(),
        malformed = parsed.discrepancies.len(),
        "parsed event block"
    );
    Ok(parsed)
}

fn decode_header(
    columns: &Columns,
    kind: HeaderKind,
    location: RecordLocation,
    discrepancies: &mut Vec<Discrepancy>,
) -> Header {
    let mut reader = FieldReader::new(columns, location, discrepancies);
    match kind {
        HeaderKind::Main => Header::Main(decode_main(&mut reader)),
        HeaderKind::Macroseismic => Header::Macroseismic(decode_macroseismic(&mut reader)),
        HeaderKind::Comment => Header::Comment(decode_comment(&reader)),
        HeaderKind::Error => Header::Error(decode_error(&mut reader)),
        HeaderKind::Waveform => Header::Waveform(decode_waveform(&reader)),
        HeaderKind::Other => Header::Other(decode_other(columns)),
    }
}
