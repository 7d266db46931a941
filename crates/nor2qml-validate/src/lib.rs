//! Nordic event validation.
//!
//! [`validate_event`] runs every header and phase row of an event through
//! its checks and collects the findings in one [`ValidationReport`]. The
//! event is never modified; a report with no discrepancies means the event
//! may be mapped to QuakeML.

pub mod checks;
pub mod util;

use tracing::debug;

use nor2qml_model::{Discrepancy, Header, Issue, NordicEvent, RecordLocation, ValidationReport};

/// Validate one event, collecting every discrepancy.
pub fn validate_event(event: &NordicEvent) -> ValidationReport {
    let mut report = ValidationReport::new();

    report.extend(at(RecordLocation::Event, checks::structure::check(event)));

    for (index, header) in event.headers.iter().enumerate() {
        let location = RecordLocation::Header {
            index,
            kind: header.kind(),
        };
        let issues = match header {
            Header::Main(main) => checks::main::check(main),
            Header::Macroseismic(macroseismic) => checks::macroseismic::check(macroseismic),
            Header::Comment(comment) => checks::text::check_comment(comment),
            Header::Error(error) => checks::error::check(error),
            Header::Waveform(waveform) => checks::text::check_waveform(waveform),
            Header::Other(_) => Vec::new(),
        };
        report.extend(at(location, issues));
    }

    for (index, phase) in event.phase_data.iter().enumerate() {
        report.extend(at(RecordLocation::Phase { index }, checks::phase::check(phase)));
    }

    debug!(
        headers = event.headers.len(),
        phases = event.phase_data.len(),
        discrepancies = report.len(),
        "validated event"
    );
    report
}

fn at(location: RecordLocation, issues: Vec<Issue>) -> impl Iterator<Item = Discrepancy> {
    issues
        .into_iter()
        .map(move |issue| Discrepancy::new(location, issue))
}
