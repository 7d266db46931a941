//! Integration tests for event validation.

use chrono::NaiveDate;
use proptest::prelude::*;

use nor2qml_model::{
    CommentHeader, ErrorHeader, Header, HeaderKind, Issue, IssueCategory, MainHeader,
    NordicEvent, OtherHeader, PhaseData, RecordLocation, WaveformHeader,
};
use nor2qml_validate::validate_event;

fn main_header() -> MainHeader {
    MainHeader {
        date: NaiveDate::from_ymd_opt(2021, 3, 15),
        hour: Some(3),
        minute: Some(7),
        second: Some(9.5),
        epicenter_latitude: Some(61.234),
        epicenter_longitude: Some(24.567),
        depth: Some(10.0),
        event_desc_id: Some('E'),
        magnitude_1: Some(2.3),
        type_of_magnitude_1: Some('L'),
        ..MainHeader::default()
    }
}

fn phase(station: &str) -> PhaseData {
    PhaseData {
        station_code: Some(station.to_string()),
        phase_type: Some("P".to_string()),
        hour: Some(3),
        minute: Some(7),
        second: Some(15.3),
        ..PhaseData::default()
    }
}

#[test]
fn valid_event_has_empty_report() {
    let event = NordicEvent::new()
        .with_header(Header::Main(main_header()))
        .with_header(Header::Comment(CommentHeader {
            h_comment: Some("Felt in Helsinki".to_string()),
        }))
        .with_header(Header::Other(OtherHeader {
            type_code: 'H',
            text: String::new(),
        }))
        .with_phase(phase("HEL"));

    let report = validate_event(&event);
    assert!(report.is_valid(), "{:?}", report.discrepancies);
}

#[test]
fn first_header_must_be_main() {
    let event = NordicEvent::new()
        .with_header(Header::Comment(CommentHeader {
            h_comment: Some("x".to_string()),
        }))
        .with_header(Header::Main(main_header()));

    let report = validate_event(&event);
    assert_eq!(report.len(), 1);
    let discrepancy = &report.discrepancies[0];
    assert_eq!(discrepancy.location, RecordLocation::Event);
    assert_eq!(
        discrepancy.issue,
        Issue::FirstHeaderNotMain {
            found: Some(HeaderKind::Comment)
        }
    );
}

#[test]
fn collects_every_discrepancy_with_location() {
    let event = NordicEvent::new()
        .with_header(Header::Main(MainHeader {
            hour: Some(27),
            ..main_header()
        }))
        .with_header(Header::Error(ErrorHeader {
            depth_error: Some(-1.5),
            ..ErrorHeader::default()
        }))
        .with_header(Header::Waveform(WaveformHeader {
            waveform_info: None,
        }))
        .with_phase(phase("HEL"))
        .with_phase(PhaseData {
            minute: Some(60),
            ..phase("KEV")
        });

    let report = validate_event(&event);
    let rendered: Vec<String> = report.discrepancies.iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        vec![
            "[NRD003] header 1 (main): hour 27 outside [0, 23]",
            "[NRD004] header 2 (error): depth_error -1.5 must not be negative",
            "[NRD005] header 3 (waveform): waveform_info is empty",
            "[NRD003] phase 2: minute 60 outside [0, 59]",
        ]
    );
    assert_eq!(report.count_in(IssueCategory::Range), 3);
}

#[test]
fn event_without_headers_is_invalid() {
    let event = NordicEvent::new().with_phase(phase("HEL"));
    let report = validate_event(&event);
    assert_eq!(
        report.discrepancies[0].issue,
        Issue::FirstHeaderNotMain { found: None }
    );
}

fn non_main_header() -> impl Strategy<Value = Header> {
    prop_oneof![
        Just(Header::Comment(CommentHeader {
            h_comment: Some("comment".to_string())
        })),
        Just(Header::Error(ErrorHeader::default())),
        Just(Header::Waveform(WaveformHeader {
            waveform_info: Some("file".to_string())
        })),
        Just(Header::Other(OtherHeader {
            type_code: 'I',
            text: String::new()
        })),
    ]
}

proptest! {
    #[test]
    fn event_not_starting_with_main_is_never_valid(
        first in non_main_header(),
        mains in 0usize..3,
        phases in 0usize..4,
    ) {
        let mut event = NordicEvent::new().with_header(first);
        for _ in 0..mains {
            event = event.with_header(Header::Main(main_header()));
        }
        for _ in 0..phases {
            event = event.with_phase(phase("HEL"));
        }
        let report = validate_event(&event);
        prop_assert!(!report.is_valid());
        prop_assert_eq!(report.discrepancies[0].issue.code(), "NRD001");
    }

    #[test]
    fn in_range_clock_values_pass(hour in 0u8..24, minute in 0u8..60, second in 0.0f64..60.0) {
        let event = NordicEvent::new().with_header(Header::Main(MainHeader {
            hour: Some(hour),
            minute: Some(minute),
            second: Some(second),
            ..main_header()
        }));
        prop_assert!(validate_event(&event).is_valid());
    }
}
