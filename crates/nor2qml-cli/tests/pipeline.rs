//! End-to-end tests of the convert command.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;

use nor2qml_cli::cli::{Cli, Command, ConvertArgs};
use nor2qml_cli::commands::run_convert;
use nor2qml_cli::types::EventStatus;

fn testdata(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../testdata")
        .join(name)
}

fn convert_args(input: &Path, output_dir: &Path, extra: &[&str]) -> ConvertArgs {
    let schema = testdata("quakeml-1.2-subset.xsd");
    let mut argv = vec![
        "nor2qml".to_string(),
        "convert".to_string(),
        input.display().to_string(),
        "--schema".to_string(),
        schema.display().to_string(),
        "--output-dir".to_string(),
        output_dir.display().to_string(),
    ];
    argv.extend(extra.iter().map(|arg| (*arg).to_string()));
    match Cli::try_parse_from(argv).expect("parse arguments").command {
        Command::Convert(args) => args,
        Command::Codes => panic!("convert command expected"),
    }
}

fn written_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .map(|entries| {
            entries
                .filter_map(Result::ok)
                .map(|entry| entry.file_name().to_string_lossy().into_owned())
                .collect()
        })
        .unwrap_or_default();
    names.sort();
    names
}

#[test]
fn valid_event_is_written_under_its_origin_time() {
    let out = tempfile::tempdir().expect("temp dir");
    let args = convert_args(&testdata("helsinki.nor"), out.path(), &[]);

    let result = run_convert(&args).expect("conversion");
    assert!(!result.has_errors);
    assert_eq!(result.events.len(), 1);
    assert_eq!(result.events[0].status, EventStatus::Converted);
    assert_eq!(result.events[0].event_type.as_deref(), Some("explosion"));

    assert_eq!(written_files(out.path()), vec!["2021074030709.xml"]);
    let text = fs::read_to_string(out.path().join("2021074030709.xml")).expect("read output");
    assert!(text.starts_with(r#"<?xml version="1.0" encoding="utf-8" standalone="yes"?>"#));
    assert!(text.contains("<type>explosion</type>"));
    assert!(text.contains("smi:wh.atis.ids/path/to/pick/3"));
}

#[test]
fn invalid_event_writes_nothing() {
    let out = tempfile::tempdir().expect("temp dir");
    let args = convert_args(&testdata("invalid_hour.nor"), out.path(), &[]);

    let result = run_convert(&args).expect("conversion runs");
    assert!(result.has_errors);
    let event = &result.events[0];
    assert_eq!(event.status, EventStatus::Invalid);
    assert!(event.output.is_none());
    assert!(
        event
            .discrepancies
            .iter()
            .any(|d| d.issue.code() == "NRD003" && d.issue.field() == Some("hour"))
    );
    assert!(written_files(out.path()).is_empty());
}

#[test]
fn broken_schema_aborts_without_output() {
    let out = tempfile::tempdir().expect("temp dir");
    let schema = fs::read_to_string(testdata("quakeml-1.2-subset.xsd")).expect("read schema");
    let broken = schema.replace(
        r#"<xs:element name="time" type="bed:TimeQuantity"/>"#,
        r#"<xs:element name="time" type="bed:TimeQuantity"/>
          <xs:element name="methodID" type="bed:ResourceReference"/>"#,
    );
    let schema_path = out.path().join("broken.xsd");
    fs::write(&schema_path, broken).expect("write schema");

    let output_dir = out.path().join("quakeml");
    let mut args = convert_args(&testdata("helsinki.nor"), &output_dir, &[]);
    args.schema = Some(schema_path);

    let err = run_convert(&args).unwrap_err();
    assert!(format!("{err:#}").contains("not valid QuakeML"));
    assert!(!output_dir.exists());
}

#[test]
fn all_events_share_one_identifier_sequence() {
    let out = tempfile::tempdir().expect("temp dir");
    let report = out.path().join("report.json");
    let report_arg = report.display().to_string();
    let args = convert_args(
        &testdata("two_events.nor"),
        out.path(),
        &["--all-events", "--report", &report_arg],
    );

    let result = run_convert(&args).expect("conversion");
    assert!(!result.has_errors);
    assert_eq!(result.events.len(), 2);
    assert_eq!(result.events[1].first_line, 11);

    let second = fs::read_to_string(out.path().join("2021075224530.xml")).expect("second event");
    assert!(second.contains("smi:wh.atis.ids/path/to/pick/4"));
    assert!(!second.contains("smi:wh.atis.ids/path/to/pick/1<"));

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report).expect("read report")).expect("json");
    assert_eq!(json["events"].as_array().map(Vec::len), Some(2));
    assert_eq!(json["events"][0]["status"], "converted");
}

#[test]
fn only_first_event_without_all_events() {
    let out = tempfile::tempdir().expect("temp dir");
    let args = convert_args(&testdata("two_events.nor"), out.path(), &[]);

    let result = run_convert(&args).expect("conversion");
    assert_eq!(result.events.len(), 1);
    assert_eq!(written_files(out.path()), vec!["2021074030709.xml"]);
}

#[test]
fn dry_run_checks_without_writing() {
    let out = tempfile::tempdir().expect("temp dir");
    let args = convert_args(&testdata("helsinki.nor"), out.path(), &["--dry-run", "--short"]);

    let result = run_convert(&args).expect("conversion");
    assert!(!result.has_errors);
    assert_eq!(result.events[0].status, EventStatus::Checked);
    assert!(written_files(out.path()).is_empty());
}

#[test]
fn missing_input_is_reported() {
    let out = tempfile::tempdir().expect("temp dir");
    let args = convert_args(&testdata("nope.nor"), out.path(), &[]);

    let err = run_convert(&args).unwrap_err();
    assert!(format!("{err:#}").contains("does not exist"));
}

fn write_nordic(dir: &Path, name: &str, text: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, text).expect("write Nordic file");
    path
}

#[test]
fn events_in_the_same_second_keep_separate_files() {
    let out = tempfile::tempdir().expect("temp dir");
    let block = fs::read_to_string(testdata("helsinki.nor")).expect("read fixture");
    let input = write_nordic(out.path(), "twice.nor", &format!("{block}\n{block}"));
    let output_dir = out.path().join("quakeml");
    let args = convert_args(&input, &output_dir, &["--all-events"]);

    let result = run_convert(&args).expect("conversion");
    assert!(!result.has_errors);
    assert_eq!(result.events.len(), 2);
    assert_eq!(
        written_files(&output_dir),
        vec!["2021074030709.xml", "2021074030709_2.xml"]
    );
    let second = fs::read_to_string(output_dir.join("2021074030709_2.xml")).expect("second");
    assert!(second.contains("smi:wh.atis.ids/path/to/pick/6"));
    assert_eq!(
        result.events[1].output.as_deref(),
        Some(output_dir.join("2021074030709_2.xml").as_path())
    );
}

#[test]
fn minus_flag_dates_the_pick_on_the_previous_day() {
    let out = tempfile::tempdir().expect("temp dir");
    let input = write_nordic(
        out.path(),
        "midnight.nor",
        " 2021 0316 0007 09.5 LE 61.234  24.567 10.0  HEL  3 0.8 2.3LHEL                1\n\
         \x20  KEVBZ I   P  D-2359 58.10\n",
    );
    let output_dir = out.path().join("quakeml");
    let args = convert_args(&input, &output_dir, &[]);

    let result = run_convert(&args).expect("conversion");
    assert!(!result.has_errors, "{:?}", result.events[0].discrepancies);
    let text = fs::read_to_string(output_dir.join("2021075000709.xml")).expect("output");
    assert!(text.contains("<value>2021-03-15T23:59:58Z</value>"));
    assert!(text.contains("<polarity>negative</polarity>"));
}

#[test]
fn missing_input_is_reported_before_the_schema_is_read() {
    let out = tempfile::tempdir().expect("temp dir");
    let mut args = convert_args(&testdata("nope.nor"), out.path(), &[]);
    args.schema = Some(out.path().join("absent.xsd"));

    let err = run_convert(&args).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("does not exist"), "{message}");
    assert!(!message.contains("schema"), "{message}");
}
