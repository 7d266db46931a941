//! Schema gate tests against the bundled QuakeML subset schema.

use std::fs;
use std::path::PathBuf;

use nor2qml_ingest::{parse_block, read_event_blocks};
use nor2qml_map::{IdSequence, XmlElement, build_quakeml, to_xml_string};
use nor2qml_model::ConversionOptions;
use nor2qml_schema::{
    SchemaError, SchemaGate, SchemaOracle, ViolationDomain, ViolationKind, XsdSchema,
};

fn testdata(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../testdata")
        .join(name)
}

fn schema() -> XsdSchema {
    XsdSchema::load(&testdata("quakeml-1.2-subset.xsd")).expect("load schema")
}

fn helsinki(options: &ConversionOptions) -> XmlElement {
    let blocks = read_event_blocks(&testdata("helsinki.nor")).expect("read bulletin");
    let parsed = parse_block(&blocks[0]).expect("parse block");
    build_quakeml(&parsed.event, options, &mut IdSequence::new()).expect("map event")
}

#[test]
fn mapped_event_is_schema_valid() {
    let gate = SchemaGate::new(schema());
    let text = gate
        .check(&helsinki(&ConversionOptions::default()))
        .expect("valid document");
    assert!(text.contains("<type>explosion</type>"));

    let short = gate.check(&helsinki(&ConversionOptions::short()));
    assert!(short.is_ok(), "{short:?}");
}

#[test]
fn broken_schema_rejects_the_document() {
    let text = fs::read_to_string(testdata("quakeml-1.2-subset.xsd")).expect("read schema");
    let broken = text.replace(
        r#"<xs:complexType name="Identified">"#,
        r#"<xs:complexType name="Identified">
    <xs:sequence>
      <xs:element name="methodID" type="bed:ResourceReference"/>
    </xs:sequence>"#,
    );
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("broken.xsd");
    fs::write(&path, broken).expect("write schema");

    let gate = SchemaGate::new(XsdSchema::load(&path).expect("load broken schema"));
    let err = gate
        .check(&helsinki(&ConversionOptions::default()))
        .unwrap_err();

    let violations = err.violations();
    assert!(!violations.is_empty());
    for violation in violations {
        assert_eq!(violation.domain, ViolationDomain::Structure);
        assert_eq!(violation.kind, ViolationKind::MissingElement);
        assert!(violation.message.contains("methodID"), "{violation}");
    }
    assert!(
        violations
            .iter()
            .any(|violation| violation.path == "/quakeml/eventParameters")
    );
}

#[test]
fn unknown_event_type_is_an_enumeration_violation() {
    let text = to_xml_string(&helsinki(&ConversionOptions::default())).expect("serialize");
    let tampered = text.replace("<type>explosion</type>", "<type>volcano</type>");

    let err = schema().validate(&tampered).unwrap_err();
    let violations = err.violations();
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].domain, ViolationDomain::Datatype);
    assert_eq!(violations[0].kind, ViolationKind::EnumerationMismatch);
    assert_eq!(violations[0].path, "/quakeml/eventParameters/event/type");
}

#[test]
fn missing_public_id_is_reported() {
    let text = to_xml_string(&helsinki(&ConversionOptions::default())).expect("serialize");
    let tampered = text.replace(r#"<event publicID="smi:wh.atis.ids/event/">"#, "<event>");
    assert_ne!(text, tampered);

    let err = schema().validate(&tampered).unwrap_err();
    let kinds: Vec<ViolationKind> = err.violations().iter().map(|v| v.kind).collect();
    assert_eq!(kinds, vec![ViolationKind::MissingAttribute]);
}

#[test]
fn short_authority_fails_the_identifier_pattern() {
    let options = ConversionOptions::short().with_authority_id("x");
    let err = SchemaGate::new(schema())
        .check(&helsinki(&options))
        .unwrap_err();

    let first = &err.violations()[0];
    assert_eq!(first.domain, ViolationDomain::Attribute);
    assert_eq!(first.kind, ViolationKind::PatternMismatch);
    assert_eq!(first.path, "/quakeml/eventParameters/@publicID");
}

#[test]
fn missing_schema_file_is_an_io_error() {
    let err = XsdSchema::load(&testdata("missing.xsd")).unwrap_err();
    assert!(matches!(err, SchemaError::Io { .. }));
}
