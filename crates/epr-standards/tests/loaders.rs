use std::fs;
use std::path::{Path, PathBuf};

use epr_model::{FieldId, NormalizedType};
use epr_standards::{
    FailureKind, LoadError, load_field_schema, load_protocols, parse_field_schema,
    parse_protocols,
};

const SCHEMA: &str = r#"{
  "AEPR_Standard_v1.0": {
    "Patient Details": {
      "age": {"id": 101, "type": "Numeric", "description": "Age in years"},
      "notes": {"id": "PD2"}
    },
    "Medication": {
      "drug": {"type": "Local List", "values": ["INSERT LOCAL LIST HERE", "All drugs captured as SNOMED"]},
      "route": {"type": "Local List", "values": ["Oral", "IV"]},
      "given_at": {"type": "Time", "description": null}
    }
  }
}"#;

fn write_temp(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write input");
    path
}

fn schema_path() -> PathBuf {
    PathBuf::from("AEPR_Attributes.json")
}

fn protocols_path() -> PathBuf {
    PathBuf::from("JRCALC_Protocols.json")
}

#[test]
fn loads_field_schema_from_disk() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_temp(dir.path(), "AEPR_Attributes.json", SCHEMA);

    let schema = load_field_schema(&path).expect("load schema");

    assert_eq!(schema.version, "AEPR_Standard_v1.0");
    assert_eq!(schema.section_count(), 2);
    assert_eq!(schema.field_count(), 5);
}

#[test]
fn keeps_document_order() {
    let schema = parse_field_schema(&schema_path(), SCHEMA).expect("parse schema");

    let sections: Vec<&str> = schema.sections.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(sections, vec!["Patient Details", "Medication"]);
    let keys: Vec<&str> = schema.fields().map(|f| f.key.as_str()).collect();
    assert_eq!(keys, vec!["age", "notes", "drug", "route", "given_at"]);
}

#[test]
fn normalizes_field_attributes() {
    let schema = parse_field_schema(&schema_path(), SCHEMA).expect("parse schema");

    let details = schema.section("Patient Details").expect("section");
    let age = &details.fields[0];
    assert_eq!(age.ui_type, NormalizedType::Number);
    assert_eq!(age.id, Some(FieldId::Integer(101)));
    assert_eq!(age.description, "Age in years");
    assert_eq!(age.section, "Patient Details");

    let notes = &details.fields[1];
    assert_eq!(notes.ui_type, NormalizedType::Text);
    assert_eq!(notes.id, Some(FieldId::Text("PD2".to_string())));
    assert_eq!(notes.description, "");

    let medication = schema.section("Medication").expect("section");
    assert!(medication.fields[0].values.is_empty());
    assert_eq!(medication.fields[1].values, vec!["Oral", "IV"]);
    assert_eq!(medication.fields[2].ui_type, NormalizedType::Time);
    assert_eq!(medication.fields[2].description, "");
    assert_eq!(medication.fields[2].id, None);
}

#[test]
fn empty_document_has_no_root_key() {
    let err = parse_field_schema(&schema_path(), "{}").unwrap_err();
    assert!(matches!(err, LoadError::RootKeyCount { found: 0, .. }));
    assert_eq!(err.kind(), FailureKind::Structural);
}

#[test]
fn two_root_keys_are_rejected() {
    let err = parse_field_schema(&schema_path(), r#"{"v1": {}, "v2": {}}"#).unwrap_err();
    assert!(matches!(err, LoadError::RootKeyCount { found: 2, .. }));
}

#[test]
fn malformed_values_name_the_field() {
    let text = r#"{"V": {"Vitals": {"pulse": {"type": "Numeric", "values": 5}}}}"#;
    let err = parse_field_schema(&schema_path(), text).unwrap_err();
    match &err {
        LoadError::InvalidStructure { location, .. } => {
            assert!(location.contains("pulse.values"), "location: {location}");
        }
        other => panic!("expected InvalidStructure, got {other:?}"),
    }
    assert_eq!(err.kind(), FailureKind::Structural);
}

#[test]
fn section_must_be_an_object() {
    let text = r#"{"V": {"Vitals": ["pulse"]}}"#;
    let err = parse_field_schema(&schema_path(), text).unwrap_err();
    assert_eq!(err.kind(), FailureKind::Structural);
}

#[test]
fn syntax_error_wins_over_shape_error() {
    // `values` has the wrong type and the document is also truncated.
    let text = "{\"V\": {\"S\": {\"f\": {\"values\": 1}}}\n";
    let err = parse_field_schema(&schema_path(), text).unwrap_err();
    assert_eq!(err.kind(), FailureKind::Parse);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = load_field_schema(&dir.path().join("absent.json")).unwrap_err();
    assert_eq!(err.kind(), FailureKind::Io);
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn parses_protocol_records() {
    let text = r#"{"protocols": [
        {"condition_id": "C1", "name": "Test", "category": "Cardiac", "steps": ["a", "b"]},
        {"name": "Unnamed steps", "steps": "not a list"},
        {}
    ]}"#;
    let catalog = parse_protocols(&protocols_path(), text).expect("parse protocols");

    assert_eq!(catalog.len(), 3);
    let first = &catalog.protocols[0];
    assert_eq!(first.condition_id_or_default(), "C1");
    assert_eq!(first.name_or_default(), "Test");
    assert_eq!(first.category_or_default(), "Cardiac");
    assert_eq!(first.step_count, 2);
    assert_eq!(catalog.protocols[1].step_count, 0);
    assert_eq!(catalog.protocols[1].condition_id_or_default(), "N/A");
    assert_eq!(catalog.protocols[2].category_or_default(), "N/A");
}

#[test]
fn missing_protocols_key() {
    let err = parse_protocols(&protocols_path(), "{}").unwrap_err();
    assert!(matches!(err, LoadError::MissingKey { ref key, .. } if key == "protocols"));
    assert!(err.to_string().contains("'protocols'"));
    assert_eq!(err.kind(), FailureKind::Structural);
}

#[test]
fn protocols_must_be_an_array() {
    let err = parse_protocols(&protocols_path(), r#"{"protocols": {}}"#).unwrap_err();
    assert!(matches!(err, LoadError::InvalidStructure { .. }));
}

#[test]
fn truncated_protocols_report_context() {
    let dir = tempfile::tempdir().expect("temp dir");
    let text = "{\n  \"protocols\": [\n    {\"condition_id\": \"C1\",\n      \"name\" \"Test\"}\n  ]\n}\n";
    let path = write_temp(dir.path(), "JRCALC_Protocols.json", text);

    let err = load_protocols(&path).unwrap_err();

    let LoadError::Parse { line, context, .. } = &err else {
        panic!("expected parse error, got {err:?}");
    };
    assert_eq!(*line, 4);
    assert_eq!(err.kind(), FailureKind::Parse);
    insta::assert_snapshot!(context.to_string(), @r#"
        2:   "protocols": [
        3:     {"condition_id": "C1",
    >>> 4:       "name" "Test"}
        5:   ]
    "#);
}

#[test]
fn end_of_input_headline_matches_marked_line() {
    let text = "{\n  \"protocols\": [\n";
    let err = parse_protocols(&protocols_path(), text).unwrap_err();

    let LoadError::Parse { line, context, .. } = &err else {
        panic!("expected parse error, got {err:?}");
    };
    assert_eq!(*line, 2);
    assert_eq!(context.error_line(), Some(2));
    assert!(err.to_string().starts_with("JSON parse error at line 2: "), "{err}");
    assert!(context.to_string().ends_with(">>> 2:   \"protocols\": ["));
}
