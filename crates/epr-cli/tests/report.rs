//! Rendering tests for the text and JSON reports.

use std::path::Path;

use epr_cli::summary::{
    fit, parsing_banner, render_error, render_field_summary, render_protocol_summary,
    render_protocol_table,
};
use epr_cli::types::TableStyling;
use epr_model::FieldSummary;
use epr_standards::{parse_field_schema, parse_protocols};

fn field_report(json: &str) -> String {
    let schema = parse_field_schema(Path::new("AEPR_Attributes.json"), json).expect("parse schema");
    render_field_summary(&FieldSummary::from_schema(&schema))
}

fn protocol_report(json: &str) -> String {
    let catalog = parse_protocols(Path::new("JRCALC_Protocols.json"), json).expect("parse protocols");
    render_protocol_summary(&catalog)
}

#[test]
fn numeric_and_untyped_fields() {
    let report = field_report(
        r#"{"AEPR_Standard_v1.0": {"Patient Details": {
            "age": {"id": 1, "type": "Numeric"},
            "notes": {"id": 2}
        }}}"#,
    );
    insta::assert_snapshot!(report, @r"
AEPR Standard v1.0 - Field Extraction Summary
=======================================================
Total sections: 1
Total fields:   2

Field type distribution:
  number      : 1
  text        : 1

Sections and field counts:
  Patient Details                                      2 fields
");
}

#[test]
fn histogram_ties_and_long_section_names() {
    let report = field_report(
        r#"{"AEPR_Standard_v1.0": {
            "Incident": {
                "location": {"type": "Coordinate"},
                "category": {"type": "Local List", "values": ["RTC", "Fall"]},
                "date": {"type": "Date"}
            },
            "Observations - a section name that is far too long to fit": {
                "avpu": {"type": "Local List", "values": ["INSERT LOCAL LIST HERE"]},
                "comment": {"type": "Alphanumeric"}
            }
        }}"#,
    );
    insta::assert_snapshot!(report, @r"
AEPR Standard v1.0 - Field Extraction Summary
=======================================================
Total sections: 2
Total fields:   5

Field type distribution:
  text        : 2
  dropdown    : 2
  date        : 1

Sections and field counts:
  Incident                                             3 fields
  Observations - a section name that is far too long   2 fields
");
}

#[test]
fn section_total_matches_field_total() {
    let schema = parse_field_schema(
        Path::new("AEPR_Attributes.json"),
        r#"{"V": {"A": {"x": {}, "y": {}}, "B": {}, "C": {"z": {"type": "Time"}}}}"#,
    )
    .expect("parse schema");
    let summary = FieldSummary::from_schema(&schema);
    let per_section: usize = summary.sections.iter().map(|s| s.field_count).sum();
    let histogram: usize = summary.type_distribution.iter().map(|t| t.count).sum();
    assert_eq!(summary.total_fields, 3);
    assert_eq!(per_section, summary.total_fields);
    assert_eq!(histogram, summary.total_fields);
    assert!(render_field_summary(&summary).contains("  B                                                    0 fields"));
}

#[test]
fn single_protocol_row() {
    let report = protocol_report(
        r#"{"protocols": [{"condition_id": "C1", "name": "Test", "category": "Cardiac", "steps": ["a", "b"]}]}"#,
    );
    insta::assert_snapshot!(report, @r"

✓ JSON valid! Total protocols: 1

Protocol Summary:
--------------------------------------------------------------------------------
condition_id                   name                      category        steps
--------------------------------------------------------------------------------
C1                             Test                      Cardiac         2
--------------------------------------------------------------------------------
");
}

#[test]
fn protocol_summary_starts_with_blank_line() {
    let report = protocol_report(r#"{"protocols": []}"#);
    assert!(
        report.starts_with("\n✓ JSON valid! Total protocols: 0\n\nProtocol Summary:\n"),
        "{report:?}"
    );
    assert!(report.ends_with(&format!("{}\n", "-".repeat(80))));
}

#[test]
fn missing_values_and_long_ids() {
    let report = protocol_report(
        r#"{"protocols": [
            {"condition_id": "C1", "name": "Test", "category": "Cardiac", "steps": ["a", "b"]},
            {"name": "Unnamed steps", "category": null},
            {"condition_id": "RESP-001-ASTHMA-ADULT-SEVERE-LIFE-THREATENING", "name": "Asthma",
             "category": "Respiratory", "steps": [1, 2, 3, 4, 5, 6, 7]}
        ]}"#,
    );
    insta::assert_snapshot!(report, @r"

✓ JSON valid! Total protocols: 3

Protocol Summary:
--------------------------------------------------------------------------------
condition_id                   name                      category        steps
--------------------------------------------------------------------------------
C1                             Test                      Cardiac         2
N/A                            Unnamed steps             N/A             0
RESP-001-ASTHMA-ADULT-SEVERE-L Asthma                    Respiratory     7
--------------------------------------------------------------------------------
");
}

#[test]
fn rendering_is_repeatable() {
    let json = r#"{"AEPR_Standard_v1.0": {"S": {"a": {"type": "Date"}, "b": {"type": "Time"}}}}"#;
    assert_eq!(field_report(json), field_report(json));
}

#[test]
fn banner_names_the_input() {
    assert_eq!(
        parsing_banner(Path::new("/data/JRCALC_Protocols.json")),
        "Parsing JSON from /data/JRCALC_Protocols.json...\n"
    );
}

#[test]
fn protocol_table_has_total_row() {
    let catalog = parse_protocols(
        Path::new("JRCALC_Protocols.json"),
        r#"{"protocols": [{"condition_id": "C1", "steps": [1, 2]}, {"condition_id": "C2", "steps": [3]}]}"#,
    )
    .expect("parse protocols");
    let table = render_protocol_table(&catalog, TableStyling::Never);
    assert!(table.starts_with("Protocols: 2\n"));
    assert!(table.contains("C1"));
    assert!(table.contains("TOTAL"));
    assert!(table.contains("2 protocols"));
}

#[test]
fn parse_errors_include_marked_context() {
    let text = "{\n  \"protocols\": [\n    {\"name\": \"Test\",}\n  ]\n}\n";
    let err = parse_protocols(Path::new("JRCALC_Protocols.json"), text).unwrap_err();
    let rendered = render_error(&anyhow::Error::new(err));
    let mut lines = rendered.lines();
    let first = lines.next().expect("headline");
    assert!(first.starts_with("JSON parse error at line 3: "), "{first}");
    assert!(rendered.contains(">>> 3:     {\"name\": \"Test\",}"), "{rendered}");
    assert!(rendered.contains("    1: {"), "{rendered}");
}

#[test]
fn structural_errors_have_no_context() {
    let err = parse_protocols(Path::new("JRCALC_Protocols.json"), "{}").unwrap_err();
    let rendered = render_error(&anyhow::Error::new(err));
    assert_eq!(rendered, "Error: Expected 'protocols' key at root level");
}

#[test]
fn fit_is_character_based() {
    assert_eq!(fit("Überdosis", 4), "Über");
}
