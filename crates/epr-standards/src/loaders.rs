use std::path::Path;

use serde::de::IgnoredAny;
use serde_json::Value;
use serde_json::error::Category;
use tracing::debug;

use epr_model::{FieldDescriptor, FieldSchema, ProtocolCatalog, ProtocolRecord, Section};

use crate::document::{FieldSchemaWire, PROTOCOLS_KEY};
use crate::error::{LoadError, bare_message};

/// Read a whole input file.
///
/// The text is returned so that parse diagnostics can quote it without
/// opening the file again.
pub fn read_source(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|source| LoadError::io(path, source))
}

pub fn load_field_schema(path: &Path) -> Result<FieldSchema, LoadError> {
    let text = read_source(path)?;
    parse_field_schema(path, &text)
}

pub fn load_protocols(path: &Path) -> Result<ProtocolCatalog, LoadError> {
    let text = read_source(path)?;
    parse_protocols(path, &text)
}

/// Parse a field schema document and flatten it into descriptors.
///
/// The document must hold exactly one root key (the schema version) whose
/// value maps section names to field maps. `path` is only used for
/// diagnostics.
///
/// # Errors
///
/// - [`LoadError::Parse`] if `text` is not well-formed JSON.
/// - [`LoadError::RootKeyCount`] if there is not exactly one root key.
/// - [`LoadError::InvalidStructure`] if a section, field or attribute has
///   the wrong type; the location names the offending element.
pub fn parse_field_schema(path: &Path, text: &str) -> Result<FieldSchema, LoadError> {
    // Syntax first, so a malformed file is always reported as such even when
    // an earlier element also has the wrong shape.
    serde_json::from_str::<IgnoredAny>(text).map_err(|err| LoadError::parse(path, text, &err))?;

    let mut deserializer = serde_json::Deserializer::from_str(text);
    let wire: FieldSchemaWire = match serde_path_to_error::deserialize(&mut deserializer) {
        Ok(wire) => wire,
        Err(err) => {
            let location = location_label(&err.path().to_string());
            let source = err.into_inner();
            return Err(match source.classify() {
                Category::Data => LoadError::invalid(path, location, bare_message(&source)),
                Category::Io | Category::Syntax | Category::Eof => {
                    LoadError::parse(path, text, &source)
                }
            });
        }
    };

    let found = wire.len();
    let mut roots = wire.into_iter();
    let (version, sections) = match (roots.next(), roots.next()) {
        (Some(root), None) => root,
        _ => {
            return Err(LoadError::RootKeyCount {
                path: path.to_path_buf(),
                found,
            });
        }
    };

    let mut schema = FieldSchema::new(version);
    for (section_name, fields) in sections {
        let mut section = Section::new(section_name.clone());
        for (key, field) in fields {
            section.fields.push(FieldDescriptor::from_source(
                &section_name,
                key,
                field.id,
                field.source_type.as_deref(),
                field.description,
                field.values.unwrap_or_default(),
            ));
        }
        debug!(
            section = %section.name,
            field_count = section.field_count(),
            "section flattened"
        );
        schema.sections.push(section);
    }
    debug!(
        version = %schema.version,
        section_count = schema.section_count(),
        field_count = schema.field_count(),
        "field schema parsed"
    );
    Ok(schema)
}

/// Parse a protocol document.
///
/// # Errors
///
/// - [`LoadError::Parse`] if `text` is not well-formed JSON.
/// - [`LoadError::MissingKey`] if there is no root `protocols` key.
/// - [`LoadError::InvalidStructure`] if `protocols` is not an array of
///   objects.
pub fn parse_protocols(path: &Path, text: &str) -> Result<ProtocolCatalog, LoadError> {
    let document: Value =
        serde_json::from_str(text).map_err(|err| LoadError::parse(path, text, &err))?;
    let Some(protocols) = document.get(PROTOCOLS_KEY) else {
        return Err(LoadError::MissingKey {
            path: path.to_path_buf(),
            key: PROTOCOLS_KEY.to_string(),
        });
    };
    let Some(entries) = protocols.as_array() else {
        return Err(LoadError::invalid(
            path,
            PROTOCOLS_KEY,
            "expected an array of protocol records",
        ));
    };
    let records = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| protocol_record(path, index, entry))
        .collect::<Result<Vec<_>, _>>()?;
    debug!(protocol_count = records.len(), "protocols parsed");
    Ok(ProtocolCatalog::new(records))
}

fn protocol_record(path: &Path, index: usize, entry: &Value) -> Result<ProtocolRecord, LoadError> {
    let Some(object) = entry.as_object() else {
        return Err(LoadError::invalid(
            path,
            format!("{PROTOCOLS_KEY}[{index}]"),
            "expected a protocol object",
        ));
    };
    Ok(ProtocolRecord {
        condition_id: display_text(object.get("condition_id")),
        name: display_text(object.get("name")),
        category: display_text(object.get("category")),
        step_count: object
            .get("steps")
            .and_then(Value::as_array)
            .map_or(0, Vec::len),
    })
}

/// Strings verbatim, other scalars as JSON text, `null` as absent.
fn display_text(value: Option<&Value>) -> Option<String> {
    match value {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text.clone()),
        Some(other) => Some(other.to_string()),
    }
}

fn location_label(path: &str) -> String {
    if path.is_empty() || path == "." {
        "<root>".to_string()
    } else {
        path.to_string()
    }
}
