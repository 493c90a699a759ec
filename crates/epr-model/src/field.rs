//! Field descriptors and UI type normalization.
//!
//! A field schema labels each field with a free-form source type
//! ("Local List", "Numeric", ...). Form builders only understand a small
//! closed set of input widgets, so every label is folded into a
//! [`NormalizedType`] when the descriptor is built.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Allowed-values lists that stand in for a locally maintained list.
///
/// Only an exact match is discarded; any other list is kept verbatim.
pub const PLACEHOLDER_VALUE_LISTS: [&[&str]; 2] = [
    &["INSERT LOCAL LIST HERE"],
    &["INSERT LOCAL LIST HERE", "All drugs captured as SNOMED"],
];

/// Source type labels and the UI type they map to.
///
/// Labels not listed here (or a missing label) map to [`NormalizedType::Text`].
pub const TYPE_MAPPING: [(&str, NormalizedType); 6] = [
    ("Local List", NormalizedType::Dropdown),
    ("Numeric", NormalizedType::Number),
    ("Alphanumeric", NormalizedType::Text),
    ("Date", NormalizedType::Date),
    ("Time", NormalizedType::Time),
    ("Coordinate", NormalizedType::Text),
];

/// UI-facing input type of a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalizedType {
    /// Pick one entry from a list of allowed values.
    Dropdown,
    Number,
    /// Free text. Also the fallback for unknown source labels.
    Text,
    Date,
    Time,
}

impl NormalizedType {
    /// Map a source schema type label to its UI type.
    ///
    /// Matching is exact; absent or unrecognized labels give `Text`.
    pub fn from_source_label(label: Option<&str>) -> Self {
        let Some(label) = label else {
            return NormalizedType::Text;
        };
        TYPE_MAPPING
            .iter()
            .find(|(source, _)| *source == label)
            .map_or(NormalizedType::Text, |(_, normalized)| *normalized)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NormalizedType::Dropdown => "dropdown",
            NormalizedType::Number => "number",
            NormalizedType::Text => "text",
            NormalizedType::Date => "date",
            NormalizedType::Time => "time",
        }
    }
}

impl fmt::Display for NormalizedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `pad` keeps width/alignment flags working in report layouts.
        f.pad(self.as_str())
    }
}

/// Identifier of a schema field. Source documents use both numbers and strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldId {
    Integer(i64),
    /// Integers above `i64::MAX`.
    Unsigned(u64),
    Float(f64),
    Text(String),
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldId::Integer(value) => write!(f, "{value}"),
            FieldId::Unsigned(value) => write!(f, "{value}"),
            FieldId::Float(value) => write!(f, "{value}"),
            FieldId::Text(value) => f.write_str(value),
        }
    }
}

/// One schema field, flattened out of its section and normalized for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Name of the section the field belongs to.
    pub section: String,
    /// Key of the field within its section.
    pub key: String,
    pub id: Option<FieldId>,
    /// Normalized UI type.
    #[serde(rename = "type")]
    pub ui_type: NormalizedType,
    pub description: String,
    /// Allowed values, empty when the source only had a placeholder list.
    pub values: Vec<String>,
}

impl FieldDescriptor {
    /// Build a descriptor from raw field attributes.
    ///
    /// Applies the type mapping and the placeholder value filter; a missing
    /// description becomes the empty string.
    pub fn from_source(
        section: impl Into<String>,
        key: impl Into<String>,
        id: Option<FieldId>,
        source_type: Option<&str>,
        description: Option<String>,
        values: Vec<String>,
    ) -> Self {
        Self {
            section: section.into(),
            key: key.into(),
            id,
            ui_type: NormalizedType::from_source_label(source_type),
            description: description.unwrap_or_default(),
            values: filter_placeholder_values(values),
        }
    }
}

/// Returns true if `values` is exactly one of [`PLACEHOLDER_VALUE_LISTS`].
pub fn is_placeholder_list(values: &[String]) -> bool {
    PLACEHOLDER_VALUE_LISTS.iter().any(|placeholder| {
        placeholder.len() == values.len()
            && placeholder
                .iter()
                .zip(values)
                .all(|(expected, actual)| *expected == actual)
    })
}

/// Drop a placeholder allowed-values list, keep anything else unchanged.
pub fn filter_placeholder_values(values: Vec<String>) -> Vec<String> {
    if is_placeholder_list(&values) {
        Vec::new()
    } else {
        values
    }
}
