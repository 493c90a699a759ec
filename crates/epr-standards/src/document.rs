//! Wire shapes of the input documents.
//!
//! These mirror the JSON as written by the standards bodies and are
//! converted into `epr_model` types by the loaders.

use indexmap::IndexMap;
use serde::Deserialize;

use epr_model::FieldId;

/// Root key of a protocol document.
pub const PROTOCOLS_KEY: &str = "protocols";

/// `{ "<version>": { "<section>": { "<field>": { ... } } } }`
///
/// `IndexMap` keeps document order, which the section listing depends on.
pub(crate) type FieldSchemaWire = IndexMap<String, IndexMap<String, IndexMap<String, FieldWire>>>;

/// Attributes of one field. Every member is optional and `null` counts as
/// absent; members not listed here are ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct FieldWire {
    #[serde(default)]
    pub id: Option<FieldId>,
    #[serde(default, rename = "type")]
    pub source_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub values: Option<Vec<String>>,
}
