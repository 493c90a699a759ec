//! Flattened field schema.

use serde::{Deserialize, Serialize};

use crate::field::FieldDescriptor;

/// A named group of fields, in document order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub name: String,
    pub fields: Vec<FieldDescriptor>,
}

impl Section {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}

/// Every field of a schema document, grouped by section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSchema {
    /// The document's single root key, e.g. `AEPR_Standard_v1.0`.
    pub version: String,
    pub sections: Vec<Section>,
}

impl FieldSchema {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            sections: Vec::new(),
        }
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub fn field_count(&self) -> usize {
        self.sections.iter().map(Section::field_count).sum()
    }

    /// All descriptors, section by section.
    pub fn fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.sections.iter().flat_map(|section| section.fields.iter())
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.name == name)
    }

    /// Human-readable version label: underscores become spaces.
    pub fn display_version(&self) -> String {
        self.version.replace('_', " ")
    }
}
