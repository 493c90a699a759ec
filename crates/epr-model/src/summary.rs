//! Aggregate statistics over a field schema.

use serde::{Deserialize, Serialize};

use crate::field::{FieldDescriptor, NormalizedType};
use crate::schema::FieldSchema;

/// Number of fields of one normalized type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeCount {
    #[serde(rename = "type")]
    pub ui_type: NormalizedType,
    pub count: usize,
}

/// Number of fields in one section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionCount {
    pub name: String,
    pub field_count: usize,
}

/// Totals, type histogram and per-section counts for a schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSummary {
    pub title: String,
    pub version: String,
    pub total_sections: usize,
    pub total_fields: usize,
    /// Sorted by descending count; ties keep first-seen order.
    pub type_distribution: Vec<TypeCount>,
    /// In document order.
    pub sections: Vec<SectionCount>,
}

impl FieldSummary {
    pub fn from_schema(schema: &FieldSchema) -> Self {
        let sections: Vec<SectionCount> = schema
            .sections
            .iter()
            .map(|section| SectionCount {
                name: section.name.clone(),
                field_count: section.field_count(),
            })
            .collect();
        Self {
            title: format!("{} - Field Extraction Summary", schema.display_version()),
            version: schema.version.clone(),
            total_sections: schema.section_count(),
            total_fields: schema.field_count(),
            type_distribution: type_distribution(schema.fields()),
            sections,
        }
    }
}

/// Count descriptors per normalized type.
///
/// The result is ordered by descending count. Equal counts stay in the order
/// the type was first encountered, so the output is deterministic for a given
/// document.
pub fn type_distribution<'a>(
    fields: impl IntoIterator<Item = &'a FieldDescriptor>,
) -> Vec<TypeCount> {
    let mut counts: Vec<TypeCount> = Vec::new();
    for field in fields {
        match counts.iter_mut().find(|entry| entry.ui_type == field.ui_type) {
            Some(entry) => entry.count += 1,
            None => counts.push(TypeCount {
                ui_type: field.ui_type,
                count: 1,
            }),
        }
    }
    // sort_by is stable
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}
