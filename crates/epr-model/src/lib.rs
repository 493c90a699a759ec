//! Data model for ePR field schemas and clinical protocol documents.

pub mod field;
pub mod protocol;
pub mod schema;
pub mod summary;

pub use field::{
    FieldDescriptor, FieldId, NormalizedType, PLACEHOLDER_VALUE_LISTS, TYPE_MAPPING,
    filter_placeholder_values, is_placeholder_list,
};
pub use protocol::{MISSING_VALUE, ProtocolCatalog, ProtocolRecord};
pub use schema::{FieldSchema, Section};
pub use summary::{FieldSummary, SectionCount, TypeCount, type_distribution};
