#![deny(unsafe_code)]

pub mod context;
pub mod document;
pub mod error;
pub mod loaders;
pub mod paths;

pub use crate::context::{ContextLine, SourceContext};
pub use crate::document::PROTOCOLS_KEY;
pub use crate::error::{FailureKind, LoadError};
pub use crate::loaders::{
    load_field_schema, load_protocols, parse_field_schema, parse_protocols, read_source,
};
pub use crate::paths::{field_schema_path, protocols_path};
