use std::path::PathBuf;

use serde::Serialize;

use epr_model::{FieldSummary, ProtocolRecord, Section};

/// How a report is written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// Fixed-width plain text.
    #[default]
    Text,
    /// `comfy-table` tables.
    Table,
    /// Pretty-printed JSON.
    Json,
}

/// Whether table output carries ANSI styling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TableStyling {
    /// Style only when stdout is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone)]
pub struct FieldsRequest {
    pub input: PathBuf,
    pub format: ReportFormat,
    pub styling: TableStyling,
}

#[derive(Debug, Clone)]
pub struct ProtocolsRequest {
    pub input: PathBuf,
    pub format: ReportFormat,
    pub styling: TableStyling,
}

/// JSON shape of `epr fields --format json`.
#[derive(Debug, Serialize)]
pub struct FieldsJson<'a> {
    pub source: String,
    pub summary: &'a FieldSummary,
    pub sections: &'a [Section],
}

/// JSON shape of `epr protocols --format json`.
#[derive(Debug, Serialize)]
pub struct ProtocolsJson<'a> {
    pub source: String,
    pub total: usize,
    pub protocols: &'a [ProtocolRecord],
}
