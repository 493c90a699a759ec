use std::io::Write;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use epr_model::FieldSummary;
use epr_standards::{load_field_schema, load_protocols};

use crate::summary::{
    parsing_banner, render_field_summary, render_field_tables, render_protocol_summary,
    render_protocol_table,
};
use crate::types::{FieldsJson, FieldsRequest, ProtocolsJson, ProtocolsRequest, ReportFormat};

/// Flatten a field schema and write its summary to `out`.
///
/// Nothing is written unless the whole document loads.
pub fn run_fields(request: &FieldsRequest, out: &mut dyn Write) -> Result<()> {
    let span = info_span!("fields", path = %request.input.display());
    let _guard = span.enter();

    let load_start = Instant::now();
    let schema = load_field_schema(&request.input)?;
    let summary = FieldSummary::from_schema(&schema);
    info!(
        version = %schema.version,
        section_count = summary.total_sections,
        field_count = summary.total_fields,
        duration_ms = load_start.elapsed().as_millis(),
        "field schema loaded"
    );

    let report = match request.format {
        ReportFormat::Text => render_field_summary(&summary),
        ReportFormat::Table => render_field_tables(&summary, request.styling),
        ReportFormat::Json => {
            let json = FieldsJson {
                source: request.input.display().to_string(),
                summary: &summary,
                sections: &schema.sections,
            };
            let mut text =
                serde_json::to_string_pretty(&json).context("serialize field report")?;
            text.push('\n');
            text
        }
    };
    out.write_all(report.as_bytes())
        .and_then(|()| out.flush())
        .context("write field report")?;
    Ok(())
}

/// Load a protocol document and write one row per protocol to `out`.
///
/// In text format the "Parsing JSON" banner is written before loading, so it
/// is the only output when loading fails.
pub fn run_protocols(request: &ProtocolsRequest, out: &mut dyn Write) -> Result<()> {
    let span = info_span!("protocols", path = %request.input.display());
    let _guard = span.enter();

    if request.format == ReportFormat::Text {
        out.write_all(parsing_banner(&request.input).as_bytes())
            .and_then(|()| out.flush())
            .context("write banner")?;
    }

    let load_start = Instant::now();
    let catalog = load_protocols(&request.input)?;
    info!(
        protocol_count = catalog.len(),
        step_count = catalog.total_steps(),
        duration_ms = load_start.elapsed().as_millis(),
        "protocols loaded"
    );

    let report = match request.format {
        ReportFormat::Text => render_protocol_summary(&catalog),
        ReportFormat::Table => render_protocol_table(&catalog, request.styling),
        ReportFormat::Json => {
            let json = ProtocolsJson {
                source: request.input.display().to_string(),
                total: catalog.len(),
                protocols: &catalog.protocols,
            };
            let mut text =
                serde_json::to_string_pretty(&json).context("serialize protocol report")?;
            text.push('\n');
            text
        }
    };
    out.write_all(report.as_bytes())
        .and_then(|()| out.flush())
        .context("write protocol report")?;
    Ok(())
}
