//! Report rendering.
//!
//! The text layouts are fixed-width and line-oriented so existing log
//! scrapers keep working; the table layouts use `comfy-table`.

use std::path::Path;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use epr_model::{FieldSummary, MISSING_VALUE, ProtocolCatalog};
use epr_standards::LoadError;

use crate::types::TableStyling;

const SUMMARY_RULE_WIDTH: usize = 55;
const PROTOCOL_RULE_WIDTH: usize = 80;
const TYPE_WIDTH: usize = 12;
const SECTION_WIDTH: usize = 50;
const CONDITION_ID_WIDTH: usize = 30;
const NAME_WIDTH: usize = 25;
const CATEGORY_WIDTH: usize = 15;

/// Pad `value` to `width` characters, cutting it if longer.
pub fn fit(value: &str, width: usize) -> String {
    let clipped: String = value.chars().take(width).collect();
    format!("{clipped:<width$}")
}

fn join_lines(lines: Vec<String>) -> String {
    let mut text = lines.join("\n");
    text.push('\n');
    text
}

pub fn render_field_summary(summary: &FieldSummary) -> String {
    let mut lines = vec![
        summary.title.clone(),
        "=".repeat(SUMMARY_RULE_WIDTH),
        format!("Total sections: {}", summary.total_sections),
        format!("Total fields:   {}", summary.total_fields),
        String::new(),
        "Field type distribution:".to_string(),
    ];
    for entry in &summary.type_distribution {
        lines.push(format!(
            "  {:<width$}: {}",
            entry.ui_type.as_str(),
            entry.count,
            width = TYPE_WIDTH
        ));
    }
    lines.push(String::new());
    lines.push("Sections and field counts:".to_string());
    for section in &summary.sections {
        lines.push(format!(
            "  {} {:>3} fields",
            fit(&section.name, SECTION_WIDTH),
            section.field_count
        ));
    }
    join_lines(lines)
}

/// First line of the protocol report, printed before the file is read.
pub fn parsing_banner(path: &Path) -> String {
    format!("Parsing JSON from {}...\n", path.display())
}

pub fn render_protocol_summary(catalog: &ProtocolCatalog) -> String {
    let rule = "-".repeat(PROTOCOL_RULE_WIDTH);
    let mut lines = vec![
        String::new(),
        format!("✓ JSON valid! Total protocols: {}", catalog.len()),
        String::new(),
        "Protocol Summary:".to_string(),
        rule.clone(),
        format!(
            "{} {} {} steps",
            fit("condition_id", CONDITION_ID_WIDTH),
            fit("name", NAME_WIDTH),
            fit("category", CATEGORY_WIDTH)
        ),
        rule.clone(),
    ];
    for protocol in &catalog.protocols {
        lines.push(format!(
            "{} {} {} {}",
            fit(protocol.condition_id_or_default(), CONDITION_ID_WIDTH),
            fit(protocol.name_or_default(), NAME_WIDTH),
            fit(protocol.category_or_default(), CATEGORY_WIDTH),
            protocol.step_count
        ));
    }
    lines.push(rule);
    join_lines(lines)
}

/// Type distribution and section tables for `--format table`.
pub fn field_summary_tables(summary: &FieldSummary, styling: TableStyling) -> (Table, Table) {
    let mut types = Table::new();
    types.set_header(vec![header_cell("Type"), header_cell("Fields")]);
    apply_table_style(&mut types, styling);
    align_column(&mut types, 1, CellAlignment::Right);
    for entry in &summary.type_distribution {
        types.add_row(vec![
            Cell::new(entry.ui_type.as_str()).fg(Color::Blue),
            Cell::new(entry.count),
        ]);
    }
    types.add_row(vec![total_cell("TOTAL"), total_cell(summary.total_fields)]);

    let mut sections = Table::new();
    sections.set_header(vec![header_cell("Section"), header_cell("Fields")]);
    apply_table_style(&mut sections, styling);
    align_column(&mut sections, 1, CellAlignment::Right);
    for section in &summary.sections {
        sections.add_row(vec![
            Cell::new(&section.name),
            count_cell(section.field_count),
        ]);
    }
    sections.add_row(vec![
        total_cell(format!("{} sections", summary.total_sections)),
        total_cell(summary.total_fields),
    ]);
    (types, sections)
}

pub fn render_field_tables(summary: &FieldSummary, styling: TableStyling) -> String {
    let (types, sections) = field_summary_tables(summary, styling);
    format!(
        "{}\n{}\n\nField type distribution:\n{types}\n\nSections and field counts:\n{sections}\n",
        summary.title,
        "=".repeat(SUMMARY_RULE_WIDTH)
    )
}

pub fn protocol_table(catalog: &ProtocolCatalog, styling: TableStyling) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Condition ID"),
        header_cell("Name"),
        header_cell("Category"),
        header_cell("Steps"),
    ]);
    apply_table_style(&mut table, styling);
    align_column(&mut table, 3, CellAlignment::Right);
    for protocol in &catalog.protocols {
        table.add_row(vec![
            value_cell(protocol.condition_id_or_default()).add_attribute(Attribute::Bold),
            value_cell(protocol.name_or_default()),
            value_cell(protocol.category_or_default()),
            count_cell(protocol.step_count),
        ]);
    }
    table.add_row(vec![
        total_cell("TOTAL"),
        total_cell(format!("{} protocols", catalog.len())),
        dim_cell("-"),
        total_cell(catalog.total_steps()),
    ]);
    table
}

pub fn render_protocol_table(catalog: &ProtocolCatalog, styling: TableStyling) -> String {
    format!(
        "Protocols: {}\n{}\n",
        catalog.len(),
        protocol_table(catalog, styling)
    )
}

/// Diagnostic text for a failed command.
///
/// Parse failures are followed by the source lines around the failure.
pub fn render_error(error: &anyhow::Error) -> String {
    let Some(load) = error.downcast_ref::<LoadError>() else {
        return format!("Error: {error:#}");
    };
    match load.source_context() {
        Some(context) if !context.is_empty() => format!("{load}\n{context}"),
        _ => format!("Error: {load}"),
    }
}

pub fn apply_table_style(table: &mut Table, styling: TableStyling) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    match styling {
        TableStyling::Auto => {}
        TableStyling::Always => {
            table.enforce_styling();
        }
        TableStyling::Never => {
            table.force_no_tty();
        }
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn total_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn value_cell(value: &str) -> Cell {
    if value == MISSING_VALUE {
        dim_cell(value)
    } else {
        Cell::new(value)
    }
}

fn count_cell(count: usize) -> Cell {
    if count == 0 {
        dim_cell(count)
    } else {
        Cell::new(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
