//! CLI argument definitions for the ePR report tools.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use epr_cli::types::ReportFormat;

#[derive(Parser)]
#[command(
    name = "epr",
    version,
    about = "ePR schema tools - Summarize AEPR field schemas and JRCALC protocols",
    long_about = "Summarize ambulance ePR documents.\n\n\
                  `fields` flattens an AEPR field schema and reports type and section counts.\n\
                  `protocols` checks a JRCALC protocol document and lists its protocols."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Summarize the fields of an AEPR field schema.
    Fields(FieldsArgs),

    /// Validate a JRCALC protocol document and list its protocols.
    Protocols(ProtocolsArgs),
}

#[derive(Parser)]
pub struct FieldsArgs {
    /// Path to the field schema JSON (default: $EPR_FIELD_SCHEMA or ./AEPR_Attributes.json).
    #[arg(value_name = "SCHEMA_JSON")]
    pub input: Option<PathBuf>,

    /// Report format.
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: ReportFormatArg,
}

#[derive(Parser)]
pub struct ProtocolsArgs {
    /// Path to the protocol JSON (default: $EPR_PROTOCOLS or ./JRCALC_Protocols.json).
    #[arg(value_name = "PROTOCOLS_JSON")]
    pub input: Option<PathBuf>,

    /// Report format.
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: ReportFormatArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    /// Fixed-width plain text.
    Text,
    /// Box-drawn tables.
    Table,
    Json,
}

impl From<ReportFormatArg> for ReportFormat {
    fn from(value: ReportFormatArg) -> Self {
        match value {
            ReportFormatArg::Text => ReportFormat::Text,
            ReportFormatArg::Table => ReportFormat::Table,
            ReportFormatArg::Json => ReportFormat::Json,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
