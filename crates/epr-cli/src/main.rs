//! ePR report CLI.

use clap::{ColorChoice, Parser};
use epr_cli::commands::{run_fields, run_protocols};
use epr_cli::logging::{LogConfig, LogFormat, init_logging};
use epr_cli::summary::render_error;
use epr_cli::types::{FieldsRequest, ProtocolsRequest, TableStyling};
use epr_standards::{field_schema_path, protocols_path};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("Error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let styling = table_styling(cli.color.color);
    let mut stdout = io::stdout().lock();
    let result = match cli.command {
        Command::Fields(args) => run_fields(
            &FieldsRequest {
                input: field_schema_path(args.input),
                format: args.format.into(),
                styling,
            },
            &mut stdout,
        ),
        Command::Protocols(args) => run_protocols(
            &ProtocolsRequest {
                input: protocols_path(args.input),
                format: args.format.into(),
                styling,
            },
            &mut stdout,
        ),
    };
    let exit_code = match result {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("{}", render_error(&error));
            1
        }
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config = config.with_log_file(cli.log_file.clone());
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}

fn table_styling(color: ColorChoice) -> TableStyling {
    match color {
        ColorChoice::Always => TableStyling::Always,
        ColorChoice::Never => TableStyling::Never,
        ColorChoice::Auto => TableStyling::Auto,
    }
}
