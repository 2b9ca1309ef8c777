//! CLI command implementations

use std::path::Path;

use crate::config::TranslatorConfig;
use crate::filter::FilterNode;
use crate::observability::Logger;
use crate::query::QueryNode;
use crate::translator::{QueryTranslator, TranslationExplain};

use super::args::{Command, OutputFormat};
use super::errors::{CliError, CliResult};
use super::io::{read_query, write_json, write_text};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Translate {
            config,
            input,
            format,
        } => translate(config.as_deref(), input.as_deref(), format),
        Command::Explain { config, input } => explain(config.as_deref(), input.as_deref()),
    }
}

/// Load configuration (or defaults) and apply its log level
fn load_translator(config_path: Option<&Path>) -> CliResult<QueryTranslator> {
    let config = match config_path {
        Some(path) => TranslatorConfig::load(path)?,
        None => TranslatorConfig::default(),
    };
    Logger::set_min_severity(config.severity()?);
    Ok(QueryTranslator::new(&config))
}

/// Translate one query and print the filter
pub fn translate(
    config_path: Option<&Path>,
    input: Option<&Path>,
    format: OutputFormat,
) -> CliResult<()> {
    let translator = load_translator(config_path)?;
    let query = read_query(input)?;
    let filter = translator.translate(&query)?;

    write_filter(&filter, format)
}

fn write_filter(filter: &FilterNode, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Document => write_json(&filter.to_document()),
        OutputFormat::Text => write_text(&filter.to_string()),
    }
}

/// Translate one query and print the explain report.
///
/// A rejected query is reported, not returned as an error.
pub fn explain(config_path: Option<&Path>, input: Option<&Path>) -> CliResult<()> {
    let translator = load_translator(config_path)?;
    let query = read_query(input)?;
    let report = explain_query(&translator, &query);

    write_json(&report_value(&report)?)
}

fn report_value(report: &TranslationExplain) -> CliResult<serde_json::Value> {
    serde_json::to_value(report).map_err(CliError::Output)
}

fn explain_query(translator: &QueryTranslator, query: &QueryNode) -> TranslationExplain {
    TranslationExplain::from_result(query, &translator.translate(query))
}
