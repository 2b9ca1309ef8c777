//! CLI error types

use std::io;

use thiserror::Error;

use crate::config::ConfigError;
use crate::translator::TranslateError;

/// CLI errors; every one ends the process with a non-zero status
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// Reading input or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Input is not a valid query node
    #[error("Invalid query JSON: {0}")]
    InvalidInput(#[from] serde_json::Error),

    /// A report could not be serialized for output
    #[error("Output serialization failed: {0}")]
    Output(#[source] serde_json::Error),

    /// Input was empty
    #[error("Empty input")]
    EmptyInput,

    /// Translation rejected the query
    #[error("{0}")]
    Translate(#[from] TranslateError),
}

impl CliError {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            CliError::Config(_) => "SEARCHBRIDGE_CLI_CONFIG_ERROR",
            CliError::Io(_) => "SEARCHBRIDGE_CLI_IO_ERROR",
            CliError::InvalidInput(_) | CliError::EmptyInput => "SEARCHBRIDGE_CLI_INVALID_INPUT",
            CliError::Output(_) => "SEARCHBRIDGE_CLI_OUTPUT_ERROR",
            CliError::Translate(err) => err.code().code(),
        }
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
