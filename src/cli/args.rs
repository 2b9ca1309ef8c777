//! CLI argument definitions using clap
//!
//! Commands:
//! - searchbridge translate [--config <path>] [--input <path>] [--format document|text]
//! - searchbridge explain [--config <path>] [--input <path>]

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// searchbridge - translate search query trees into document-store filters
#[derive(Parser, Debug)]
#[command(name = "searchbridge")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Output form for `translate`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// JSON filter document
    Document,
    /// Compact functional text
    Text,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Translate one JSON query node and print the filter
    Translate {
        /// Path to configuration file (defaults apply when omitted)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Path to the JSON query node (stdin when omitted)
        #[arg(long)]
        input: Option<PathBuf>,

        /// Output form
        #[arg(long, value_enum, default_value_t = OutputFormat::Document)]
        format: OutputFormat,
    },

    /// Translate one JSON query node and print an explain report
    Explain {
        /// Path to configuration file (defaults apply when omitted)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Path to the JSON query node (stdin when omitted)
        #[arg(long)]
        input: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
