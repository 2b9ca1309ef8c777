//! CLI module for searchbridge
//!
//! Provides command-line interface for:
//! - translate: JSON query node in, filter document (or text) out
//! - explain: JSON query node in, explain report out

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command, OutputFormat};
pub use commands::{explain, run, run_command, translate};
pub use errors::{CliError, CliResult};
pub use io::{parse_query, read_query};
