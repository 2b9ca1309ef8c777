//! JSON I/O handling for the CLI
//!
//! - Input: one JSON query node, from a file or stdin
//! - Output: one JSON document or text line on stdout
//! - UTF-8 only

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use serde_json::Value;

use crate::query::QueryNode;

use super::errors::{CliError, CliResult};

/// Read a query node from `path`, or from stdin when `None`
pub fn read_query(path: Option<&Path>) -> CliResult<QueryNode> {
    let content = match path {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().lock().read_to_string(&mut buf)?;
            buf
        }
    };

    parse_query(&content)
}

/// Parse a query node from JSON text
pub fn parse_query(content: &str) -> CliResult<QueryNode> {
    if content.trim().is_empty() {
        return Err(CliError::EmptyInput);
    }
    Ok(serde_json::from_str(content)?)
}

/// Write a JSON value as one line to stdout
pub fn write_json(value: &Value) -> CliResult<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer(&mut stdout, value).map_err(CliError::Output)?;
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}

/// Write a text line to stdout
pub fn write_text(text: &str) -> CliResult<()> {
    let mut stdout = io::stdout();
    writeln!(stdout, "{}", text)?;
    stdout.flush()?;

    Ok(())
}
