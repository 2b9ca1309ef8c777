//! Translation explain report
//!
//! Deterministic summary of one translation, for the CLI and for debugging.

use std::fmt;

use serde::Serialize;

use crate::filter::FilterNode;
use crate::query::QueryNode;

use super::errors::TranslateResult;

/// Explain output for one translation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranslationExplain {
    /// Whether translation succeeded
    pub accepted: bool,
    /// Kind of the root input node
    pub input_kind: String,
    /// Boolean nesting depth of the input
    pub input_depth: usize,
    /// Number of filter nodes produced
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_nodes: Option<usize>,
    /// Height of the produced filter tree
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_depth: Option<usize>,
    /// Filter in compact text form
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
}

impl TranslationExplain {
    /// Builds the report from an input and its translation result
    pub fn from_result(input: &QueryNode, result: &TranslateResult<FilterNode>) -> Self {
        let mut explain = Self {
            accepted: result.is_ok(),
            input_kind: input.kind_name().to_string(),
            input_depth: input.depth(),
            filter_nodes: None,
            filter_depth: None,
            filter: None,
            rejection_code: None,
            rejection_reason: None,
        };

        match result {
            Ok(filter) => {
                explain.filter_nodes = Some(filter.node_count());
                explain.filter_depth = Some(filter.depth());
                explain.filter = Some(filter.to_string());
            }
            Err(err) => {
                explain.rejection_code = Some(err.code().code().to_string());
                explain.rejection_reason = Some(err.message().to_string());
            }
        }

        explain
    }
}

impl fmt::Display for TranslationExplain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== TRANSLATION ===")?;
        writeln!(f, "Input: {} (boolean depth {})", self.input_kind, self.input_depth)?;

        if self.accepted {
            writeln!(f, "Status: ACCEPTED")?;
            if let (Some(nodes), Some(depth)) = (self.filter_nodes, self.filter_depth) {
                writeln!(f, "Filter Nodes: {} (depth {})", nodes, depth)?;
            }
            if let Some(filter) = &self.filter {
                writeln!(f, "Filter: {}", filter)?;
            }
        } else {
            writeln!(f, "Status: REJECTED")?;
            if let Some(code) = &self.rejection_code {
                writeln!(f, "Error Code: {}", code)?;
            }
            if let Some(reason) = &self.rejection_reason {
                writeln!(f, "Reason: {}", reason)?;
            }
        }

        Ok(())
    }
}
