//! Search query AST
//!
//! The node tree handed over by a search-query parser. Every variant except
//! `Boolean` is a leaf; boolean clauses may nest further booleans.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::encoding::{encode_i32, encode_i64};

/// Per-clause marker inside a boolean query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Occurrence {
    /// Clause must match
    Required,
    /// Clause may match
    Optional,
    /// Clause must not match
    Excluded,
}

impl Occurrence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Occurrence::Required => "required",
            Occurrence::Optional => "optional",
            Occurrence::Excluded => "excluded",
        }
    }

    /// Returns true for `Required`
    pub fn is_required(&self) -> bool {
        matches!(self, Occurrence::Required)
    }
}

impl fmt::Display for Occurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single (field, text) pair inside a phrase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseTerm {
    pub field: String,
    pub text: String,
}

impl PhraseTerm {
    pub fn new(field: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            text: text.into(),
        }
    }
}

/// One clause of a boolean query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BooleanClause {
    pub query: QueryNode,
    pub occurrence: Occurrence,
}

impl BooleanClause {
    pub fn new(query: QueryNode, occurrence: Occurrence) -> Self {
        Self { query, occurrence }
    }
}

/// Parsed search query node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QueryNode {
    /// Exact term: field = text
    Term { field: String, text: String },
    /// Ordered terms forming one phrase
    Phrase { terms: Vec<PhraseTerm> },
    /// `*` / `?` wildcard pattern
    Wildcard { field: String, pattern: String },
    /// Wildcard with an implicit trailing `*`
    Prefix { field: String, prefix: String },
    /// Regular expression in the store's dialect, passed through verbatim
    Regexp { field: String, pattern: String },
    /// Approximate match within `max_edits` substitutions
    Fuzzy {
        field: String,
        text: String,
        max_edits: u32,
    },
    /// Point range over sortable-encoded integers (4 or 8 bytes per bound)
    RangeNumeric {
        field: String,
        lower: Vec<u8>,
        upper: Vec<u8>,
    },
    /// Term range; a missing bound is open
    RangeLexicographic {
        field: String,
        #[serde(default)]
        lower: Option<String>,
        #[serde(default)]
        upper: Option<String>,
    },
    /// Matches every document
    MatchAll,
    /// Boolean combination of clauses
    Boolean { clauses: Vec<BooleanClause> },
    /// A parser node kind this crate has no rendering for
    Opaque { kind: String },
}

impl QueryNode {
    pub fn term(field: impl Into<String>, text: impl Into<String>) -> Self {
        QueryNode::Term {
            field: field.into(),
            text: text.into(),
        }
    }

    /// Phrase from (field, text) pairs, in order
    pub fn phrase<F, T>(terms: impl IntoIterator<Item = (F, T)>) -> Self
    where
        F: Into<String>,
        T: Into<String>,
    {
        QueryNode::Phrase {
            terms: terms
                .into_iter()
                .map(|(field, text)| PhraseTerm::new(field, text))
                .collect(),
        }
    }

    pub fn wildcard(field: impl Into<String>, pattern: impl Into<String>) -> Self {
        QueryNode::Wildcard {
            field: field.into(),
            pattern: pattern.into(),
        }
    }

    pub fn prefix(field: impl Into<String>, prefix: impl Into<String>) -> Self {
        QueryNode::Prefix {
            field: field.into(),
            prefix: prefix.into(),
        }
    }

    pub fn regexp(field: impl Into<String>, pattern: impl Into<String>) -> Self {
        QueryNode::Regexp {
            field: field.into(),
            pattern: pattern.into(),
        }
    }

    pub fn fuzzy(field: impl Into<String>, text: impl Into<String>, max_edits: u32) -> Self {
        QueryNode::Fuzzy {
            field: field.into(),
            text: text.into(),
            max_edits,
        }
    }

    /// Inclusive 32-bit point range
    pub fn int_range(field: impl Into<String>, lower: i32, upper: i32) -> Self {
        QueryNode::RangeNumeric {
            field: field.into(),
            lower: encode_i32(lower).to_vec(),
            upper: encode_i32(upper).to_vec(),
        }
    }

    /// Inclusive 64-bit point range
    pub fn long_range(field: impl Into<String>, lower: i64, upper: i64) -> Self {
        QueryNode::RangeNumeric {
            field: field.into(),
            lower: encode_i64(lower).to_vec(),
            upper: encode_i64(upper).to_vec(),
        }
    }

    pub fn term_range(
        field: impl Into<String>,
        lower: Option<&str>,
        upper: Option<&str>,
    ) -> Self {
        QueryNode::RangeLexicographic {
            field: field.into(),
            lower: lower.map(str::to_string),
            upper: upper.map(str::to_string),
        }
    }

    pub fn match_all() -> Self {
        QueryNode::MatchAll
    }

    pub fn opaque(kind: impl Into<String>) -> Self {
        QueryNode::Opaque { kind: kind.into() }
    }

    /// Returns the node's kind name, as used in errors and logs
    pub fn kind_name(&self) -> &str {
        match self {
            QueryNode::Term { .. } => "term",
            QueryNode::Phrase { .. } => "phrase",
            QueryNode::Wildcard { .. } => "wildcard",
            QueryNode::Prefix { .. } => "prefix",
            QueryNode::Regexp { .. } => "regexp",
            QueryNode::Fuzzy { .. } => "fuzzy",
            QueryNode::RangeNumeric { .. } => "range_numeric",
            QueryNode::RangeLexicographic { .. } => "range_lexicographic",
            QueryNode::MatchAll => "match_all",
            QueryNode::Boolean { .. } => "boolean",
            QueryNode::Opaque { kind } => kind,
        }
    }

    /// Boolean nesting depth (0 for a leaf)
    pub fn depth(&self) -> usize {
        match self {
            QueryNode::Boolean { clauses } => {
                1 + clauses.iter().map(|c| c.query.depth()).max().unwrap_or(0)
            }
            _ => 0,
        }
    }
}
