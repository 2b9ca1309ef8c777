//! Query translator subsystem
//!
//! Walks a search query tree depth-first and produces the equivalent filter
//! tree.
//!
//! # Design Principles
//!
//! - Pure: no I/O besides logging, no shared mutable state
//! - Closed: every node kind is handled or rejected explicitly
//! - Fail fast: the first unsupported node aborts the whole translation
//!
//! # Interface assumptions
//!
//! - Fuzzy nodes produce an approximate-match regex (`{s<=N}`); the store's
//!   regex engine must support that extension.
//! - `MatchAll` assumes every document carries the configured sentinel field.
//! - Recursion depth equals boolean nesting depth; there is no cap.

mod errors;
mod explain;
mod translator;

pub use errors::{
    Severity, TranslateContext, TranslateError, TranslateErrorCode, TranslateResult,
};
pub use explain::TranslationExplain;
pub use translator::{translate, QueryTranslator};
