//! Query-to-filter translation
//!
//! Dispatch is an exhaustive match per position, so every node kind is an
//! explicit decision at each site.
//!
//! # Boolean handling
//!
//! Two different combinators apply depending on depth:
//!
//! 1. A boolean passed to `translate` joins its clauses with `And`; each
//!    non-boolean clause is rendered with its *own* occurrence.
//! 2. A boolean found as a clause joins its clauses with `Or`; every
//!    non-boolean clause is rendered with the occurrence *inherited* from
//!    the enclosing clause, ignoring its own. Booleans nested further down
//!    pass their own clause occurrence on.
//!
//! The two paths are asymmetric. Unifying them changes output for nested
//! queries and must be treated as a behaviour change, not a fix.
//!
//! Inside a boolean, `Optional` and `Excluded` both render terms as `Ne`.

use crate::config::TranslatorConfig;
use crate::encoding::{
    decode_bound, fuzzy_to_regex, wildcard_to_regex, BoundSide, INT_BYTES, LONG_BYTES,
};
use crate::filter::{FilterNode, FilterValue};
use crate::observability::{log_event_with_fields, Event, Logger, Severity};
use crate::query::{BooleanClause, Occurrence, PhraseTerm, QueryNode};

use super::errors::{TranslateContext, TranslateError, TranslateResult};

/// Translates search query trees into filter trees.
///
/// Holds only immutable settings; one instance can serve any number of
/// threads.
#[derive(Debug, Clone)]
pub struct QueryTranslator {
    match_all_field: String,
    separator: char,
}

impl Default for QueryTranslator {
    fn default() -> Self {
        Self::new(&TranslatorConfig::default())
    }
}

impl QueryTranslator {
    /// Creates a translator from a validated configuration
    pub fn new(config: &TranslatorConfig) -> Self {
        Self {
            match_all_field: config.match_all_field.clone(),
            separator: config.separator(),
        }
    }

    /// Translates a query tree.
    ///
    /// Fails on the first unsupported node kind; no partial filter is
    /// returned.
    pub fn translate(&self, node: &QueryNode) -> TranslateResult<FilterNode> {
        if Logger::enabled(Severity::Trace) {
            log_event_with_fields(Event::TranslateBegin, &[("input_kind", node.kind_name())]);
        }

        let result = self.translate_node(node);

        match &result {
            Ok(filter) => {
                if Logger::enabled(Severity::Trace) {
                    let filter_nodes = filter.node_count().to_string();
                    log_event_with_fields(
                        Event::TranslateComplete,
                        &[
                            ("input_kind", node.kind_name()),
                            ("filter_nodes", filter_nodes.as_str()),
                        ],
                    );
                }
            }
            Err(err) => log_event_with_fields(
                Event::TranslateRejected,
                &[("kind", err.kind()), ("context", err.context().as_str())],
            ),
        }

        result
    }

    fn translate_node(&self, node: &QueryNode) -> TranslateResult<FilterNode> {
        match node {
            QueryNode::Term { field, text } => Ok(FilterNode::eq(field, text.as_str())),
            QueryNode::Phrase { terms } => Ok(self.phrase_filter(terms)),
            QueryNode::Wildcard { field, pattern } => {
                Ok(FilterNode::regex(field, wildcard_to_regex(pattern)))
            }
            QueryNode::Prefix { field, prefix } => Ok(FilterNode::regex(
                field,
                wildcard_to_regex(&format!("{}*", prefix)),
            )),
            QueryNode::Regexp { field, pattern } => Ok(FilterNode::regex(field, pattern.as_str())),
            QueryNode::Fuzzy {
                field,
                text,
                max_edits,
            } => Ok(FilterNode::regex(field, fuzzy_to_regex(text, *max_edits))),
            QueryNode::RangeNumeric {
                field,
                lower,
                upper,
            } => Ok(self.numeric_range(field, lower, upper)),
            QueryNode::RangeLexicographic {
                field,
                lower,
                upper,
            } => Ok(term_range(field, lower, upper)),
            QueryNode::MatchAll => Ok(FilterNode::exists(self.match_all_field.as_str())),
            QueryNode::Boolean { clauses } => self.top_level_boolean(clauses),
            QueryNode::Opaque { kind } => Err(TranslateError::unsupported_kind(
                kind.as_str(),
                TranslateContext::TopLevel,
            )),
        }
    }

    /// `And` of clauses, each rendered with its own occurrence
    fn top_level_boolean(&self, clauses: &[BooleanClause]) -> TranslateResult<FilterNode> {
        let filters = clauses
            .iter()
            .map(|clause| match &clause.query {
                QueryNode::Boolean { clauses: nested } => {
                    self.nested_boolean(nested, clause.occurrence)
                }
                query => self.occurrence_filter(query, clause.occurrence),
            })
            .collect::<TranslateResult<Vec<_>>>()?;

        Ok(FilterNode::and(filters))
    }

    /// `Or` of clauses, leaves rendered with the inherited occurrence
    fn nested_boolean(
        &self,
        clauses: &[BooleanClause],
        inherited: Occurrence,
    ) -> TranslateResult<FilterNode> {
        let filters = clauses
            .iter()
            .map(|clause| match &clause.query {
                QueryNode::Boolean { clauses: nested } => {
                    self.nested_boolean(nested, clause.occurrence)
                }
                query => self.occurrence_filter(query, inherited),
            })
            .collect::<TranslateResult<Vec<_>>>()?;

        Ok(FilterNode::or(filters))
    }

    /// Renders a node that sits inside a boolean
    fn occurrence_filter(
        &self,
        node: &QueryNode,
        occurrence: Occurrence,
    ) -> TranslateResult<FilterNode> {
        match node {
            QueryNode::Term { field, text } => Ok(occurrence_match(field, text, occurrence)),
            QueryNode::Phrase { terms } => Ok(FilterNode::and(
                terms
                    .iter()
                    .map(|t| occurrence_match(&t.field, &t.text, occurrence))
                    .collect(),
            )),
            QueryNode::RangeNumeric {
                field,
                lower,
                upper,
            } => Ok(self.numeric_range(field, lower, upper)),
            QueryNode::RangeLexicographic {
                field,
                lower,
                upper,
            } => Ok(term_range(field, lower, upper)),
            QueryNode::Boolean { clauses } => self.nested_boolean(clauses, occurrence),
            QueryNode::Wildcard { .. }
            | QueryNode::Prefix { .. }
            | QueryNode::Regexp { .. }
            | QueryNode::Fuzzy { .. }
            | QueryNode::MatchAll
            | QueryNode::Opaque { .. } => Err(TranslateError::unsupported_kind(
                node.kind_name(),
                TranslateContext::BooleanClause,
            )),
        }
    }

    /// `All` of nested-document matches, one per term
    fn phrase_filter(&self, terms: &[PhraseTerm]) -> FilterNode {
        FilterNode::all(
            terms
                .iter()
                .map(|t| self.path_match(&t.field, &t.text))
                .collect(),
        )
    }

    /// Folds `a.b.c = text` into `eq(a, {eq(b, {eq(c, text)})})`.
    ///
    /// Trailing empty segments are dropped, so `a.b.` behaves like `a.b`.
    fn path_match(&self, field: &str, text: &str) -> FilterNode {
        let mut segments: Vec<&str> = field.split(self.separator).collect();
        while segments.len() > 1 && segments.last() == Some(&"") {
            segments.pop();
        }

        match segments.split_last() {
            Some((last, parents)) => parents
                .iter()
                .rev()
                .fold(FilterNode::eq(*last, text), |inner, segment| {
                    FilterNode::eq(*segment, inner)
                }),
            None => FilterNode::eq(field, text),
        }
    }

    fn numeric_range(&self, field: &str, lower: &[u8], upper: &[u8]) -> FilterNode {
        FilterNode::and(vec![
            FilterNode::gte(field, self.bound(field, lower, BoundSide::Lower)),
            FilterNode::lte(field, self.bound(field, upper, BoundSide::Upper)),
        ])
    }

    /// Decodes one bound; an unparseable width degrades to unbounded
    fn bound(&self, field: &str, bytes: &[u8], side: BoundSide) -> i64 {
        if bytes.len() != INT_BYTES && bytes.len() != LONG_BYTES {
            let width = bytes.len().to_string();
            log_event_with_fields(
                Event::RangeBoundDegraded,
                &[
                    ("field", field),
                    ("bound", side.as_str()),
                    ("width", width.as_str()),
                ],
            );
        }
        decode_bound(bytes, side)
    }
}

fn occurrence_match(field: &str, text: &str, occurrence: Occurrence) -> FilterNode {
    if occurrence.is_required() {
        FilterNode::eq(field, text)
    } else {
        FilterNode::ne(field, text)
    }
}

fn term_range(field: &str, lower: &Option<String>, upper: &Option<String>) -> FilterNode {
    FilterNode::and(vec![
        FilterNode::gte(field, FilterValue::from(lower.clone())),
        FilterNode::lte(field, FilterValue::from(upper.clone())),
    ])
}

/// Translates with the default configuration
pub fn translate(node: &QueryNode) -> TranslateResult<FilterNode> {
    QueryTranslator::default().translate(node)
}
