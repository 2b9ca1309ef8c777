//! Filter expression tree
//!
//! Output of translation. Nodes are plain data; how they are rendered for a
//! particular store is left to `render` or to the caller.

use std::fmt;

/// Value side of a comparison
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    /// Absent bound
    Null,
    Int(i64),
    Text(String),
    /// Embedded document match, used for dotted phrase paths
    Document(Box<FilterNode>),
}

impl From<&str> for FilterValue {
    fn from(s: &str) -> Self {
        FilterValue::Text(s.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(s: String) -> Self {
        FilterValue::Text(s)
    }
}

impl From<i64> for FilterValue {
    fn from(v: i64) -> Self {
        FilterValue::Int(v)
    }
}

impl From<i32> for FilterValue {
    fn from(v: i32) -> Self {
        FilterValue::Int(i64::from(v))
    }
}

impl From<Option<String>> for FilterValue {
    fn from(v: Option<String>) -> Self {
        v.map_or(FilterValue::Null, FilterValue::Text)
    }
}

impl From<FilterNode> for FilterValue {
    fn from(node: FilterNode) -> Self {
        FilterValue::Document(Box::new(node))
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterValue::Null => write!(f, "null"),
            FilterValue::Int(v) => write!(f, "{}", v),
            FilterValue::Text(s) => write!(f, "{:?}", s),
            FilterValue::Document(node) => write!(f, "{{{}}}", node),
        }
    }
}

/// A filter predicate or combinator
#[derive(Debug, Clone, PartialEq)]
pub enum FilterNode {
    Eq { field: String, value: FilterValue },
    Ne { field: String, value: FilterValue },
    RegexMatch { field: String, pattern: String },
    Gte { field: String, value: FilterValue },
    Lte { field: String, value: FilterValue },
    Exists { field: String },
    And(Vec<FilterNode>),
    Or(Vec<FilterNode>),
    Not(Box<FilterNode>),
    /// Every listed nested match must hold (phrase conjunction)
    All(Vec<FilterNode>),
}

impl FilterNode {
    pub fn eq(field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        FilterNode::Eq {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn ne(field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        FilterNode::Ne {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn regex(field: impl Into<String>, pattern: impl Into<String>) -> Self {
        FilterNode::RegexMatch {
            field: field.into(),
            pattern: pattern.into(),
        }
    }

    pub fn gte(field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        FilterNode::Gte {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn lte(field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        FilterNode::Lte {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn exists(field: impl Into<String>) -> Self {
        FilterNode::Exists {
            field: field.into(),
        }
    }

    pub fn and(children: Vec<FilterNode>) -> Self {
        FilterNode::And(children)
    }

    pub fn or(children: Vec<FilterNode>) -> Self {
        FilterNode::Or(children)
    }

    pub fn not(child: FilterNode) -> Self {
        FilterNode::Not(Box::new(child))
    }

    pub fn all(children: Vec<FilterNode>) -> Self {
        FilterNode::All(children)
    }

    /// Operator name used in text rendering
    pub fn op_name(&self) -> &'static str {
        match self {
            FilterNode::Eq { .. } => "eq",
            FilterNode::Ne { .. } => "ne",
            FilterNode::RegexMatch { .. } => "regex",
            FilterNode::Gte { .. } => "gte",
            FilterNode::Lte { .. } => "lte",
            FilterNode::Exists { .. } => "exists",
            FilterNode::And(_) => "and",
            FilterNode::Or(_) => "or",
            FilterNode::Not(_) => "not",
            FilterNode::All(_) => "all",
        }
    }

    /// Total number of nodes, counting embedded document values
    pub fn node_count(&self) -> usize {
        match self {
            FilterNode::Eq { value, .. }
            | FilterNode::Ne { value, .. }
            | FilterNode::Gte { value, .. }
            | FilterNode::Lte { value, .. } => 1 + value_node_count(value),
            FilterNode::RegexMatch { .. } | FilterNode::Exists { .. } => 1,
            FilterNode::And(children) | FilterNode::Or(children) | FilterNode::All(children) => {
                1 + children.iter().map(FilterNode::node_count).sum::<usize>()
            }
            FilterNode::Not(child) => 1 + child.node_count(),
        }
    }

    /// Height of the tree (a single predicate has depth 1)
    pub fn depth(&self) -> usize {
        match self {
            FilterNode::Eq { value, .. }
            | FilterNode::Ne { value, .. }
            | FilterNode::Gte { value, .. }
            | FilterNode::Lte { value, .. } => 1 + value_depth(value),
            FilterNode::RegexMatch { .. } | FilterNode::Exists { .. } => 1,
            FilterNode::And(children) | FilterNode::Or(children) | FilterNode::All(children) => {
                1 + children.iter().map(FilterNode::depth).max().unwrap_or(0)
            }
            FilterNode::Not(child) => 1 + child.depth(),
        }
    }
}

fn value_node_count(value: &FilterValue) -> usize {
    match value {
        FilterValue::Document(node) => node.node_count(),
        _ => 0,
    }
}

fn value_depth(value: &FilterValue) -> usize {
    match value {
        FilterValue::Document(node) => node.depth(),
        _ => 0,
    }
}

fn write_children(f: &mut fmt::Formatter<'_>, name: &str, children: &[FilterNode]) -> fmt::Result {
    write!(f, "{}(", name)?;
    for (i, child) in children.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", child)?;
    }
    write!(f, ")")
}

impl fmt::Display for FilterNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterNode::Eq { field, value }
            | FilterNode::Ne { field, value }
            | FilterNode::Gte { field, value }
            | FilterNode::Lte { field, value } => {
                write!(f, "{}({}, {})", self.op_name(), field, value)
            }
            FilterNode::RegexMatch { field, pattern } => write!(f, "regex({}, /{}/)", field, pattern),
            FilterNode::Exists { field } => write!(f, "exists({})", field),
            FilterNode::And(children) | FilterNode::Or(children) | FilterNode::All(children) => {
                write_children(f, self.op_name(), children)
            }
            FilterNode::Not(child) => write!(f, "not({})", child),
        }
    }
}
