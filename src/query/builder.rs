//! Boolean query builder

use super::ast::{BooleanClause, Occurrence, QueryNode};

/// Accumulates clauses for a `QueryNode::Boolean`, in insertion order
#[derive(Debug, Clone, Default)]
pub struct BooleanQueryBuilder {
    clauses: Vec<BooleanClause>,
}

impl BooleanQueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a clause with an explicit occurrence
    pub fn add(mut self, query: QueryNode, occurrence: Occurrence) -> Self {
        self.clauses.push(BooleanClause::new(query, occurrence));
        self
    }

    pub fn required(self, query: QueryNode) -> Self {
        self.add(query, Occurrence::Required)
    }

    pub fn optional(self, query: QueryNode) -> Self {
        self.add(query, Occurrence::Optional)
    }

    pub fn excluded(self, query: QueryNode) -> Self {
        self.add(query, Occurrence::Excluded)
    }

    pub fn build(self) -> QueryNode {
        QueryNode::Boolean {
            clauses: self.clauses,
        }
    }
}
