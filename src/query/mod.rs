//! Search query input model
//!
//! The query AST is produced by an external parser; this crate only reads it.
//! Nodes deserialize from JSON tagged by `"type"`.

mod ast;
mod builder;

pub use ast::{BooleanClause, Occurrence, PhraseTerm, QueryNode};
pub use builder::BooleanQueryBuilder;
