//! searchbridge - translate full-text search query trees into
//! document-store filter expressions
//!
//! ```
//! use searchbridge::query::{BooleanQueryBuilder, QueryNode};
//! use searchbridge::translator::translate;
//!
//! let query = BooleanQueryBuilder::new()
//!     .required(QueryNode::term("field1", "foo"))
//!     .optional(QueryNode::term("field3", "baz"))
//!     .build();
//!
//! let filter = translate(&query).unwrap();
//! assert_eq!(filter.to_string(), r#"and(eq(field1, "foo"), ne(field3, "baz"))"#);
//! ```

pub mod cli;
pub mod config;
pub mod encoding;
pub mod filter;
pub mod observability;
pub mod query;
pub mod translator;
