//! Filter expression output model
//!
//! `FilterNode` is what translation produces. It can be printed in a compact
//! functional form (`Display`) or rendered as a JSON filter document
//! (`FilterNode::to_document`).

mod node;
mod render;

pub use node::{FilterNode, FilterValue};
