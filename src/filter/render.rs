//! Filter-document rendering
//!
//! Produces the JSON filter document understood by document stores:
//! - Eq: `{"field": value}`
//! - Ne/Gte/Lte/Regex/Exists: `{"field": {"$op": value}}`
//! - And/All: `{"$and": [...]}`, Or: `{"$or": [...]}`, Not: `{"$nor": [child]}`
//!
//! `All` has no top-level counterpart in the document language and is
//! rendered as `$and`.

use serde_json::{json, Map, Value};

use super::node::{FilterNode, FilterValue};

impl FilterValue {
    /// Renders the value as JSON; embedded documents render as their filter
    pub fn to_json(&self) -> Value {
        match self {
            FilterValue::Null => Value::Null,
            FilterValue::Int(v) => json!(v),
            FilterValue::Text(s) => json!(s),
            FilterValue::Document(node) => node.to_document(),
        }
    }
}

impl FilterNode {
    /// Renders this filter as a store filter document
    pub fn to_document(&self) -> Value {
        match self {
            FilterNode::Eq { field, value } => single(field, value.to_json()),
            FilterNode::Ne { field, value } => operator(field, "$ne", value.to_json()),
            FilterNode::RegexMatch { field, pattern } => operator(field, "$regex", json!(pattern)),
            FilterNode::Gte { field, value } => operator(field, "$gte", value.to_json()),
            FilterNode::Lte { field, value } => operator(field, "$lte", value.to_json()),
            FilterNode::Exists { field } => operator(field, "$exists", Value::Bool(true)),
            FilterNode::And(children) | FilterNode::All(children) => combinator("$and", children),
            FilterNode::Or(children) => combinator("$or", children),
            FilterNode::Not(child) => json!({ "$nor": [child.to_document()] }),
        }
    }
}

fn single(key: &str, value: Value) -> Value {
    let mut map = Map::with_capacity(1);
    map.insert(key.to_string(), value);
    Value::Object(map)
}

fn operator(field: &str, op: &str, value: Value) -> Value {
    single(field, single(op, value))
}

fn combinator(op: &str, children: &[FilterNode]) -> Value {
    let rendered: Vec<Value> = children.iter().map(FilterNode::to_document).collect();
    single(op, Value::Array(rendered))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicates() {
        assert_eq!(FilterNode::eq("a", "x").to_document(), json!({"a": "x"}));
        assert_eq!(
            FilterNode::ne("a", "x").to_document(),
            json!({"a": {"$ne": "x"}})
        );
        assert_eq!(
            FilterNode::regex("a", "f.*").to_document(),
            json!({"a": {"$regex": "f.*"}})
        );
        assert_eq!(
            FilterNode::exists("_id").to_document(),
            json!({"_id": {"$exists": true}})
        );
    }

    #[test]
    fn test_range_with_open_bound() {
        let filter = FilterNode::and(vec![
            FilterNode::gte("n", FilterValue::Null),
            FilterNode::lte("n", 20),
        ]);
        assert_eq!(
            filter.to_document(),
            json!({"$and": [{"n": {"$gte": null}}, {"n": {"$lte": 20}}]})
        );
    }

    #[test]
    fn test_nested_document_value() {
        let filter = FilterNode::all(vec![FilterNode::eq(
            "a",
            FilterNode::eq("b", FilterNode::eq("c", "x")),
        )]);
        assert_eq!(
            filter.to_document(),
            json!({"$and": [{"a": {"b": {"c": "x"}}}]})
        );
    }

    #[test]
    fn test_or_and_not() {
        let filter = FilterNode::or(vec![
            FilterNode::not(FilterNode::eq("a", "x")),
            FilterNode::eq("b", 1),
        ]);
        assert_eq!(
            filter.to_document(),
            json!({"$or": [{"$nor": [{"a": "x"}]}, {"b": 1}]})
        );
    }
}
