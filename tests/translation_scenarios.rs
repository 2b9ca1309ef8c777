//! End-to-end translation scenarios
//!
//! Query trees in, filter trees (and rendered filter documents) out:
//! - Leaf kinds at the top level
//! - Boolean occurrence handling at both depths
//! - Unsupported kinds fail with no output

use searchbridge::filter::{FilterNode, FilterValue};
use searchbridge::query::{BooleanQueryBuilder, Occurrence, QueryNode};
use searchbridge::translator::{translate, QueryTranslator, TranslateErrorCode};
use serde_json::json;

// =============================================================================
// Leaf Scenarios
// =============================================================================

#[test]
fn test_term_becomes_equality() {
    let filter = translate(&QueryNode::term("field1", "foo")).unwrap();
    assert_eq!(filter, FilterNode::eq("field1", "foo"));
    assert_eq!(filter.to_document(), json!({"field1": "foo"}));
}

#[test]
fn test_int_range() {
    let filter = translate(&QueryNode::int_range("field1", 10, 20)).unwrap();
    assert_eq!(
        filter,
        FilterNode::and(vec![
            FilterNode::gte("field1", 10),
            FilterNode::lte("field1", 20),
        ])
    );
    assert_eq!(
        filter.to_document(),
        json!({"$and": [{"field1": {"$gte": 10}}, {"field1": {"$lte": 20}}]})
    );
}

#[test]
fn test_long_range() {
    let filter = translate(&QueryNode::long_range("field1", 100, 200)).unwrap();
    assert_eq!(
        filter,
        FilterNode::and(vec![
            FilterNode::gte("field1", 100i64),
            FilterNode::lte("field1", 200i64),
        ])
    );
}

#[test]
fn test_match_all() {
    let filter = translate(&QueryNode::match_all()).unwrap();
    assert_eq!(filter, FilterNode::exists("_id"));
    assert_eq!(filter.to_document(), json!({"_id": {"$exists": true}}));
}

#[test]
fn test_wildcard_renders_regex() {
    let filter = translate(&QueryNode::wildcard("field1", "f*")).unwrap();
    assert_eq!(filter.to_document(), json!({"field1": {"$regex": "f.*"}}));
}

#[test]
fn test_phrase_on_same_field() {
    let filter = translate(&QueryNode::phrase([("field1", "foo"), ("field1", "bar")])).unwrap();
    assert_eq!(
        filter,
        FilterNode::all(vec![
            FilterNode::eq("field1", "foo"),
            FilterNode::eq("field1", "bar"),
        ])
    );
    assert_eq!(
        filter.to_document(),
        json!({"$and": [{"field1": "foo"}, {"field1": "bar"}]})
    );
}

#[test]
fn test_phrase_dotted_path_document() {
    let filter = translate(&QueryNode::phrase([("author.name.first", "ada")])).unwrap();
    assert_eq!(
        filter.to_document(),
        json!({"$and": [{"author": {"name": {"first": "ada"}}}]})
    );
}

#[test]
fn test_open_term_range() {
    let filter = translate(&QueryNode::term_range("name", Some("a"), None)).unwrap();
    assert_eq!(
        filter,
        FilterNode::and(vec![
            FilterNode::gte("name", "a"),
            FilterNode::lte("name", FilterValue::Null),
        ])
    );
}

// =============================================================================
// Boolean Scenarios
// =============================================================================

/// Required clauses only, no nesting: And of equalities in clause order.
#[test]
fn test_all_required() {
    let query = BooleanQueryBuilder::new()
        .required(QueryNode::term("field1", "foo"))
        .required(QueryNode::term("field2", "bar"))
        .required(QueryNode::term_range("field3", Some("a"), Some("m")))
        .build();

    assert_eq!(
        translate(&query).unwrap(),
        FilterNode::and(vec![
            FilterNode::eq("field1", "foo"),
            FilterNode::eq("field2", "bar"),
            FilterNode::and(vec![
                FilterNode::gte("field3", "a"),
                FilterNode::lte("field3", "m"),
            ]),
        ])
    );
}

/// An optional clause at the top level renders as inequality.
#[test]
fn test_required_and_optional() {
    let query = BooleanQueryBuilder::new()
        .required(QueryNode::term("field1", "foo"))
        .required(QueryNode::term("field2", "bar"))
        .optional(QueryNode::term("field3", "baz"))
        .build();

    let filter = translate(&query).unwrap();
    assert_eq!(
        filter,
        FilterNode::and(vec![
            FilterNode::eq("field1", "foo"),
            FilterNode::eq("field2", "bar"),
            FilterNode::ne("field3", "baz"),
        ])
    );
    assert_eq!(
        filter.to_document(),
        json!({"$and": [
            {"field1": "foo"},
            {"field2": "bar"},
            {"field3": {"$ne": "baz"}}
        ]})
    );
}

/// Excluded renders the same way as optional.
#[test]
fn test_excluded_is_inequality() {
    let query = BooleanQueryBuilder::new()
        .excluded(QueryNode::term("field1", "foo"))
        .build();

    assert_eq!(
        translate(&query).unwrap(),
        FilterNode::and(vec![FilterNode::ne("field1", "foo")])
    );
}

/// Clauses of a nested boolean ignore their own marker and use the outer one.
#[test]
fn test_nested_boolean_uses_outer_occurrence() {
    let inner = BooleanQueryBuilder::new()
        .optional(QueryNode::int_range("field1", 0, 10))
        .optional(QueryNode::term("field2", "bar"))
        .excluded(QueryNode::term("field4", "qux"))
        .build();
    let query = BooleanQueryBuilder::new()
        .required(inner)
        .required(QueryNode::term("field3", "baz"))
        .build();

    assert_eq!(
        translate(&query).unwrap(),
        FilterNode::and(vec![
            FilterNode::or(vec![
                FilterNode::and(vec![
                    FilterNode::gte("field1", 0),
                    FilterNode::lte("field1", 10),
                ]),
                FilterNode::eq("field2", "bar"),
                FilterNode::eq("field4", "qux"),
            ]),
            FilterNode::eq("field3", "baz"),
        ])
    );
}

/// Range clauses keep both bounds whatever their marker says.
#[test]
fn test_range_clauses_ignore_occurrence() {
    let query = BooleanQueryBuilder::new()
        .optional(QueryNode::int_range("field1", 0, 10))
        .excluded(QueryNode::term_range("field2", Some("a"), None))
        .optional(
            BooleanQueryBuilder::new()
                .excluded(QueryNode::long_range("field3", 5, 6))
                .build(),
        )
        .build();

    let filter = translate(&query).unwrap();
    assert_eq!(
        filter,
        FilterNode::and(vec![
            FilterNode::and(vec![
                FilterNode::gte("field1", 0),
                FilterNode::lte("field1", 10),
            ]),
            FilterNode::and(vec![
                FilterNode::gte("field2", "a"),
                FilterNode::lte("field2", FilterValue::Null),
            ]),
            FilterNode::or(vec![FilterNode::and(vec![
                FilterNode::gte("field3", 5),
                FilterNode::lte("field3", 6),
            ])]),
        ])
    );
    assert!(!filter.to_document().to_string().contains("$ne"));
}

#[test]
fn test_nested_boolean_under_optional() {
    let inner = BooleanQueryBuilder::new()
        .required(QueryNode::term("a", "1"))
        .required(QueryNode::phrase([("b", "2"), ("b", "3")]))
        .build();
    let query = BooleanQueryBuilder::new().add(inner, Occurrence::Optional).build();

    assert_eq!(
        translate(&query).unwrap(),
        FilterNode::and(vec![FilterNode::or(vec![
            FilterNode::ne("a", "1"),
            FilterNode::and(vec![FilterNode::ne("b", "2"), FilterNode::ne("b", "3")]),
        ])])
    );
}

// =============================================================================
// Rejection Scenarios
// =============================================================================

#[test]
fn test_unknown_kind_rejected() {
    let err = translate(&QueryNode::opaque("span_near")).unwrap_err();
    assert_eq!(err.code(), TranslateErrorCode::UnsupportedQueryKind);
    assert_eq!(err.kind(), "span_near");
}

/// Leaf kinds valid at top level are rejected inside a boolean.
#[test]
fn test_wildcard_inside_boolean_rejected() {
    let query = BooleanQueryBuilder::new()
        .required(QueryNode::term("field1", "foo"))
        .required(QueryNode::wildcard("field2", "b*"))
        .build();

    let err = translate(&query).unwrap_err();
    assert_eq!(err.kind(), "wildcard");
}

#[test]
fn test_rejection_deep_in_tree() {
    let mut query = QueryNode::opaque("function_score");
    for _ in 0..16 {
        query = BooleanQueryBuilder::new().optional(query).build();
    }

    let err = translate(&query).unwrap_err();
    assert_eq!(err.kind(), "function_score");
}

// =============================================================================
// Determinism / Concurrency
// =============================================================================

#[test]
fn test_translation_is_deterministic() {
    let query = BooleanQueryBuilder::new()
        .required(QueryNode::term("a", "1"))
        .optional(BooleanQueryBuilder::new().required(QueryNode::term("b", "2")).build())
        .build();

    let first = translate(&query).unwrap();
    for _ in 0..100 {
        assert_eq!(translate(&query).unwrap(), first);
    }
}

#[test]
fn test_shared_translator_across_threads() {
    let translator = QueryTranslator::default();
    let query = QueryNode::int_range("n", -5, 5);
    let expected = translate(&query).unwrap();

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                assert_eq!(translator.translate(&query).unwrap(), expected);
            });
        }
    });
}

#[test]
fn test_json_input_round() {
    let query: QueryNode = serde_json::from_value(json!({
        "type": "boolean",
        "clauses": [
            {"query": {"type": "term", "field": "field1", "text": "foo"}, "occurrence": "required"},
            {"query": {"type": "term", "field": "field3", "text": "baz"}, "occurrence": "optional"}
        ]
    }))
    .unwrap();

    assert_eq!(
        translate(&query).unwrap().to_document(),
        json!({"$and": [{"field1": "foo"}, {"field3": {"$ne": "baz"}}]})
    );
}
