//! Integration tests for parse-and-evaluate over a JSON document.

use pathquill::{select, EvalError, ParseError, PathError};
use serde_json::{json, Value};

fn bookstore() -> Value {
    json!({
        "store": {
            "name": "Corner Books",
            "books": [
                { "title": "Dune", "price": 9 },
                { "title": "Emma", "price": 7 },
                { "title": "Hamlet", "price": 5 },
            ],
        }
    })
}

#[test]
fn test_select_root() {
    let doc = bookstore();
    let results = select(&doc, "$").unwrap();
    assert_eq!(results, vec![&doc]);
}

#[test]
fn test_select_nested_child() {
    let doc = bookstore();
    let results = select(&doc, "$.store.name").unwrap();
    assert_eq!(results, vec![&json!("Corner Books")]);
}

#[test]
fn test_select_array_element() {
    let doc = bookstore();
    let results = select(&doc, "$.store.books[1].title").unwrap();
    assert_eq!(results, vec![&json!("Emma")]);
}

#[test]
fn test_select_wildcard_fans_out() {
    let doc = bookstore();
    let results = select(&doc, "$.store.books[*].title").unwrap();
    assert_eq!(
        results,
        vec![&json!("Dune"), &json!("Emma"), &json!("Hamlet")]
    );
}

#[test]
fn test_select_wildcard_results_keep_array_order() {
    let doc = bookstore();
    let results = select(&doc, "$.store.books[*].price").unwrap();
    assert_eq!(results, vec![&json!(9), &json!(7), &json!(5)]);
}

#[test]
fn test_select_invalid_path_is_a_parse_error() {
    let doc = bookstore();
    let err = select(&doc, "store.books").unwrap_err();
    assert!(matches!(
        err,
        PathError::Parse(ParseError::UnexpectedToken { .. })
    ));
}

#[test]
fn test_select_unscannable_path_is_a_parse_error() {
    let doc = bookstore();
    let err = select(&doc, "$.store['books']").unwrap_err();
    assert!(matches!(
        err,
        PathError::Parse(ParseError::UnrecognizedInput { .. })
    ));
}

#[test]
fn test_select_missing_field_is_an_eval_error() {
    let doc = bookstore();
    let err = select(&doc, "$.store.magazines").unwrap_err();
    assert_eq!(
        err,
        PathError::Eval(EvalError::MissingKey {
            identifier: "magazines".to_string()
        })
    );
}

#[test]
fn test_select_index_into_object_is_an_eval_error() {
    let doc = bookstore();
    let err = select(&doc, "$.store[0]").unwrap_err();
    assert_eq!(err, PathError::Eval(EvalError::NotAnArray));
}

#[test]
fn test_select_out_of_range_index_is_an_eval_error() {
    let doc = bookstore();
    let err = select(&doc, "$.store.books[3]").unwrap_err();
    assert_eq!(
        err,
        PathError::Eval(EvalError::IndexOutOfBounds { index: 3, len: 3 })
    );
}

#[test]
fn test_path_error_display_is_readable() {
    let doc = bookstore();
    let err = select(&doc, "$.store.books[9].title").unwrap_err();
    assert_eq!(
        err.to_string(),
        "index 9 out of bounds for array of length 3"
    );
}
