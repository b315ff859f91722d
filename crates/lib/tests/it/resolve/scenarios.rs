//! Concrete resolution scenarios.

use vane::{Doc, PathSpec, Policy, Value, lookup, resolve, resolve_first};

use crate::helpers::*;

#[test]
fn test_nested_key_resolves() {
    let root = nested_ab();
    assert_eq!(resolve(&root, "a.b", &Value::Int(0), Policy::Exists), &Value::Int(5));
}

#[test]
fn test_missing_leaf_returns_default() {
    let root = nested_ab();
    assert_eq!(resolve(&root, "a.c", &Value::Int(0), Policy::Exists), &Value::Int(0));
}

#[test]
fn test_null_intermediate_returns_default() {
    let root = payload(r#"{"a": null}"#);
    assert_eq!(resolve(&root, "a.b", &Value::Int(0), Policy::Exists), &Value::Int(0));
}

#[test]
fn test_empty_path_on_empty_doc_returns_root() {
    let root = Value::Doc(Doc::new());
    assert_eq!(resolve(&root, "", &Value::Int(0), Policy::Exists), &root);
}

#[test]
fn test_legacy_key_found_by_candidates() {
    let root = payload(r#"{"c": 3}"#);
    assert_eq!(
        resolve_first(&root, &["temp.celsius", "c"], &Value::Int(0)),
        &Value::Int(3)
    );
}

#[test]
fn test_no_candidate_matches() {
    let root = Value::Doc(Doc::new());
    assert_eq!(
        resolve_first(&root, &["temp.celsius", "c"], &Value::Int(-1)),
        &Value::Int(-1)
    );
}

#[test]
fn test_same_lookup_across_payload_generations() {
    let spec = PathSpec::candidates(["wind.speed", "ws"]).unwrap();
    let unknown = Value::Null;
    assert_eq!(lookup(&current_weather(), &spec, &unknown), &Value::Int(22));
    assert_eq!(lookup(&legacy_weather(), &spec, &unknown), &Value::Int(22));
}

#[test]
fn test_leaf_in_the_middle_of_path() {
    let root = current_weather();
    let none = Value::Null;
    assert_eq!(
        resolve(&root, "temp.celsius.value", &none, Policy::Exists),
        &none
    );
    assert_eq!(
        resolve(&root, "station.name.first", &none, Policy::Defined),
        &none
    );
}

#[test]
fn test_keys_containing_dots_are_unreachable() {
    // single-level dot splitting only
    let root = Value::from(Doc::new().with("a.b", 1));
    assert_eq!(resolve(&root, "a.b", &Value::Null, Policy::Exists), &Value::Null);
}

#[test]
fn test_default_can_be_structured() {
    let fallback = Value::from(Doc::new().with("speed", 0));
    let root = payload("{}");
    let found = resolve(&root, "wind", &fallback, Policy::Exists);
    assert_eq!(found, &fallback);
    assert!(std::ptr::eq(found, &fallback));
}

#[test]
fn test_resolution_borrows_from_root() {
    let root = current_weather();
    let fallback = Value::Null;
    let found = resolve(&root, "wind", &fallback, Policy::Exists);

    let inside = root.as_doc().and_then(|doc| doc.get("wind")).unwrap();
    assert!(std::ptr::eq(found, inside));
}
