//! Value and Doc integration tests

use vane::{Doc, Value};

use crate::helpers::*;

#[test]
fn test_json_round_trip_preserves_structure() {
    let original = current_weather();
    let text = original.to_json_string();
    assert_eq!(payload(&text), original);
}

#[test]
fn test_serde_and_conversion_agree() {
    let json = serde_json::json!({"a": [1, 2.5, "x", null, {"b": false}]});
    let converted = Value::from(json.clone());
    let deserialized: Value = serde_json::from_value(json).unwrap();
    assert_eq!(converted, deserialized);
}

#[test]
fn test_to_json_drops_undefined_to_null() {
    let json = with_undefined().to_json();
    assert_eq!(json["top"], serde_json::Value::Null);
    assert_eq!(json["nested"]["here"], 1);
}

#[test]
fn test_type_names() {
    let cases = vec![
        (Value::Null, "null"),
        (Value::Bool(true), "bool"),
        (Value::Int(1), "int"),
        (Value::Float(1.5), "float"),
        (Value::from("s"), "text"),
        (Value::List(vec![]), "list"),
        (Value::Doc(Doc::new()), "doc"),
        (Value::Undefined, "undefined"),
    ];
    for (value, name) in cases {
        assert_eq!(value.type_name(), name);
    }
}

#[test]
fn test_strict_accessors() {
    assert_eq!(Value::Int(3).as_int(), Some(3));
    assert_eq!(Value::Int(3).as_float(), Some(3.0));
    assert_eq!(Value::Float(3.5).as_int(), None);
    assert_eq!(Value::from("3").as_int(), None);
    assert_eq!(Value::from("3").as_text(), Some("3"));
    assert_eq!(Value::Bool(true).as_bool(), Some(true));
    assert!(Value::Null.as_doc().is_none());
    assert_eq!(Value::List(vec![Value::Null]).as_list().map(<[Value]>::len), Some(1));
}

#[test]
fn test_primitive_comparisons() {
    assert!(Value::from("a") == "a");
    assert!("a" == Value::from("a"));
    assert!(Value::Int(2) == 2.0);
    assert!(2_i64 == Value::Float(2.0));
    assert!(true == Value::Bool(true));
    assert!(Value::Null != Value::Undefined);
}
