//! Typed helpers over single and multi-path specs.

use vane::{
    PathSpec, Value,
    resolve::{lookup_bool, lookup_doc, lookup_number, lookup_text},
};

use crate::helpers::*;

#[test]
fn test_number_with_legacy_fallback() {
    let spec = PathSpec::candidates(["temp.celsius", "c"]).unwrap();
    assert_eq!(lookup_number(&current_weather(), &spec, f64::NAN), 18.5);
    assert_eq!(lookup_number(&legacy_weather(), &spec, f64::NAN), 18.5);
    assert!(lookup_number(&payload("{}"), &spec, f64::NAN).is_nan());
}

#[test]
fn test_bool_with_legacy_fallback() {
    let spec = PathSpec::candidates(["conditions.raining", "raining"]).unwrap();
    assert!(lookup_bool(&current_weather(), &spec, false));
    assert!(lookup_bool(&legacy_weather(), &spec, false));
    assert!(!lookup_bool(&payload(r#"{"raining": 0}"#), &spec, true));
}

#[test]
fn test_text_coerces_numbers() {
    let spec = PathSpec::single("wind.speed");
    assert_eq!(lookup_text(&current_weather(), &spec, "calm"), "22");
    assert_eq!(lookup_text(&legacy_weather(), &spec, "calm"), "calm");
}

#[test]
fn test_doc_of_subtree() {
    let spec = PathSpec::single("wind");
    let wind = lookup_doc(&current_weather(), &spec, Value::Null);
    assert_eq!(wind.get("direction"), Some(&Value::from("SW")));
    assert!(lookup_doc(&legacy_weather(), &spec, Value::Null).is_empty());
}

#[test]
fn test_coercion_applies_to_the_default_too() {
    let spec = PathSpec::single("missing");
    let root = payload("{}");
    assert_eq!(lookup_number(&root, &spec, "7"), 7.0);
    assert!(lookup_bool(&root, &spec, "yes"));
    assert_eq!(lookup_text(&root, &spec, Value::Null), "null");
}
