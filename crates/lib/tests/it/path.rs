//! Path and PathSpec integration tests

use vane::{Path, PathBuf, PathSpec, path::PathError};

#[test]
fn test_macro_forms_agree() {
    let literal = vane::path!("station.name");
    let parts = vane::path!("station", "name");
    let base = String::from("station");
    let mixed = vane::path!(base, "name");

    assert_eq!(parts, literal);
    assert_eq!(mixed, literal);
}

#[test]
fn test_accepts_any_as_ref_path() {
    fn segments(p: impl AsRef<Path>) -> Vec<String> {
        p.as_ref().segments().map(str::to_string).collect()
    }

    let expected = vec!["a".to_string(), "b".to_string()];
    assert_eq!(segments("a.b"), expected);
    assert_eq!(segments(String::from("a.b")), expected);
    assert_eq!(segments(PathBuf::from("a.b")), expected);
    assert_eq!(segments(&PathBuf::from("a.b")), expected);
    assert_eq!(segments(Path::new("a.b")), expected);
}

#[test]
fn test_spec_from_json_shapes() {
    let spec = PathSpec::from_json(&serde_json::json!("wind.speed")).unwrap();
    assert!(spec.is_single());

    let spec = PathSpec::from_json(&serde_json::json!(["wind.speed", "ws"])).unwrap();
    let paths: Vec<&str> = spec.paths().iter().map(|p| p.as_str()).collect();
    assert_eq!(paths, vec!["wind.speed", "ws"]);
}

#[test]
fn test_spec_contract_violations() {
    assert_eq!(
        PathSpec::from_json(&serde_json::json!([])),
        Err(PathError::EmptyCandidates)
    );
    for bad in [
        serde_json::json!(null),
        serde_json::json!(true),
        serde_json::json!(1.5),
        serde_json::json!({"a": "b"}),
        serde_json::json!([["nested"]]),
    ] {
        let err = PathSpec::from_json(&bad).unwrap_err();
        assert!(err.found().is_some(), "{bad} should be rejected as invalid");
    }
}

#[test]
fn test_path_error_converts_into_crate_error() {
    let err: vane::Error = PathError::EmptyCandidates.into();
    assert_eq!(err.module(), "path");
    assert!(err.is_contract_violation());
    assert_eq!(err.to_string(), "candidate path list is empty");
}
