//! General properties, checked over a spread of roots and paths.

use vane::{Doc, Policy, Value, resolve, resolve_first};

use crate::helpers::*;

fn marker() -> Value {
    Value::from("<<default>>")
}

#[test]
fn test_empty_path_returns_every_structured_root() {
    let default = marker();
    for root in sample_roots().into_iter().filter(Value::is_structured) {
        for policy in [Policy::Exists, Policy::Defined] {
            assert_eq!(resolve(&root, "", &default, policy), &root, "root {root:?}");
        }
    }
}

#[test]
fn test_empty_path_on_leaf_roots_returns_default() {
    let default = marker();
    for root in sample_roots().into_iter().filter(Value::is_leaf) {
        for policy in [Policy::Exists, Policy::Defined] {
            assert_eq!(resolve(&root, "", &default, policy), &default, "root {root:?}");
        }
    }
}

#[test]
fn test_unwalkable_intermediate_yields_default() {
    let default = marker();
    let blockers = vec![
        Value::Null,
        Value::Undefined,
        Value::Bool(false),
        Value::Int(1),
        Value::from("a"),
        Value::List(vec![Value::Int(1)]),
    ];

    for blocker in blockers {
        let root = Value::from(Doc::new().with("a", blocker.clone()));
        assert_eq!(
            resolve(&root, "a.b.c", &default, Policy::Exists),
            &default,
            "a = {blocker:?}"
        );
    }

    let root = Value::from(Doc::new().with("z", 1));
    assert_eq!(resolve(&root, "a.b.c", &default, Policy::Exists), &default);
}

#[test]
fn test_definedness_is_stronger_than_existence() {
    let default = marker();
    for root in sample_roots() {
        for path in sample_paths() {
            let defined = resolve(&root, path, &default, Policy::Defined);
            let exists = resolve(&root, path, &default, Policy::Exists);

            // Whatever the definedness policy finds, existence finds too
            if defined != &default {
                assert_eq!(defined, exists, "root {root:?} path '{path}'");
            }
        }
    }
}

#[test]
fn test_undefined_leaf_separates_the_policies() {
    let root = with_undefined();
    let default = marker();
    for path in ["top", "nested.gone"] {
        assert_eq!(resolve(&root, path, &default, Policy::Exists), &Value::Undefined);
        assert_eq!(resolve(&root, path, &default, Policy::Defined), &default);
    }
    // null is a value under both policies
    assert_eq!(resolve(&root, "null", &default, Policy::Defined), &Value::Null);
}

#[test]
fn test_resolve_first_matches_manual_fallback() {
    let default = marker();
    for root in sample_roots() {
        for first in sample_paths() {
            for second in sample_paths() {
                let expected = {
                    let a = resolve(&root, first, &default, Policy::Defined);
                    if a != &default {
                        a
                    } else {
                        resolve(&root, second, &default, Policy::Defined)
                    }
                };
                assert_eq!(
                    resolve_first(&root, &[first, second], &default),
                    expected,
                    "root {root:?} paths ['{first}', '{second}']"
                );
            }
        }
    }
}

#[test]
fn test_resolve_first_never_returns_undefined() {
    let default = marker();
    for root in sample_roots().into_iter().filter(|r| !r.is_undefined()) {
        for path in sample_paths() {
            assert!(
                !resolve_first(&root, &[path], &default).is_undefined(),
                "root {root:?} path '{path}'"
            );
        }
    }
}

#[test]
fn test_candidate_order_matters_when_candidates_disagree() {
    let root = payload(r#"{"temp": {"celsius": 21}, "c": 3}"#);
    let default = marker();
    let forward = resolve_first(&root, &["temp.celsius", "c"], &default);
    let backward = resolve_first(&root, &["c", "temp.celsius"], &default);
    assert_ne!(forward, backward);
}

#[test]
fn test_resolution_is_pure() {
    let default = marker();
    for root in sample_roots() {
        let before = root.clone();
        for path in sample_paths() {
            for policy in [Policy::Exists, Policy::Defined] {
                let first = resolve(&root, path, &default, policy).clone();
                let second = resolve(&root, path, &default, policy).clone();
                assert_eq!(first, second);
            }
        }
        assert_eq!(root, before, "root must not change");
    }
}

#[test]
fn test_concurrent_readers_agree() {
    let root = current_weather();
    let default = marker();
    let expected = resolve(&root, "wind.direction", &default, Policy::Exists).clone();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(|| resolve(&root, "wind.direction", &default, Policy::Exists).clone())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
