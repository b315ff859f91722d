//! Reading possibly-missing, possibly-nested values by dot-path.
//!
//! Resolution never fails: when the path does not lead to a value the caller's
//! default is returned instead. Two membership policies are available:
//!
//! - [`Policy::Exists`] - a segment matches when its key is present
//! - [`Policy::Defined`] - a segment matches only when its key holds a value
//!   other than [`Value::Undefined`]
//!
//! # Functions
//!
//! - [`resolve`] - one path, explicit policy
//! - [`resolve_first`] - ordered candidate paths, first defined match wins
//! - [`lookup`] - dispatches on the shape of a [`PathSpec`]
//! - [`lookup_bool`], [`lookup_number`], [`lookup_text`], [`lookup_doc`] -
//!   [`lookup`] followed by a forced coercion
//!
//! # Usage
//!
//! ```
//! use vane::{
//!     path::PathSpec,
//!     resolve::{Policy, lookup, resolve, resolve_first},
//!     value::Value,
//! };
//!
//! let payload: Value = serde_json::from_str(r#"{"c": 3, "wind": {"speed": 12}}"#)?;
//! let zero = Value::Int(0);
//!
//! assert_eq!(resolve(&payload, "wind.speed", &zero, Policy::Exists), &Value::Int(12));
//! assert_eq!(resolve(&payload, "wind.gust", &zero, Policy::Exists), &zero);
//! assert_eq!(resolve_first(&payload, &["temp.celsius", "c"], &zero), &Value::Int(3));
//!
//! let spec = PathSpec::try_from(["temp.celsius", "c"])?;
//! assert_eq!(lookup(&payload, &spec, &zero), &Value::Int(3));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use tracing::trace;

use crate::{
    path::{Path, PathSpec},
    value::{Doc, Value},
};

/// Membership test applied to each path segment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Policy {
    /// The key only has to be present, whatever it holds.
    #[default]
    Exists,
    /// The key has to hold something other than [`Value::Undefined`].
    Defined,
}

impl Policy {
    /// Looks `key` up in `doc` under this policy.
    fn member<'a>(self, doc: &'a Doc, key: &str) -> Option<&'a Value> {
        match self {
            Policy::Exists => doc.get(key),
            Policy::Defined => doc.get_defined(key),
        }
    }
}

impl From<bool> for Policy {
    /// `true` selects [`Policy::Defined`].
    fn from(require_defined: bool) -> Self {
        if require_defined {
            Policy::Defined
        } else {
            Policy::Exists
        }
    }
}

/// Walks `path` from `root`, returning `None` on the first segment that does
/// not match. `None` is the absent marker and stays inside this module.
fn walk<'a>(root: &'a Value, path: &Path, policy: Policy) -> Option<&'a Value> {
    // The empty path names a structured root itself
    if path.is_empty() && root.is_structured() {
        return Some(root);
    }

    let mut current = root;
    for segment in path.segments() {
        let doc = match current {
            Value::Doc(doc) => doc,
            Value::List(_) => {
                // Lists are structured but carry no string keys
                trace!(%path, segment, "list has no keyed members");
                return None;
            }
            other => {
                trace!(%path, segment, found = other.type_name(), "cannot descend into leaf");
                return None;
            }
        };

        current = match policy.member(doc, segment) {
            Some(value) => value,
            None => {
                trace!(%path, segment, ?policy, "segment did not match");
                return None;
            }
        };
    }
    Some(current)
}

/// Resolves a single dot-path against `root`.
///
/// Returns the value at the end of the path, or `default` if any segment
/// fails the `policy` test or the walk reaches a leaf early. The empty path
/// returns `root` unchanged when `root` is structured; for a leaf root it is
/// walked as one empty segment and fails like any other missing key.
///
/// Under [`Policy::Exists`] a key bound to [`Value::Undefined`] matches, so
/// `Undefined` itself can be returned.
///
/// # Examples
///
/// ```
/// # use vane::{resolve::{Policy, resolve}, value::{Doc, Value}};
/// let root = Value::from(Doc::new().with("a", Value::Undefined));
/// let fallback = Value::from("fallback");
///
/// assert_eq!(resolve(&root, "a", &fallback, Policy::Exists), &Value::Undefined);
/// assert_eq!(resolve(&root, "a", &fallback, Policy::Defined), &fallback);
/// ```
pub fn resolve<'a>(
    root: &'a Value,
    path: impl AsRef<Path>,
    default: &'a Value,
    policy: Policy,
) -> &'a Value {
    walk(root, path.as_ref(), policy).unwrap_or(default)
}

/// Resolves the first defined candidate path against `root`.
///
/// Each path is resolved in order under [`Policy::Defined`]; the first one
/// that leads to a value wins. If none does, `default` is returned.
///
/// # Examples
///
/// ```
/// # use vane::{resolve::resolve_first, value::{Doc, Value}};
/// let legacy = Value::from(Doc::new().with("c", 3));
/// let current = Value::from(Doc::new().with("temp", Doc::new().with("celsius", 21)));
/// let unknown = Value::Int(-1);
///
/// let paths = ["temp.celsius", "c"];
/// assert_eq!(resolve_first(&legacy, &paths, &unknown), &Value::Int(3));
/// assert_eq!(resolve_first(&current, &paths, &unknown), &Value::Int(21));
/// assert_eq!(resolve_first(&Value::from(Doc::new()), &paths, &unknown), &unknown);
/// ```
pub fn resolve_first<'a, P>(root: &'a Value, paths: &[P], default: &'a Value) -> &'a Value
where
    P: AsRef<Path>,
{
    for path in paths {
        let path: &Path = path.as_ref();
        if let Some(found) = walk(root, path, Policy::Defined) {
            return found;
        }
        trace!(%path, "candidate undefined, trying next");
    }
    default
}

/// Resolves `spec` against `root`, routing on its shape.
///
/// A [`PathSpec::Single`] goes to [`resolve`] with [`Policy::Exists`]; a
/// [`PathSpec::Candidates`] list goes to [`resolve_first`].
pub fn lookup<'a>(root: &'a Value, spec: &PathSpec, default: &'a Value) -> &'a Value {
    match spec {
        PathSpec::Single(path) => resolve(root, path, default, Policy::Exists),
        PathSpec::Candidates(paths) => resolve_first(root, paths, default),
    }
}

/// [`lookup`] coerced with [`Value::to_bool`].
pub fn lookup_bool(root: &Value, spec: &PathSpec, default: impl Into<Value>) -> bool {
    let default = default.into();
    lookup(root, spec, &default).to_bool()
}

/// [`lookup`] coerced with [`Value::to_number`].
///
/// ```
/// # use vane::{path::PathSpec, resolve::lookup_number, value::Value};
/// let payload: Value = serde_json::from_str(r#"{"wind": {"speed": "14.5"}}"#)?;
/// assert_eq!(lookup_number(&payload, &"wind.speed".into(), 0), 14.5);
/// assert_eq!(lookup_number(&payload, &"wind.gust".into(), 0), 0.0);
/// # Ok::<(), serde_json::Error>(())
/// ```
pub fn lookup_number(root: &Value, spec: &PathSpec, default: impl Into<Value>) -> f64 {
    let default = default.into();
    lookup(root, spec, &default).to_number()
}

/// [`lookup`] coerced with [`Value::to_text`].
pub fn lookup_text(root: &Value, spec: &PathSpec, default: impl Into<Value>) -> String {
    let default = default.into();
    lookup(root, spec, &default).to_text()
}

/// [`lookup`] coerced with [`Value::to_doc`].
pub fn lookup_doc(root: &Value, spec: &PathSpec, default: impl Into<Value>) -> Doc {
    let default = default.into();
    lookup(root, spec, &default).to_doc()
}
