//! String-keyed mapping node.

use std::{collections::BTreeMap, fmt};

use super::Value;

/// A mapping from string keys to [`Value`]s.
///
/// `Doc` distinguishes a key that exists from a key that holds a value:
///
/// - [`Doc::contains_key`] reports whether the key is present at all
/// - [`Doc::get`] returns whatever is stored, including [`Value::Undefined`]
/// - [`Doc::get_defined`] hides keys bound to [`Value::Undefined`]
///
/// Children are kept in key order so rendering is deterministic.
///
/// # Examples
///
/// ```
/// # use vane::value::{Doc, Value};
/// let doc = Doc::new()
///     .with("speed", 12)
///     .with("gust", Value::Undefined);
///
/// assert!(doc.contains_key("gust"));
/// assert_eq!(doc.get("gust"), Some(&Value::Undefined));
/// assert_eq!(doc.get_defined("gust"), None);
/// assert_eq!(doc.get_defined("speed"), Some(&Value::Int(12)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Doc {
    children: BTreeMap<String, Value>,
}

impl Doc {
    /// Creates a new empty document
    pub fn new() -> Self {
        Self {
            children: BTreeMap::new(),
        }
    }

    /// Number of keys, including keys bound to `Undefined`
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns true if the document has no keys
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns true if `key` is present, whatever it is bound to
    pub fn contains_key(&self, key: &str) -> bool {
        self.children.contains_key(key)
    }

    /// Gets the value stored under `key`, including `Undefined`
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.children.get(key)
    }

    /// Gets the value stored under `key` unless it is `Undefined`
    pub fn get_defined(&self, key: &str) -> Option<&Value> {
        self.children.get(key).filter(|value| !value.is_undefined())
    }

    /// Inserts a direct child, returning the previous value if present.
    ///
    /// `key` is taken verbatim; dots are not interpreted.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.children.insert(key.into(), value.into())
    }

    /// Builder form of [`Doc::insert`]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Removes a direct child, returning it if present
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.children.remove(key)
    }

    /// Iterates over all key-value pairs in key order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.children.iter()
    }

    /// Iterates over all keys in order
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.children.keys()
    }

    /// Iterates over all values in key order
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.children.values()
    }
}

impl<K, V> FromIterator<(K, V)> for Doc
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            children: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Doc {
    type Item = (&'a String, &'a Value);
    type IntoIter = std::collections::btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}

impl IntoIterator for Doc {
    type Item = (String, Value);
    type IntoIter = std::collections::btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.into_iter()
    }
}

impl fmt::Display for Doc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Value::Doc(self.clone()).to_json_string())
    }
}
