//! Caller-defined field extraction.
//!
//! A [`FieldMap`] is usually loaded from a JSON object where each key names an
//! output field and each value says where to find it:
//!
//! ```json
//! {
//!     "station": "station.name",
//!     "celsius": ["temp.celsius", "c"],
//!     "gust": {"path": "wind.gust", "default": 0}
//! }
//! ```
//!
//! A string is a single path, an array is an ordered candidate list, and an
//! object gives a path spec plus a default. Fields without a default
//! resolve to `null` when missing.

use tracing::debug;

use crate::{
    Error, Result,
    path::PathSpec,
    resolve::lookup,
    value::{Doc, Value},
};

/// One named field of a [`FieldMap`].
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Output key
    pub name: String,
    /// Where to read the value from
    pub spec: PathSpec,
    /// Value used when the spec does not resolve
    pub default: Value,
}

/// An ordered set of fields to extract from a payload.
///
/// # Examples
///
/// ```
/// # use vane::{payload::FieldMap, value::Value};
/// let map = FieldMap::from_json_str(r#"{"temp": ["temp.celsius", "c"], "gust": {"path": "wind.gust", "default": 0}}"#)?;
/// let payload: Value = serde_json::from_str(r#"{"c": 18}"#)?;
///
/// let out = map.extract(&payload);
/// assert_eq!(out.get("temp"), Some(&Value::Int(18)));
/// assert_eq!(out.get("gust"), Some(&Value::Int(0)));
/// # Ok::<(), vane::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldMap {
    fields: Vec<Field>,
}

impl FieldMap {
    /// Creates an empty map
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Adds a field, builder style
    pub fn field(
        mut self,
        name: impl Into<String>,
        spec: impl Into<PathSpec>,
        default: impl Into<Value>,
    ) -> Self {
        self.fields.push(Field {
            name: name.into(),
            spec: spec.into(),
            default: default.into(),
        });
        self
    }

    /// Parses a map from its JSON description.
    ///
    /// # Errors
    /// Returns [`Error::InvalidMapping`] when the description is not an
    /// object, when an entry is neither a path spec nor a `{"path", "default"}`
    /// object, or when an entry's path spec is malformed.
    pub fn from_json(description: &serde_json::Value) -> Result<Self> {
        let entries = description
            .as_object()
            .ok_or_else(|| Error::InvalidMapping {
                field: "(root)".to_string(),
                reason: format!("expected an object, found {description}"),
            })?;

        let mut fields = Vec::with_capacity(entries.len());
        for (name, entry) in entries {
            fields.push(parse_field(name, entry)?);
        }
        Ok(Self { fields })
    }

    /// Parses a map from JSON text, see [`FieldMap::from_json`].
    pub fn from_json_str(description: &str) -> Result<Self> {
        let description: serde_json::Value = serde_json::from_str(description)?;
        Self::from_json(&description)
    }

    /// Resolves every field against `payload`.
    ///
    /// Never fails; each field that does not resolve takes its default.
    pub fn extract(&self, payload: &Value) -> Doc {
        self.fields
            .iter()
            .map(|field| {
                let found = lookup(payload, &field.spec, &field.default);
                if std::ptr::eq(found, &field.default) {
                    debug!(field = %field.name, spec = %field.spec, "field fell back to default");
                }
                (field.name.clone(), found.clone())
            })
            .collect()
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if there are no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over the fields in order
    pub fn iter(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter()
    }
}

fn parse_field(name: &str, entry: &serde_json::Value) -> Result<Field> {
    let invalid = |reason: String| Error::InvalidMapping {
        field: name.to_string(),
        reason,
    };

    let (spec, default) = match entry {
        serde_json::Value::Object(options) => {
            if let Some(unknown) = options
                .keys()
                .find(|k| !matches!(k.as_str(), "path" | "default"))
            {
                return Err(invalid(format!("unknown option '{unknown}'")));
            }
            let spec = options
                .get("path")
                .ok_or_else(|| invalid("missing 'path'".to_string()))?;
            let default = options.get("default").map_or(Value::Null, Value::from);
            (spec, default)
        }
        spec => (spec, Value::Null),
    };

    let spec = PathSpec::from_json(spec).map_err(|err| invalid(err.to_string()))?;
    Ok(Field {
        name: name.to_string(),
        spec,
        default,
    })
}
