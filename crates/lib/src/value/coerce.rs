//! Forced conversions from any [`Value`] to a primitive.
//!
//! These follow ECMAScript's `Boolean`, `Number`, `String` and `Object`
//! conversions, which is what payload producers built on JSON tooling assume:
//!
//! | Value        | `to_bool`          | `to_number`          | `to_text`                | `to_doc`            |
//! |--------------|--------------------|----------------------|--------------------------|---------------------|
//! | `Undefined`  | `false`            | `NaN`                | `"undefined"`            | empty               |
//! | `Null`       | `false`            | `0`                  | `"null"`                 | empty               |
//! | `Bool(b)`    | `b`                | `1` / `0`            | `"true"` / `"false"`     | empty               |
//! | `Int(n)`     | `n != 0`           | `n`                  | decimal                  | empty               |
//! | `Float(f)`   | `f != 0 && !NaN`   | `f`                  | shortest decimal         | empty               |
//! | `Text(s)`    | `!s.is_empty()`    | parsed, `""` is `0`  | `s`                      | empty               |
//! | `List(xs)`   | `true`             | `to_text` then parse | items joined by `,`      | keys `"0"`, `"1"`.. |
//! | `Doc(d)`     | `true`             | `NaN`                | `"[object Object]"`      | `d`                 |

use super::{Doc, Value};

impl Value {
    /// Truthiness of the value.
    ///
    /// ```
    /// # use vane::value::{Doc, Value};
    /// assert!(!Value::from("").to_bool());
    /// assert!(Value::from("false").to_bool());
    /// assert!(Value::Doc(Doc::new()).to_bool());
    /// assert!(!Value::Float(f64::NAN).to_bool());
    /// ```
    pub fn to_bool(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Bool(b) => *b,
            Value::Int(n) => *n != 0,
            Value::Float(f) => *f != 0.0 && !f.is_nan(),
            Value::Text(s) => !s.is_empty(),
            Value::List(_) | Value::Doc(_) => true,
        }
    }

    /// Numeric value, `NaN` when there is none.
    ///
    /// ```
    /// # use vane::value::Value;
    /// assert_eq!(Value::from(" 21.5 ").to_number(), 21.5);
    /// assert_eq!(Value::from("0x1A").to_number(), 26.0);
    /// assert_eq!(Value::Null.to_number(), 0.0);
    /// assert!(Value::from("12 knots").to_number().is_nan());
    /// ```
    pub fn to_number(&self) -> f64 {
        match self {
            Value::Undefined | Value::Doc(_) => f64::NAN,
            Value::Null => 0.0,
            Value::Bool(b) => f64::from(u8::from(*b)),
            Value::Int(n) => *n as f64,
            Value::Float(f) => *f,
            Value::Text(s) => parse_number(s),
            Value::List(_) => parse_number(&self.to_text()),
        }
    }

    /// String form of the value.
    ///
    /// ```
    /// # use vane::value::Value;
    /// assert_eq!(Value::Float(2.0).to_text(), "2");
    /// assert_eq!(Value::Null.to_text(), "null");
    /// let list = Value::List(vec![Value::Int(1), Value::Null, Value::from("x")]);
    /// assert_eq!(list.to_text(), "1,,x");
    /// ```
    pub fn to_text(&self) -> String {
        match self {
            Value::Undefined => "undefined".to_string(),
            Value::Null => "null".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Int(n) => n.to_string(),
            Value::Float(f) => format_number(*f),
            Value::Text(s) => s.clone(),
            Value::List(items) => items
                .iter()
                .map(|item| match item {
                    Value::Null | Value::Undefined => String::new(),
                    other => other.to_text(),
                })
                .collect::<Vec<_>>()
                .join(","),
            Value::Doc(_) => "[object Object]".to_string(),
        }
    }

    /// Mapping view of the value.
    ///
    /// Lists are keyed by their indices; leaves yield an empty document.
    pub fn to_doc(&self) -> Doc {
        match self {
            Value::Doc(doc) => doc.clone(),
            Value::List(items) => items
                .iter()
                .enumerate()
                .map(|(index, item)| (index.to_string(), item.clone()))
                .collect(),
            _ => Doc::new(),
        }
    }
}

/// Formats a float the way ECMAScript's `Number::toString` does for the
/// common cases: integral values have no fractional part and non-finite
/// values are spelled out.
pub(crate) fn format_number(f: f64) -> String {
    if f.is_nan() {
        "NaN".to_string()
    } else if f.is_infinite() {
        let spelled = if f > 0.0 { "Infinity" } else { "-Infinity" };
        spelled.to_string()
    } else if f == 0.0 {
        // covers -0
        "0".to_string()
    } else {
        f.to_string()
    }
}

/// Parses text the way ECMAScript's `Number(string)` does.
fn parse_number(s: &str) -> f64 {
    let s = s.trim();
    if s.is_empty() {
        return 0.0;
    }

    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match s.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return u64::from_str_radix(&s[2..], radix).map_or(f64::NAN, |n| n as f64);
    }

    // Rust also accepts "inf" and "nan" spellings, which are not numbers here
    if !s
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'))
    {
        return f64::NAN;
    }
    s.parse().unwrap_or(f64::NAN)
}
