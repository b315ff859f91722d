//!
//! Vane: safe reads from untyped, variable-shaped payloads.
//! This library resolves dot-separated paths against parsed documents without ever failing on missing data.
//!
//! ## Core Concepts
//!
//! * **Values (`value::Value`)**: An untyped payload tree of mappings (`value::Doc`), lists and primitive leaves, usually parsed from JSON.
//! * **Paths (`path::Path`)**: Dot-separated key names such as `"wind.speed"`. Segments are taken verbatim; the empty path names the root.
//! * **Path specs (`path::PathSpec`)**: Either one path or an ordered list of fallback candidates for payloads whose shape changed over time.
//! * **Resolution (`resolve`)**: Walks a path and returns the found value or the caller's default, under an existence or definedness policy.
//! * **Coercion (`value::Value::to_bool` and friends)**: Forced conversions layered over resolution.
//! * **Normalization (`payload`)**: Typed records built from raw payloads with legacy-shape fallback.

pub mod path;
pub mod payload;
pub mod resolve;
pub mod value;

pub use path::{Path, PathBuf, PathSpec};
pub use resolve::{Policy, lookup, resolve, resolve_first};
pub use value::{Doc, Value};

/// Result type used throughout the Vane library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the Vane library.
///
/// Missing data is never an error. These variants cover malformed caller
/// input and the I/O and parsing done around resolution.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured path errors from the path module
    #[error(transparent)]
    Path(path::PathError),

    /// A field mapping description could not be parsed
    #[error("invalid field mapping for '{field}': {reason}")]
    InvalidMapping { field: String, reason: String },
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Io(_) => "io",
            Error::Serialize(_) => "serialize",
            Error::Path(_) => "path",
            Error::InvalidMapping { .. } => "payload",
        }
    }

    /// Check if this error is a caller contract violation rather than an
    /// environmental failure.
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, Error::Path(_) | Error::InvalidMapping { .. })
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        matches!(self, Error::Io(_))
    }

    /// Check if this error came from parsing or writing JSON.
    pub fn is_serialization_error(&self) -> bool {
        matches!(self, Error::Serialize(_))
    }
}
