//! Payload loading from files or stdin.

use std::{
    fs,
    io::{self, Read},
    path::Path,
};

use tracing::debug;
use vane::Value;

/// Reads and parses a JSON payload.
///
/// `None` and `-` read from stdin.
pub fn read_payload(source: Option<&Path>) -> vane::Result<Value> {
    let text = read_source(source)?;
    debug!(bytes = text.len(), "read payload");
    Ok(serde_json::from_str(&text)?)
}

/// Reads a file, or stdin for `None` and `-`.
pub fn read_source(source: Option<&Path>) -> io::Result<String> {
    match source {
        Some(path) if path != Path::new("-") => fs::read_to_string(path),
        _ => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}
