//! Get command - resolves one path, or the first defined of several.

use vane::{PathSpec, Policy, Value, lookup, resolve};

use crate::cli::{Coercion, GetArgs};
use crate::input::read_payload;
use crate::output::{OutputFormat, print_value};

/// Run the get command
pub fn run(args: &GetArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let payload = read_payload(args.input.input.as_deref())?;
    let found = evaluate(&payload, args)?;
    print_value(&found, format)?;
    Ok(())
}

/// Resolves the requested paths and applies any coercion.
fn evaluate(payload: &Value, args: &GetArgs) -> vane::Result<Value> {
    let default = parse_default(args.default.as_deref());
    let spec = if args.paths.len() == 1 && !args.candidates {
        PathSpec::single(&args.paths[0])
    } else {
        PathSpec::candidates(&args.paths)?
    };

    let found = match &spec {
        PathSpec::Single(path) => resolve(payload, path, &default, Policy::from(args.defined)),
        candidates => lookup(payload, candidates, &default),
    };

    Ok(match args.coerce {
        None => found.clone(),
        Some(Coercion::Bool) => Value::Bool(found.to_bool()),
        Some(Coercion::Number) => Value::Float(found.to_number()),
        Some(Coercion::Text) => Value::Text(found.to_text()),
        Some(Coercion::Doc) => Value::Doc(found.to_doc()),
    })
}

/// Parses `--default` as JSON, falling back to plain text. Absent means null.
fn parse_default(raw: Option<&str>) -> Value {
    match raw {
        None => Value::Null,
        Some(raw) => serde_json::from_str(raw).unwrap_or_else(|_| Value::from(raw)),
    }
}
