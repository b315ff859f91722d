//! Extract command - pulls named fields out of a payload via a mapping file.

use tracing::info;
use vane::payload::FieldMap;

use crate::cli::ExtractArgs;
use crate::input::{read_payload, read_source};
use crate::output::{OutputFormat, print_doc};

/// Run the extract command
pub fn run(args: &ExtractArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let mapping = FieldMap::from_json_str(&read_source(Some(&args.mapping))?)?;
    info!(fields = mapping.len(), mapping = %args.mapping.display(), "loaded field mapping");

    let payload = read_payload(args.input.input.as_deref())?;
    print_doc(&mapping.extract(&payload), format)?;
    Ok(())
}
