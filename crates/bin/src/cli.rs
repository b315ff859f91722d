//! CLI argument definitions for the Vane binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;

/// Forced conversion applied to a resolved value
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Coercion {
    /// Truthiness
    Bool,
    /// Numeric value, NaN when there is none
    Number,
    /// String form
    Text,
    /// Mapping view
    Doc,
}

/// Read values out of JSON payloads by dot-path
#[derive(Parser, Debug)]
#[command(name = "vane")]
#[command(about = "Vane: safe dot-path reads from variable-shaped JSON payloads")]
#[command(version)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human", env = "VANE_FORMAT")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve one path, or the first defined of several
    Get(GetArgs),
    /// Extract named fields described by a mapping file
    Extract(ExtractArgs),
    /// Normalize a weather payload
    Weather(WeatherArgs),
}

/// Where the payload comes from
#[derive(clap::Args, Debug, Clone)]
pub struct InputArgs {
    /// JSON payload file. Reads stdin when omitted or `-`
    #[arg(short, long, env = "VANE_INPUT")]
    pub input: Option<PathBuf>,
}

/// Arguments for the get command
#[derive(clap::Args, Debug)]
pub struct GetArgs {
    /// Dot-paths. Several paths are tried in order, first defined value wins
    #[arg(required = true)]
    pub paths: Vec<String>,

    #[command(flatten)]
    pub input: InputArgs,

    /// Value returned when nothing resolves. Parsed as JSON, taken as text otherwise
    #[arg(short, long, allow_hyphen_values = true)]
    pub default: Option<String>,

    /// Require keys to hold a value, not just exist (single path only)
    #[arg(long)]
    pub defined: bool,

    /// Treat a single path as a one-element candidate list
    #[arg(long)]
    pub candidates: bool,

    /// Coerce the result
    #[arg(long = "as", value_enum)]
    pub coerce: Option<Coercion>,
}

/// Arguments for the extract command
#[derive(clap::Args, Debug)]
pub struct ExtractArgs {
    /// JSON field mapping file
    #[arg(short, long, env = "VANE_MAPPING")]
    pub mapping: PathBuf,

    #[command(flatten)]
    pub input: InputArgs,
}

/// Arguments for the weather command
#[derive(clap::Args, Debug)]
pub struct WeatherArgs {
    #[command(flatten)]
    pub input: InputArgs,
}
