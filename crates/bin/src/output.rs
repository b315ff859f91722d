//! Output formatting helpers for human-readable and JSON output.

use clap::ValueEnum;
use vane::{Doc, Value};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Print a single resolved value.
///
/// Human output prints text unquoted and everything else as JSON.
pub fn print_value(value: &Value, format: OutputFormat) -> Result<(), serde_json::Error> {
    match format {
        OutputFormat::Human => println!("{value}"),
        OutputFormat::Json => println!("{}", serde_json::to_string(&value.to_json())?),
    }
    Ok(())
}

/// Print every field of a doc, one row per key in human mode.
pub fn print_doc(doc: &Doc, format: OutputFormat) -> Result<(), serde_json::Error> {
    match format {
        OutputFormat::Human => print_table(&["FIELD", "VALUE"], &doc_rows(doc)),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(&Value::from(doc.clone()).to_json())?)
        }
    }
    Ok(())
}

pub(crate) fn doc_rows(doc: &Doc) -> Vec<Vec<String>> {
    doc.iter()
        .map(|(key, value)| vec![key.clone(), value.to_string()])
        .collect()
}

/// Print a table with aligned columns in human-readable format.
///
/// `headers` and each row in `rows` must have the same length.
pub fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    for line in table_lines(headers, rows) {
        println!("{line}");
    }
}

fn table_lines(headers: &[&str], rows: &[Vec<String>]) -> Vec<String> {
    if rows.is_empty() {
        return Vec::new();
    }

    let col_count = headers.len();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(col_count) {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let render = |cells: Vec<&str>| {
        cells
            .iter()
            .enumerate()
            .map(|(i, cell)| format!("{:<width$}", cell, width = widths[i]))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(render(headers.to_vec()));
    for row in rows {
        lines.push(render(row.iter().take(col_count).map(String::as_str).collect()));
    }
    lines
}
