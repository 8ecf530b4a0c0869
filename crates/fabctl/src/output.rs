//! Output formatting: JSON, YAML, table, plain.
//!
//! Renders query results and operation outcomes in the format selected
//! by `--output`. Table uses `tabled`, structured formats use serde,
//! plain emits one identifier per line for scripting.

use std::io::{self, Write};

use serde_json::Value;
use tabled::{settings::Style, Table, Tabled};

use fabctl_api::Outcome;

use crate::cli::OutputFormat;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct RecordRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
}

impl From<&Value> for RecordRow {
    fn from(record: &Value) -> Self {
        Self {
            id: field(record, "id"),
            name: field(record, "name"),
        }
    }
}

/// A record field as display text; non-strings are JSON-encoded.
fn field(record: &Value, key: &str) -> String {
    match record.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

// ── Render dispatchers ───────────────────────────────────────────────

/// Render query results in the chosen format.
///
/// Records are untyped controller JSON; the table view shows id and
/// name, plain emits one id per line, structured formats pass the
/// records through verbatim.
pub fn render_records(format: &OutputFormat, records: &[Value]) -> String {
    match format {
        OutputFormat::Table => {
            let rows: Vec<RecordRow> = records.iter().map(RecordRow::from).collect();
            Table::new(rows).with(Style::rounded()).to_string()
        }
        OutputFormat::Json => render_json_pretty(records),
        OutputFormat::JsonCompact => render_json_compact(records),
        OutputFormat::Yaml => render_yaml(records),
        OutputFormat::Plain => records
            .iter()
            .map(|r| field(r, "id"))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

/// Render an operation outcome in the chosen format.
///
/// Table and plain reduce to the human summary line; structured
/// formats serialize the whole outcome (method, url, status, response,
/// changed, message).
pub fn render_outcome(format: &OutputFormat, outcome: &Outcome) -> String {
    match format {
        OutputFormat::Json => render_json_pretty(outcome),
        OutputFormat::JsonCompact => render_json_compact(outcome),
        OutputFormat::Yaml => render_yaml(outcome),
        OutputFormat::Table | OutputFormat::Plain => outcome.message.clone(),
    }
}

/// Print the rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}

// ── Format-specific renderers ────────────────────────────────────────

fn render_json_pretty<T: serde::Serialize + ?Sized>(data: &T) -> String {
    serde_json::to_string_pretty(data).expect("serialization should not fail")
}

fn render_json_compact<T: serde::Serialize + ?Sized>(data: &T) -> String {
    serde_json::to_string(data).expect("serialization should not fail")
}

fn render_yaml<T: serde::Serialize + ?Sized>(data: &T) -> String {
    serde_yaml::to_string(data).expect("serialization should not fail")
}
