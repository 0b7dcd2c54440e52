//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{IdiomGraphArgs, OutputFormat};
use crate::error::Result;
use crate::pipeline::PipelineSummary;

/// Result structure for the generate command.
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateResult {
    pub summary: PipelineSummary,
    pub output: String,
    pub image: Option<String>,
    pub duration_ms: u64,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &IdiomGraphArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &IdiomGraphArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }

    let value = serde_json::to_value(result)?;
    for line in human_lines(&value, "") {
        println!("{line}");
    }
    Ok(())
}

/// Flatten a JSON value into `key: value` lines, skipping nulls.
fn human_lines(value: &serde_json::Value, prefix: &str) -> Vec<String> {
    let mut lines = Vec::new();
    match value {
        serde_json::Value::Object(map) => {
            for (key, value) in map {
                let label = format_label(key);
                match value {
                    serde_json::Value::Null => {}
                    serde_json::Value::Object(_) => {
                        lines.push(format!("{prefix}{label}:"));
                        lines.extend(human_lines(value, &format!("{prefix}  ")));
                    }
                    serde_json::Value::String(text) => {
                        lines.push(format!("{prefix}{label}: {text}"))
                    }
                    other => lines.push(format!("{prefix}{label}: {other}")),
                }
            }
        }
        other => lines.push(format!("{prefix}{other}")),
    }
    lines
}

/// `remaining_first_characters` -> `Remaining first characters`.
fn format_label(key: &str) -> String {
    let spaced = key.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &IdiomGraphArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}
