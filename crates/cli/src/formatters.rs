//! Output formatting for constants.
//!
//! Responsibilities:
//! - Render a value, the full table, or environment details as text or JSON.
//!
//! Invariants:
//! - Tables are rendered in key order.
//! - Text output for strings is the raw string, unquoted.

use anyhow::Result;
use env_constants::{Constants, Value};
use serde_json::json;

use crate::args::OutputFormat;

pub fn format_value(value: &Value, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => value.to_string(),
        OutputFormat::Json => serde_json::to_string(value)?,
    })
}

pub fn format_table(constants: &Constants, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => constants
            .iter()
            .map(|(key, value)| format!("{key} = {value}"))
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Json => serde_json::to_string_pretty(constants.as_map())?,
    })
}

pub fn format_env(constants: &Constants, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => format!(
            "environment: {}\nvariable: {}\nconfig: {}",
            constants.environment(),
            constants.variable(),
            constants.config_path().display()
        ),
        OutputFormat::Json => serde_json::to_string_pretty(&json!({
            "environment": constants.environment(),
            "variable": constants.variable(),
            "config": constants.config_path().display().to_string(),
            "count": constants.len(),
        }))?,
    })
}
