//! Section selection and table construction.
//!
//! Responsibilities:
//! - Pick the section named by the environment.
//! - Layer it over the `[DEFAULT]` section.
//! - Strip inline `;` comments and tidy continuation lines.
//! - Interpolate and cast every raw value into the constants table.
//!
//! Invariants:
//! - Section names match the environment exactly (case-sensitive).
//! - Option keys are lower-cased; the selected section wins over `[DEFAULT]`.
//! - A section header that appears more than once is one section; later entries win.
//! - `[DEFAULT]` is never selectable as an environment on its own.

use ini::Ini;
use std::collections::BTreeMap;
use std::path::Path;

use super::interpolate::interpolate;
use crate::defaults::DEFAULT_SECTION;
use crate::error::ConstantsError;
use crate::value::{Value, cast};

/// Build the constants table for `environment` from a parsed document.
pub(crate) fn load_table(
    ini: &Ini,
    environment: &str,
    path: &Path,
) -> Result<BTreeMap<String, Value>, ConstantsError> {
    let selectable = environment != DEFAULT_SECTION && ini.section(Some(environment)).is_some();
    if !selectable {
        return Err(ConstantsError::UnknownEnvironment {
            environment: environment.to_string(),
            path: path.to_path_buf(),
        });
    }

    let mut raw = BTreeMap::new();
    let blocks = ini
        .section_all(Some(DEFAULT_SECTION))
        .chain(ini.section_all(Some(environment)));
    for properties in blocks {
        for (key, value) in properties.iter() {
            raw.insert(key.to_lowercase(), clean_value(value));
        }
    }

    raw.iter()
        .map(|(key, value)| {
            let expanded = interpolate(key, value, &raw)?;
            Ok((key.clone(), cast(&expanded)))
        })
        .collect()
}

/// Drop an inline comment from the first line, then trim continuation lines
/// and skip blank ones.
fn clean_value(value: &str) -> String {
    let mut lines = value.split('\n');
    let first = strip_inline_comment(lines.next().unwrap_or_default());
    std::iter::once(first)
        .chain(lines.map(str::trim).filter(|line| !line.is_empty()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Cut the line at the first `;` when whitespace precedes it.
///
/// Only the first `;` is considered, so `a;b ; c` is kept whole.
fn strip_inline_comment(line: &str) -> &str {
    match line.find(';') {
        Some(pos) if line[..pos].ends_with(char::is_whitespace) => line[..pos].trim_end(),
        _ => line,
    }
}
