//! `%(name)s` value interpolation.
//!
//! Responsibilities:
//! - Expand `%(name)s` references against the raw entries of one section.
//! - Collapse `%%` to a literal `%` in values that are expanded.
//!
//! Invariants:
//! - Only values containing `%(` are expanded; any other value is returned
//!   verbatim, `%%` included.
//! - In an expanded value every `%` starts `%%` or `%(`; anything else fails.
//! - Reference names are case-insensitive, like option keys.
//! - Referenced values are expanded recursively, at most
//!   `MAX_INTERPOLATION_DEPTH` levels deep; cycles hit that limit.

use std::collections::BTreeMap;

use crate::defaults::MAX_INTERPOLATION_DEPTH;
use crate::error::ConstantsError;

/// Expand the raw `value` stored under `key`, resolving references in `vars`.
pub(crate) fn interpolate(
    key: &str,
    value: &str,
    vars: &BTreeMap<String, String>,
) -> Result<String, ConstantsError> {
    let mut out = String::with_capacity(value.len());
    expand(key, value, vars, 1, &mut out)?;
    Ok(out)
}

fn expand(
    key: &str,
    value: &str,
    vars: &BTreeMap<String, String>,
    depth: usize,
    out: &mut String,
) -> Result<(), ConstantsError> {
    if depth > MAX_INTERPOLATION_DEPTH {
        return Err(error(
            key,
            format!("recursion deeper than {MAX_INTERPOLATION_DEPTH} levels"),
        ));
    }
    if !value.contains("%(") {
        out.push_str(value);
        return Ok(());
    }

    let mut rest = value;
    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos + 1..];

        if let Some(after) = tail.strip_prefix('%') {
            out.push('%');
            rest = after;
        } else if let Some(after) = tail.strip_prefix('(') {
            let close = after
                .find(')')
                .ok_or_else(|| error(key, format!("unterminated reference in '{value}'")))?;
            let name = after[..close].to_lowercase();
            let after_ref = after[close + 1..]
                .strip_prefix('s')
                .ok_or_else(|| error(key, format!("reference '%({name})' must end with 's'")))?;
            let referenced = vars
                .get(&name)
                .ok_or_else(|| error(key, format!("no option '{name}' to substitute")))?;
            expand(key, referenced, vars, depth + 1, out)?;
            rest = after_ref;
        } else {
            return Err(error(
                key,
                format!("'%' must be followed by '%' or '(' in '{value}'"),
            ));
        }
    }
    out.push_str(rest);
    Ok(())
}

fn error(key: &str, message: String) -> ConstantsError {
    ConstantsError::Interpolation {
        key: key.to_string(),
        message,
    }
}
