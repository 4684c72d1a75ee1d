//! Constants loading from the environment and an INI file.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConstantsLoader` naming the variable and file.
//! - Run the load pipeline: resolve environment, read config, build table.
//! - Optionally load a `.env` file before the variable is resolved.
//!
//! Does NOT handle:
//! - Lookup and mutation after load (see `store.rs`).
//! - Writing changes back to the config file.
//!
//! Invariants / Assumptions:
//! - Steps run in order and stop at the first failure; no partial table escapes.
//! - The environment variable is resolved before the file is touched.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod builder;
mod env;
mod file;
mod interpolate;
mod section;

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;
use std::path::Path;

pub use builder::ConstantsLoader;

use crate::error::ConstantsError;
use crate::trace::traced;
use crate::value::Value;

/// Resolve the environment and build its table from `config_path`.
pub(crate) fn load(
    variable: &str,
    config_path: &Path,
) -> Result<(String, BTreeMap<String, Value>), ConstantsError> {
    traced("load", || {
        let environment = traced("resolve_environment", || env::resolve_environment(variable))?;
        let ini = traced("read_config", || file::read_config(config_path))?;
        let table = traced("load_table", || {
            section::load_table(&ini, &environment, config_path)
        })?;

        tracing::info!(
            variable,
            path = %config_path.display(),
            environment = %environment,
            constants = ?table,
            "Constants loaded"
        );

        Ok((environment, table))
    })
}
