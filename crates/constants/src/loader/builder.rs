//! Constants loader builder.
//!
//! Responsibilities:
//! - Collect the environment variable name and config path, with defaults.
//! - Load `.env` files on request, gated by `DOTENV_DISABLED`.
//! - Produce a loaded `Constants` store.
//!
//! Invariants / Assumptions:
//! - Unset builder fields fall back to `DEFAULT_VARIABLE` / `DEFAULT_CONFIG_FILE`.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use std::path::{Path, PathBuf};

use crate::defaults::{DEFAULT_CONFIG_FILE, DEFAULT_VARIABLE};
use crate::error::ConstantsError;
use crate::store::Constants;

/// Builder that names where constants come from and then loads them.
#[derive(Debug, Clone)]
pub struct ConstantsLoader {
    variable: String,
    config_path: PathBuf,
}

impl Default for ConstantsLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConstantsLoader {
    /// Create a loader using the default variable and config file.
    pub fn new() -> Self {
        Self {
            variable: DEFAULT_VARIABLE.to_string(),
            config_path: PathBuf::from(DEFAULT_CONFIG_FILE),
        }
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from a `.env` file if present.
    ///
    /// Skipped when `DOTENV_DISABLED` is `"true"` or `"1"`. A missing `.env`
    /// file is not an error.
    ///
    /// # Errors
    ///
    /// - `ConstantsError::DotenvParse` if the file has invalid syntax.
    /// - `ConstantsError::DotenvIo` if the file exists but cannot be read.
    pub fn load_dotenv(self) -> Result<Self, ConstantsError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConstantsError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConstantsError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConstantsError::DotenvUnknown),
        }
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Set the environment variable whose value names the active section.
    pub fn with_variable(mut self, variable: impl Into<String>) -> Self {
        self.variable = variable.into();
        self
    }

    /// Set the INI file to read.
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = path.into();
        self
    }

    pub fn variable(&self) -> &str {
        &self.variable
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Resolve the environment, read the config file and build the store.
    ///
    /// # Errors
    ///
    /// Fails on the first step that fails; see `ConstantsError`.
    pub fn load(self) -> Result<Constants, ConstantsError> {
        Constants::load(self.variable, self.config_path)
    }
}
