//! Error types for loading and reading constants.
//!
//! Responsibilities:
//! - Define one variant per way a load or lookup can fail.
//!
//! Invariants:
//! - Every variant carries enough context (variable, path, key) to act on it.
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or reading constants.
#[derive(Error, Debug)]
pub enum ConstantsError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvironmentVariable(String),

    #[error("Failed to read config file at {path}")]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {message}")]
    MalformedConfig { path: PathBuf, message: String },

    #[error("Environment '{environment}' has no section in {path}")]
    UnknownEnvironment { environment: String, path: PathBuf },

    #[error("Unknown constant: {0}")]
    UnknownKey(String),

    #[error("Bad interpolation in '{key}': {message}")]
    Interpolation { key: String, message: String },

    #[error("Constant '{key}' is {found}, expected {expected}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        found: &'static str,
    },

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: only the byte index of the failure is kept, never the line.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}
