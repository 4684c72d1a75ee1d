//! Environment name resolution.
//!
//! Responsibilities:
//! - Read the variable that selects the active section.
//!
//! Does NOT handle:
//! - `.env` file loading (see `ConstantsLoader::load_dotenv`).
//!
//! Invariants:
//! - The value is returned untouched: no trimming, no case folding.
//! - An unset or non-unicode variable is `MissingEnvironmentVariable`.

use crate::error::ConstantsError;

/// Return the value of `variable` from the process environment.
pub(crate) fn resolve_environment(variable: &str) -> Result<String, ConstantsError> {
    std::env::var(variable)
        .map_err(|_| ConstantsError::MissingEnvironmentVariable(variable.to_string()))
}
