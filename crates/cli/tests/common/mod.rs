//! Shared test utilities for envconst integration tests.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper will be hermetic by default.
//! - The selecting variable is `ENVCONST_TEST_ENV` unless a test overrides it.

use assert_cmd::Command;
use std::path::{Path, PathBuf};

pub const TEST_VARIABLE: &str = "ENVCONST_TEST_ENV";

pub const CONFIG: &str = "\
[DEFAULT]
retries = 3

[prod]
timeout = 30
ratio = 0.25
host = db.prod.internal

[dev]
timeout = 5
";

/// Returns a hermetic `envconst` command running inside `dir`.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - Variable/config overrides from the host are cleared.
pub fn envconst_cmd(dir: &Path) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("envconst");
    cmd.current_dir(dir);
    cmd.env("DOTENV_DISABLED", "1");
    cmd.env_remove("ENVCONST_VARIABLE")
        .env_remove("ENVCONST_CONFIG")
        .env_remove("__CONSTANTS__")
        .env_remove(TEST_VARIABLE);
    cmd.env("ENVCONST_VARIABLE", TEST_VARIABLE);
    cmd
}

/// Write `CONFIG` to `constants.ini` in `dir`.
pub fn write_config(dir: &Path) -> PathBuf {
    let path = dir.join("constants.ini");
    std::fs::write(&path, CONFIG).unwrap();
    path
}
