//! Tests for the full load pipeline.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub mod dotenv_tests;

/// Variable used by tests so the real `__CONSTANTS__` is never touched.
pub const TEST_VARIABLE: &str = "_CONSTANTS_TEST_ENVIRONMENT";

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// RAII guard for temporarily changing the current working directory.
pub struct CwdGuard {
    original_dir: PathBuf,
}

impl CwdGuard {
    pub fn new(dir: &Path) -> Self {
        let original_dir = std::env::current_dir().expect("Failed to get current directory");
        std::env::set_current_dir(dir).expect("Failed to set current directory");
        Self { original_dir }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original_dir);
    }
}

/// Write `content` to `constants.ini` inside `dir` and return its path.
pub fn write_config(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("constants.ini");
    std::fs::write(&path, content).expect("Failed to write test config");
    path
}

pub const SAMPLE_CONFIG: &str = "\
[DEFAULT]
retries = 3

[prod]
timeout = 30
ratio = 0.25
host = db.prod.internal

[dev]
timeout = 5
host = localhost
";
