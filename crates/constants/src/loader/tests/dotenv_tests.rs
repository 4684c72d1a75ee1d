//! Tests for dotenv loading behavior.
//!
//! Invariants / Assumptions:
//! - Tests must serialize mutations to process-global state (cwd/env).
//! - Error messages must never contain secret values from `.env` files.

use serial_test::serial;
use std::fs;
use tempfile::TempDir;

use super::{CwdGuard, SAMPLE_CONFIG, TEST_VARIABLE, env_lock, write_config};
use crate::error::ConstantsError;
use crate::loader::builder::ConstantsLoader;

#[test]
#[serial]
fn test_missing_dotenv_is_ok() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let _cwd_guard = CwdGuard::new(temp_dir.path());

    temp_env::with_var_unset("DOTENV_DISABLED", || {
        let result = ConstantsLoader::new().load_dotenv();
        assert!(result.is_ok(), "Missing .env file should be silently ignored");
    });
}

#[test]
#[serial]
fn test_dotenv_supplies_environment_variable() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let config_path = write_config(temp_dir.path(), SAMPLE_CONFIG);
    fs::write(
        temp_dir.path().join(".env"),
        format!("{TEST_VARIABLE}=dev\n"),
    )
    .unwrap();
    let _cwd_guard = CwdGuard::new(temp_dir.path());

    // Listing the variable makes temp_env restore (unset) it afterwards.
    temp_env::with_vars(
        [("DOTENV_DISABLED", None::<&str>), (TEST_VARIABLE, None)],
        || {
            let constants = ConstantsLoader::new()
                .with_variable(TEST_VARIABLE)
                .with_config_path(&config_path)
                .load_dotenv()
                .unwrap()
                .load()
                .unwrap();
            assert_eq!(constants.environment(), "dev");
        },
    );
}

#[test]
#[serial]
fn test_invalid_dotenv_does_not_leak_contents() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(".env"),
        "SECRET_TOKEN=super-secret-value\nINVALID_LINE_WITHOUT_EQUALS",
    )
    .unwrap();
    let _cwd_guard = CwdGuard::new(temp_dir.path());

    temp_env::with_vars(
        [("DOTENV_DISABLED", None::<&str>), ("SECRET_TOKEN", None)],
        || {
            let err = ConstantsLoader::new().load_dotenv().unwrap_err();
            assert!(matches!(err, ConstantsError::DotenvParse { .. }));
            assert!(!err.to_string().contains("super-secret-value"));
        },
    );
}

#[test]
#[serial]
fn test_dotenv_disabled_skips_loading() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(".env"), "INVALID_LINE_WITHOUT_EQUALS").unwrap();
    let _cwd_guard = CwdGuard::new(temp_dir.path());

    for value in ["1", "true"] {
        temp_env::with_vars([("DOTENV_DISABLED", Some(value))], || {
            assert!(ConstantsLoader::new().load_dotenv().is_ok());
        });
    }
}
