//! INI file reading.
//!
//! Responsibilities:
//! - Read the config file in one shot and hand it to `rust-ini`.
//! - Reject documents `rust-ini` accepts but the dialect does not.
//!
//! Does NOT handle:
//! - Section selection, interpolation or casting (see section.rs).
//!
//! Invariants:
//! - Quoting and backslash escapes are disabled: values are literal.
//! - Entries before the first `[section]` header are a syntax error.
//! - Indented lines continue the previous value; a key can never span lines.
//! - A file that is not valid UTF-8 is malformed, not missing.

use ini::{Ini, ParseOption};
use std::io::ErrorKind;
use std::path::Path;

use crate::error::ConstantsError;

/// Read and parse the INI document at `path`.
pub(crate) fn read_config(path: &Path) -> Result<Ini, ConstantsError> {
    let content = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == ErrorKind::InvalidData {
            ConstantsError::MalformedConfig {
                path: path.to_path_buf(),
                message: "file is not valid UTF-8".to_string(),
            }
        } else {
            ConstantsError::FileNotFound {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    parse_config(&content, path)
}

/// Parse INI `content`; `path` is only used for error context.
pub(crate) fn parse_config(content: &str, path: &Path) -> Result<Ini, ConstantsError> {
    let options = ParseOption {
        enabled_quote: false,
        enabled_escape: false,
        enabled_indented_mutiline_value: true,
        ..ParseOption::default()
    };

    let ini = Ini::load_from_str_opt(content, options).map_err(|e| {
        ConstantsError::MalformedConfig {
            path: path.to_path_buf(),
            message: e.to_string(),
        }
    })?;

    let has_headless_entries = ini
        .section(None::<String>)
        .is_some_and(|general| general.iter().next().is_some());
    if has_headless_entries {
        return Err(ConstantsError::MalformedConfig {
            path: path.to_path_buf(),
            message: "entries found before the first section header".to_string(),
        });
    }

    let multiline_key = ini
        .iter()
        .flat_map(|(_, properties)| properties.iter())
        .map(|(key, _)| key)
        .find(|key| key.contains('\n'));
    if let Some(key) = multiline_key {
        return Err(ConstantsError::MalformedConfig {
            path: path.to_path_buf(),
            message: format!("option name spans lines: {key:?}"),
        });
    }

    Ok(ini)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn path() -> PathBuf {
        PathBuf::from("constants.ini")
    }

    #[test]
    fn test_parse_sections_and_entries() {
        let ini = parse_config("[prod]\ntimeout = 30\nhost = db\n\n[dev]\ntimeout = 5\n", &path())
            .unwrap();

        let prod = ini.section(Some("prod")).unwrap();
        assert_eq!(prod.get("timeout"), Some("30"));
        assert_eq!(prod.get("host"), Some("db"));
        assert_eq!(ini.section(Some("dev")).unwrap().get("timeout"), Some("5"));
    }

    #[test]
    fn test_parse_keeps_quotes_and_backslashes_literal() {
        let ini = parse_config("[prod]\nname = \"quoted\"\nwin = C:\\temp\n", &path()).unwrap();

        let prod = ini.section(Some("prod")).unwrap();
        assert_eq!(prod.get("name"), Some("\"quoted\""));
        assert_eq!(prod.get("win"), Some("C:\\temp"));
    }

    #[test]
    fn test_parse_ignores_comments() {
        let ini = parse_config("; leading\n[prod]\n# note\nkey = 1\n", &path()).unwrap();
        let prod = ini.section(Some("prod")).unwrap();
        assert_eq!(prod.iter().count(), 1);
    }

    #[test]
    fn test_indented_line_continues_value() {
        let ini = parse_config("[prod]\nlong = first\n  second\nx = 1\n", &path()).unwrap();

        let prod = ini.section(Some("prod")).unwrap();
        let long = prod.get("long").unwrap();
        assert!(long.starts_with("first\n"), "value: {long:?}");
        assert!(long.trim_end().ends_with("second"), "value: {long:?}");
        assert_eq!(prod.get("x"), Some("1"));
        assert!(prod.iter().all(|(key, _)| !key.contains('\n')));
    }

    #[test]
    fn test_entries_before_header_are_malformed() {
        let err = parse_config("orphan = 1\n[prod]\nkey = 2\n", &path()).unwrap_err();
        assert!(matches!(err, ConstantsError::MalformedConfig { .. }));
    }

    #[test]
    fn test_unterminated_header_is_malformed() {
        let err = parse_config("[prod\nkey = 2\n", &path()).unwrap_err();
        assert!(matches!(err, ConstantsError::MalformedConfig { .. }));
    }

    #[test]
    fn test_missing_file_is_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope.ini");

        let err = read_config(&missing).unwrap_err();
        match err {
            ConstantsError::FileNotFound { path, source } => {
                assert_eq!(path, missing);
                assert_eq!(source.kind(), ErrorKind::NotFound);
            }
            other => panic!("expected FileNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_non_utf8_file_is_malformed() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("binary.ini");
        std::fs::write(&file, [0x5b, 0xff, 0xfe, 0x5d]).unwrap();

        let err = read_config(&file).unwrap_err();
        assert!(matches!(err, ConstantsError::MalformedConfig { .. }));
    }
}
