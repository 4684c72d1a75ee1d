//! Default values shared by the loader and the CLI.
//!
//! These are the fallbacks used when the caller does not name an
//! environment variable or a config file explicitly.

// =============================================================================
// Source Defaults
// =============================================================================

/// Environment variable consulted for the active section when none is given.
pub const DEFAULT_VARIABLE: &str = "__CONSTANTS__";

/// Config file read when no path is given, relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "constants.ini";

// =============================================================================
// INI Dialect
// =============================================================================

/// Section whose entries are inherited by every other section.
pub const DEFAULT_SECTION: &str = "DEFAULT";

/// Maximum nesting of `%(name)s` references before interpolation gives up.
pub const MAX_INTERPOLATION_DEPTH: usize = 10;
