//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Resolve the variable name and config path from flags or environment.
//!
//! Non-responsibilities:
//! - Does not load constants (see `main.rs`).
//! - Does not format output (see `formatters.rs`).

use clap::{Parser, Subcommand, ValueEnum};
use env_constants::defaults::{DEFAULT_CONFIG_FILE, DEFAULT_VARIABLE};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "envconst")]
#[command(about = "Read environment-specific constants from an INI file", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  __CONSTANTS__=prod envconst get timeout\n  envconst --config app.ini --variable APP_ENV list\n  envconst -o json list\n"
)]
pub struct Cli {
    /// Environment variable whose value names the section to load
    #[arg(long, global = true, env = "ENVCONST_VARIABLE", default_value = DEFAULT_VARIABLE)]
    pub variable: String,

    /// Path to the INI config file
    #[arg(short, long, global = true, env = "ENVCONST_CONFIG", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print a single constant
    Get {
        /// Constant name
        key: String,
    },

    /// Print every constant of the active environment, sorted by name
    List,

    /// Print the resolved environment and where it came from
    Env,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
