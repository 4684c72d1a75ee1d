//! envconst - print environment-specific constants from an INI file.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Load the constants store and print the requested view of it.
//! - Map failures to structured exit codes.
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - Diagnostics go to stderr; stdout carries only command output.

mod args;
mod error;
mod formatters;

use anyhow::{Context, Result};
use args::{Cli, Commands};
use clap::Parser;
use env_constants::ConstantsLoader;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConstantsLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(e.exit_code().as_i32());
    }
}

fn run(cli: Cli) -> Result<()> {
    let constants = ConstantsLoader::new()
        .with_variable(&cli.variable)
        .with_config_path(&cli.config)
        .load()
        .with_context(|| format!("Failed to load constants from {}", cli.config.display()))?;

    let rendered = match &cli.command {
        Commands::Get { key } => {
            let value = constants.get(key)?;
            formatters::format_value(value, cli.output)?
        }
        Commands::List => formatters::format_table(&constants, cli.output)?,
        Commands::Env => formatters::format_env(&constants, cli.output)?,
    };

    if !rendered.is_empty() {
        println!("{rendered}");
    }
    Ok(())
}
