//! Environment-aware constants.
//!
//! This crate reads one section of an INI file, chosen by an environment
//! variable, and exposes its entries as typed constants.
//!
//! ```no_run
//! use env_constants::ConstantsLoader;
//!
//! let constants = ConstantsLoader::new()
//!     .with_variable("APP_ENV")
//!     .with_config_path("app.ini")
//!     .load()?;
//! let timeout = constants.get_i64("timeout")?;
//! # Ok::<(), env_constants::ConstantsError>(())
//! ```

pub mod defaults;
mod error;
mod loader;
mod store;
mod trace;
mod value;

pub use error::ConstantsError;
pub use loader::ConstantsLoader;
pub use store::{Constants, MutationWarning};
pub use value::{FromValue, Value, cast};
