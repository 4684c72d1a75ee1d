//! The loaded constants store.
//!
//! Responsibilities:
//! - Hold the constants table for one environment.
//! - Provide mapping lookup, typed lookup and assignment with mutation warnings.
//!
//! Does NOT handle:
//! - Parsing or casting (see `loader` and `value`).
//! - Synchronization: `set` takes `&mut self`, callers sharing a store
//!   across threads serialize writes themselves.
//!
//! Invariants:
//! - The variable name, config path and environment live in their own fields
//!   and are never read from or written to the table.
//! - Overwriting an existing key produces exactly one `MutationWarning`.
//! - Assigned values are stored as given, never re-cast.

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;
use std::ops::Index;
use std::path::{Path, PathBuf};

use crate::error::ConstantsError;
use crate::loader::{self, ConstantsLoader};
use crate::trace::traced;
use crate::value::{FromValue, Value};

/// Emitted when `Constants::set` overwrites an existing constant.
#[derive(Debug, Clone, PartialEq)]
pub struct MutationWarning {
    pub key: String,
    pub previous: Value,
    pub value: Value,
}

impl fmt::Display for MutationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} changed to {}", self.key, self.value)
    }
}

/// Constants for the environment selected at load time.
#[derive(Debug, Clone)]
pub struct Constants {
    variable: String,
    config_path: PathBuf,
    environment: String,
    table: BTreeMap<String, Value>,
}

impl Constants {
    /// Load using `DEFAULT_VARIABLE` and `DEFAULT_CONFIG_FILE`.
    pub fn new() -> Result<Self, ConstantsError> {
        ConstantsLoader::new().load()
    }

    /// Load the section named by `variable` from `config_path`.
    pub fn with_source(
        variable: impl Into<String>,
        config_path: impl Into<PathBuf>,
    ) -> Result<Self, ConstantsError> {
        ConstantsLoader::new()
            .with_variable(variable)
            .with_config_path(config_path)
            .load()
    }

    pub(crate) fn load(variable: String, config_path: PathBuf) -> Result<Self, ConstantsError> {
        traced("new", || {
            let (environment, table) = loader::load(&variable, &config_path)?;
            Ok(Self {
                variable,
                config_path,
                environment,
                table,
            })
        })
    }

    /// Re-read the variable and file, replacing the environment and table.
    ///
    /// Local `set` changes are discarded. On error the store is unchanged.
    pub fn reload(&mut self) -> Result<(), ConstantsError> {
        traced("reload", || {
            let (environment, table) = loader::load(&self.variable, &self.config_path)?;
            self.environment = environment;
            self.table = table;
            Ok(())
        })
    }

    /// Name of the environment variable the section was chosen by.
    pub fn variable(&self) -> &str {
        &self.variable
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Section name resolved from the environment variable.
    pub fn environment(&self) -> &str {
        &self.environment
    }

    /// Look up a constant.
    ///
    /// # Errors
    ///
    /// `ConstantsError::UnknownKey` if `key` is not in the table.
    pub fn get(&self, key: &str) -> Result<&Value, ConstantsError> {
        traced("get", || {
            self.table
                .get(key)
                .ok_or_else(|| ConstantsError::UnknownKey(key.to_string()))
        })
    }

    /// Look up a constant and convert it to `T`.
    ///
    /// # Errors
    ///
    /// `UnknownKey` if absent, `TypeMismatch` if the stored variant does not fit.
    pub fn get_as<'a, T: FromValue<'a>>(&'a self, key: &str) -> Result<T, ConstantsError> {
        let value = self.get(key)?;
        T::from_value(value).ok_or_else(|| ConstantsError::TypeMismatch {
            key: key.to_string(),
            expected: T::EXPECTED,
            found: value.type_name(),
        })
    }

    pub fn get_i64(&self, key: &str) -> Result<i64, ConstantsError> {
        self.get_as(key)
    }

    /// Integers are widened, so `get_f64` accepts both numeric variants.
    pub fn get_f64(&self, key: &str) -> Result<f64, ConstantsError> {
        self.get_as(key)
    }

    pub fn get_str(&self, key: &str) -> Result<&str, ConstantsError> {
        self.get_as(key)
    }

    /// Assign a constant, warning if it overwrites an existing one.
    ///
    /// Returns the warning that was logged, or `None` for a new key.
    pub fn set(
        &mut self,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Option<MutationWarning> {
        let key = key.into();
        let value = value.into();
        traced("set", || match self.table.get_mut(&key) {
            Some(slot) => {
                let previous = std::mem::replace(slot, value.clone());
                let warning = MutationWarning {
                    key,
                    previous,
                    value,
                };
                tracing::warn!(
                    key = %warning.key,
                    value = %warning.value,
                    "{warning}"
                );
                Some(warning)
            }
            None => {
                self.table.insert(key, value);
                None
            }
        })
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.table.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Iterate constants in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.table.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.table.keys().map(String::as_str)
    }

    pub fn as_map(&self) -> &BTreeMap<String, Value> {
        &self.table
    }
}

impl Index<&str> for Constants {
    type Output = Value;

    /// # Panics
    ///
    /// Panics if `key` is not present, like `HashMap`'s `Index`.
    fn index(&self, key: &str) -> &Value {
        match self.get(key) {
            Ok(value) => value,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<'a> IntoIterator for &'a Constants {
    type Item = (&'a String, &'a Value);
    type IntoIter = btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.table.iter()
    }
}

#[cfg(test)]
impl Constants {
    /// Build a store without touching the environment or filesystem.
    pub(crate) fn from_parts(environment: &str, table: BTreeMap<String, Value>) -> Self {
        Self {
            variable: crate::defaults::DEFAULT_VARIABLE.to_string(),
            config_path: PathBuf::from(crate::defaults::DEFAULT_CONFIG_FILE),
            environment: environment.to_string(),
            table,
        }
    }
}
