//! Typed constant values and the string casting rule.
//!
//! Responsibilities:
//! - Define `Value`, the tagged variant every constant is stored as.
//! - Provide `cast`, which turns a raw INI string into its most specific type.
//! - Provide `FromValue` for the typed accessors on `Constants`.
//!
//! Invariants:
//! - `cast` is total: every input yields a `Value`, nothing panics.
//! - Integer syntax is tried before float syntax, so `"1"` is never a float.
//! - Integer text outside the `i64` range stays a string; it never becomes a
//!   lossy float.

use serde::Serialize;
use std::fmt;

/// A single constant, as loaded from the config file or assigned later.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Integer(i64),
    Float(f64),
    String(String),
}

impl Value {
    /// Short name of the variant, used in type mismatch errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::String(_) => "string",
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the value as a float. Integers widen; strings do not parse.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(v) => Some(*v as f64),
            Self::Float(v) => Some(*v),
            Self::String(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{v}"),
            // Debug keeps the fraction, so 30.0 does not print as an integer.
            Self::Float(v) => write!(f, "{v:?}"),
            Self::String(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

/// Cast a raw string to an integer, else a float, else keep it verbatim.
///
/// Text with integer syntax that does not fit an `i64` is kept verbatim.
///
/// ```
/// use env_constants::{Value, cast};
///
/// assert_eq!(cast("1"), Value::Integer(1));
/// assert_eq!(cast("3.14"), Value::Float(3.14));
/// assert_eq!(cast("a_string"), Value::String("a_string".to_string()));
/// ```
pub fn cast(raw: &str) -> Value {
    if let Ok(v) = raw.parse::<i64>() {
        return Value::Integer(v);
    }
    if has_integer_syntax(raw) {
        return Value::String(raw.to_string());
    }
    if let Ok(v) = raw.parse::<f64>() {
        return Value::Float(v);
    }
    Value::String(raw.to_string())
}

/// An optional sign followed by one or more ASCII digits.
fn has_integer_syntax(raw: &str) -> bool {
    let digits = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Conversion from a stored `Value` reference into a concrete Rust type.
///
/// Returns `None` when the stored variant cannot represent `Self`.
pub trait FromValue<'a>: Sized {
    /// Name reported in `ConstantsError::TypeMismatch`.
    const EXPECTED: &'static str;

    fn from_value(value: &'a Value) -> Option<Self>;
}

impl<'a> FromValue<'a> for i64 {
    const EXPECTED: &'static str = "integer";

    fn from_value(value: &'a Value) -> Option<Self> {
        value.as_i64()
    }
}

impl<'a> FromValue<'a> for f64 {
    const EXPECTED: &'static str = "float";

    fn from_value(value: &'a Value) -> Option<Self> {
        value.as_f64()
    }
}

impl<'a> FromValue<'a> for &'a str {
    const EXPECTED: &'static str = "string";

    fn from_value(value: &'a Value) -> Option<Self> {
        value.as_str()
    }
}

impl<'a> FromValue<'a> for String {
    const EXPECTED: &'static str = "string";

    fn from_value(value: &'a Value) -> Option<Self> {
        value.as_str().map(str::to_string)
    }
}

impl<'a> FromValue<'a> for &'a Value {
    const EXPECTED: &'static str = "any";

    fn from_value(value: &'a Value) -> Option<Self> {
        Some(value)
    }
}
