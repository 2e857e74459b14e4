// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration value type produced by type inference.
//!
//! This module provides the `ConfigValue` type, the inferred value of a single
//! assignment, together with the `Number` type it uses for numeric values.

use crate::domain::errors::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A numeric configuration value.
///
/// Values written as plain decimal integers that fit an `i64` are kept as
/// integers; every other numeric form is a float. The two forms compare
/// numerically, so `Integer(1000)` equals `Float(1000.0)`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    /// An integral value.
    Integer(i64),
    /// A floating point value. Never `NaN`; may be infinite.
    Float(f64),
}

impl Number {
    /// Returns the value as an `f64`.
    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::Integer(n) => n as f64,
            Number::Float(f) => f,
        }
    }

    /// Returns the value as an `i64` if it is integral and in range.
    ///
    /// # Examples
    ///
    /// ```
    /// use kvcfg::domain::Number;
    ///
    /// assert_eq!(Number::Float(1000.0).as_i64(), Some(1000));
    /// assert_eq!(Number::Float(2.5).as_i64(), None);
    /// ```
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Number::Integer(n) => Some(n),
            Number::Float(f) => {
                if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
                    Some(f as i64)
                } else {
                    None
                }
            }
        }
    }

    /// Returns `true` if the value was stored as an integer.
    pub fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Number::Integer(a), Number::Integer(b)) => a == b,
            _ => self.as_f64() == other.as_f64(),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(n) => write!(f, "{}", n),
            Number::Float(v) if v.is_infinite() => {
                f.write_str(if *v > 0.0 { "Infinity" } else { "-Infinity" })
            }
            Number::Float(v) => write!(f, "{}", v),
        }
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number::Integer(n)
    }
}

impl From<f64> for Number {
    fn from(f: f64) -> Self {
        Number::Float(f)
    }
}

/// The inferred value of a configuration entry.
///
/// # Examples
///
/// ```
/// use kvcfg::domain::ConfigValue;
///
/// let value = ConfigValue::from(42);
/// assert_eq!(value.as_i64(), Some(42));
/// assert_eq!(value.type_name(), "number");
///
/// let value = ConfigValue::from("MyApp");
/// assert_eq!(value.as_str(), Some("MyApp"));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    /// A value matched against the boolean equivalents table.
    Bool(bool),
    /// A value that coerced to a number.
    Number(Number),
    /// Any other value, trimmed.
    String(String),
}

impl ConfigValue {
    /// Returns the name of the inferred type: `"boolean"`, `"number"` or `"string"`.
    pub fn type_name(&self) -> &'static str {
        match self {
            ConfigValue::Bool(_) => "boolean",
            ConfigValue::Number(_) => "number",
            ConfigValue::String(_) => "string",
        }
    }

    /// Returns the boolean if this is a boolean value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the number if this is a numeric value.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            ConfigValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the value as an `f64` if it is numeric.
    pub fn as_f64(&self) -> Option<f64> {
        self.as_number().map(|n| n.as_f64())
    }

    /// Returns the value as an `i64` if it is numeric and integral.
    pub fn as_i64(&self) -> Option<i64> {
        self.as_number().and_then(|n| n.as_i64())
    }

    /// Returns the string slice if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the boolean, or a `TypeConversion` error naming `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use kvcfg::domain::ConfigValue;
    ///
    /// assert_eq!(ConfigValue::from(true).require_bool("debug").unwrap(), true);
    /// assert!(ConfigValue::from(3).require_bool("retries").is_err());
    /// ```
    pub fn require_bool(&self, key: &str) -> Result<bool> {
        self.as_bool()
            .ok_or_else(|| self.conversion_error(key, "boolean"))
    }

    /// Returns the integral value, or a `TypeConversion` error naming `key`.
    pub fn require_i64(&self, key: &str) -> Result<i64> {
        self.as_i64()
            .ok_or_else(|| self.conversion_error(key, "integer"))
    }

    /// Returns the numeric value, or a `TypeConversion` error naming `key`.
    pub fn require_f64(&self, key: &str) -> Result<f64> {
        self.as_f64().ok_or_else(|| self.conversion_error(key, "number"))
    }

    /// Returns the string slice, or a `TypeConversion` error naming `key`.
    pub fn require_str(&self, key: &str) -> Result<&str> {
        self.as_str().ok_or_else(|| self.conversion_error(key, "string"))
    }

    fn conversion_error(&self, key: &str, expected: &'static str) -> ConfigError {
        ConfigError::TypeConversion {
            key: key.to_string(),
            expected,
            found: self.type_name(),
        }
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        ConfigValue::Bool(b)
    }
}

impl From<i64> for ConfigValue {
    fn from(n: i64) -> Self {
        ConfigValue::Number(Number::Integer(n))
    }
}

impl From<i32> for ConfigValue {
    fn from(n: i32) -> Self {
        ConfigValue::Number(Number::Integer(i64::from(n)))
    }
}

impl From<f64> for ConfigValue {
    fn from(f: f64) -> Self {
        ConfigValue::Number(Number::Float(f))
    }
}

impl From<Number> for ConfigValue {
    fn from(n: Number) -> Self {
        ConfigValue::Number(n)
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue::String(s)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue::String(s.to_string())
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Bool(b) => write!(f, "{}", b),
            ConfigValue::Number(n) => write!(f, "{}", n),
            ConfigValue::String(s) => f.write_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_names() {
        assert_eq!(ConfigValue::from(true).type_name(), "boolean");
        assert_eq!(ConfigValue::from(1).type_name(), "number");
        assert_eq!(ConfigValue::from(1.5).type_name(), "number");
        assert_eq!(ConfigValue::from("x").type_name(), "string");
    }

    #[test]
    fn test_number_cross_form_equality() {
        assert_eq!(Number::Integer(1000), Number::Float(1000.0));
        assert_ne!(Number::Integer(1), Number::Float(1.5));
        assert_eq!(ConfigValue::from(1000), ConfigValue::from(1000.0));
    }

    #[test]
    fn test_number_as_i64() {
        assert_eq!(Number::Integer(-7).as_i64(), Some(-7));
        assert_eq!(Number::Float(1e3).as_i64(), Some(1000));
        assert_eq!(Number::Float(-3.14).as_i64(), None);
        assert_eq!(Number::Float(1e300).as_i64(), None);
    }

    #[test]
    fn test_accessors_return_none_for_other_types() {
        let value = ConfigValue::from("hello");
        assert_eq!(value.as_bool(), None);
        assert_eq!(value.as_f64(), None);
        assert_eq!(value.as_i64(), None);
        assert_eq!(value.as_str(), Some("hello"));

        let value = ConfigValue::from(false);
        assert_eq!(value.as_bool(), Some(false));
        assert_eq!(value.as_str(), None);
    }

    #[test]
    fn test_require_accessors() {
        let value = ConfigValue::from(3);
        assert_eq!(value.require_i64("retries").unwrap(), 3);
        assert_eq!(value.require_f64("retries").unwrap(), 3.0);

        let err = value.require_str("retries").unwrap_err();
        match err {
            ConfigError::TypeConversion {
                key,
                expected,
                found,
            } => {
                assert_eq!(key, "retries");
                assert_eq!(expected, "string");
                assert_eq!(found, "number");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_require_i64_rejects_fractional() {
        let value = ConfigValue::from(-3.14);
        assert!(value.require_i64("ratio").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(ConfigValue::from(true).to_string(), "true");
        assert_eq!(ConfigValue::from(42).to_string(), "42");
        assert_eq!(ConfigValue::from(-3.14).to_string(), "-3.14");
        assert_eq!(ConfigValue::from(1e3).to_string(), "1000");
        assert_eq!(ConfigValue::from(f64::INFINITY).to_string(), "Infinity");
        assert_eq!(ConfigValue::from(f64::NEG_INFINITY).to_string(), "-Infinity");
        assert_eq!(ConfigValue::from("hello world").to_string(), "hello world");
    }

    #[test]
    fn test_serialize_untagged() {
        assert_eq!(serde_json::to_string(&ConfigValue::from(true)).unwrap(), "true");
        assert_eq!(serde_json::to_string(&ConfigValue::from(3)).unwrap(), "3");
        assert_eq!(
            serde_json::to_string(&ConfigValue::from("MyApp")).unwrap(),
            "\"MyApp\""
        );
    }

    #[test]
    fn test_deserialize_untagged() {
        let value: ConfigValue = serde_json::from_str("2.5").unwrap();
        assert_eq!(value, ConfigValue::from(2.5));
        let value: ConfigValue = serde_json::from_str("\"on\"").unwrap();
        assert_eq!(value, ConfigValue::from("on"));
    }
}
