// SPDX-License-Identifier: MIT OR Apache-2.0

//! Value type inference.
//!
//! Raw value text is resolved in a fixed precedence order: boolean equivalents
//! first, then numbers, then the trimmed string itself.

use crate::domain::config_value::{ConfigValue, Number};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Words accepted as boolean `true`, compared after lower-casing.
pub const TRUE_EQUIVALENTS: [&str; 5] = ["yes", "on", "true", "enabled", "enable"];

/// Words accepted as boolean `false`, compared after lower-casing.
pub const FALSE_EQUIVALENTS: [&str; 5] = ["no", "off", "false", "disabled", "disable"];

static BOOLEAN_EQUIVALENTS: Lazy<HashMap<&'static str, bool>> = Lazy::new(|| {
    TRUE_EQUIVALENTS
        .iter()
        .map(|word| (*word, true))
        .chain(FALSE_EQUIVALENTS.iter().map(|word| (*word, false)))
        .collect()
});

/// Infers the typed value of a raw value substring.
///
/// The input is trimmed before inference.
///
/// # Examples
///
/// ```
/// use kvcfg::domain::{infer_value, ConfigValue};
///
/// assert_eq!(infer_value("Enable"), ConfigValue::Bool(true));
/// assert_eq!(infer_value(" 42 "), ConfigValue::from(42));
/// assert_eq!(infer_value("-3.14"), ConfigValue::from(-3.14));
/// assert_eq!(infer_value(""), ConfigValue::from(""));
/// assert_eq!(infer_value("hello world"), ConfigValue::from("hello world"));
/// ```
pub fn infer_value(raw: &str) -> ConfigValue {
    let value = raw.trim();

    if let Some(b) = parse_boolean(value) {
        return ConfigValue::Bool(b);
    }

    match parse_number(value) {
        Some(n) => ConfigValue::Number(n),
        None => ConfigValue::String(value.to_string()),
    }
}

/// Looks a value up in the boolean equivalents table, ignoring case.
pub fn parse_boolean(value: &str) -> Option<bool> {
    BOOLEAN_EQUIVALENTS
        .get(value.to_lowercase().as_str())
        .copied()
}

/// Coerces a value to a number.
///
/// Accepts the decimal float grammar (sign, fraction, exponent), the literals
/// `Infinity`, `+Infinity` and `-Infinity`, and unsigned `0x`, `0o` and `0b`
/// prefixed integers. Decimal literals too large for an `f64` become infinite.
/// Blank input and `NaN` are rejected.
pub fn parse_number(value: &str) -> Option<Number> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Some(n) = parse_radix_integer(value) {
        return Some(n);
    }

    match value {
        "Infinity" | "+Infinity" => return Some(Number::Float(f64::INFINITY)),
        "-Infinity" => return Some(Number::Float(f64::NEG_INFINITY)),
        _ => {}
    }

    // Rust's float grammar also accepts "inf" and "nan" in any case; apart from
    // the literals above only digits can start a number (after an optional sign
    // and decimal point).
    let unsigned = value.trim_start_matches(['+', '-']);
    if !unsigned.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return None;
    }

    if let Ok(n) = value.parse::<i64>() {
        return Some(Number::Integer(n));
    }

    match value.parse::<f64>() {
        Ok(f) if !f.is_nan() => Some(Number::Float(f)),
        _ => None,
    }
}

fn parse_radix_integer(value: &str) -> Option<Number> {
    let (radix, digits) = match value.get(..2)? {
        "0x" | "0X" => (16, &value[2..]),
        "0o" | "0O" => (8, &value[2..]),
        "0b" | "0B" => (2, &value[2..]),
        _ => return None,
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }

    match u64::from_str_radix(digits, radix) {
        Ok(n) => Some(match i64::try_from(n) {
            Ok(i) => Number::Integer(i),
            Err(_) => Number::Float(n as f64),
        }),
        Err(_) => None,
    }
}
