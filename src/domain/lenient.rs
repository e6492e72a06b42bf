//! Parse-with-default helpers for request fields.
//!
//! Numeric request fields are coerced rather than validated: a JSON number or
//! a numeric string is taken as-is, anything else (missing, `null`, booleans,
//! arbitrary text, negative or non-finite values where a magnitude is
//! expected) falls back to the field's default.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Read a finite number out of a JSON value, accepting numeric strings.
pub fn as_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    n.filter(|v| v.is_finite())
}

/// Any finite number, or `default`.
pub fn number_or(value: &Value, default: f64) -> f64 {
    as_number(value).unwrap_or(default)
}

/// A finite, non-negative number, or `default`.
pub fn magnitude_or(value: &Value, default: f64) -> f64 {
    as_number(value).filter(|v| *v >= 0.0).unwrap_or(default)
}

/// A non-negative count (fractional values truncate), or `default`.
pub fn count_or(value: &Value, default: u32) -> u32 {
    as_number(value)
        .filter(|v| *v >= 0.0 && *v <= u32::MAX as f64)
        .map(|v| v.trunc() as u32)
        .unwrap_or(default)
}

/// `deserialize_with` adapter for coordinates: malformed input becomes 0.0.
pub fn coordinate<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(number_or(&value, 0.0))
}
