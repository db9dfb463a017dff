//! Lenient deserialization helpers for documents produced by the inference
//! service.
//!
//! The service is asked for a fixed JSON shape but nothing enforces it, so
//! fields routinely arrive as the wrong scalar kind (`"85"` for a number,
//! `1` for a string, `"true"` for a bool). Each helper here accepts any JSON
//! value and coerces it: scalars convert where a conversion is sensible,
//! everything else falls back to the field default. None of them can fail,
//! which is what keeps record decoding total.
//!
//! Use with `#[serde(default, deserialize_with = "...")]` so an absent field
//! takes the default and a present field goes through the coercion.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Coerce any scalar to a string; `null`, arrays, and objects become `None`.
fn coerce_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn coerce_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }
}

/// A string field; wrong-typed scalars are stringified, anything else is `""`.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_string(value).unwrap_or_default())
}

/// An optional string field; `null` and non-scalar values become `None`.
pub fn lenient_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_string(value))
}

/// An integer field; accepts numbers, numeric strings, and bools. Fractional
/// values truncate. Anything else is `0`.
pub fn lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_f64(&value).map(|f| f as i64).unwrap_or_default())
}

/// A float field; accepts numbers, numeric strings, and bools. Anything else
/// is `0.0`.
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_f64(&value).unwrap_or_default())
}

/// A bool field; accepts bools, the usual string spellings, and numbers
/// (non-zero is `true`). Anything else is `false`.
pub fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let coerced = match value {
        Value::Bool(b) => b,
        Value::String(s) => matches!(s.trim().to_lowercase().as_str(), "true" | "yes" | "1"),
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        _ => false,
    };
    Ok(coerced)
}

/// A list-of-strings field; non-array values become an empty list and
/// non-scalar elements are dropped.
pub fn lenient_string_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let coerced = match value {
        Value::Array(items) => items.into_iter().filter_map(coerce_string).collect(),
        _ => Vec::new(),
    };
    Ok(coerced)
}
