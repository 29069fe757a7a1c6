//! Lenient field coercion for externally produced payloads.
//!
//! The QR producer is a separate system and its serialization drifts:
//! numbers arrive as strings, strings arrive as numbers, and absent
//! fields show up as `null` or `""`. Decoding is schema-on-read, so
//! every field degrades to `None` instead of failing the whole record.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accept a string, number, or bool and keep its display form.
/// Empty strings count as absent, matching the row-suppression contract.
pub fn display_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(to_display_string))
}

/// Accept a number or numeric string as a fraction; anything else is absent.
pub fn fraction<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|value| match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }))
}

fn to_display_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
