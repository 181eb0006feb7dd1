//! Field readers and deserializers that never reject a document.
//!
//! Every helper reads the raw JSON value and maps anything of the wrong shape
//! to "absent". Used with `#[serde(default, deserialize_with = "...")]` so that
//! both missing keys and wrong-typed values degrade the same way.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::debug;

/// Text value. Numbers are accepted and kept in their JSON spelling.
pub fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Real-number value. Only finite JSON numbers count.
pub fn number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        _ => None,
    }
}

/// Real-number field.
pub fn opt_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(number(&Value::deserialize(deserializer)?))
}

/// Non-negative count. Negative or non-numeric values are 0; fractions truncate.
pub fn count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_u64().unwrap_or_else(|| {
            n.as_f64()
                .filter(|v| v.is_finite() && *v >= 0.0)
                .map(|v| v.trunc() as u64)
                .unwrap_or(0)
        }),
        _ => 0,
    })
}

/// Array of mappings. A non-array becomes empty; elements that are not
/// objects (or do not fit `T`) are dropped.
pub fn object_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        Value::Null => return Ok(Vec::new()),
        other => {
            debug!(kind = value_kind(&other), "expected a list, ignoring field");
            return Ok(Vec::new());
        }
    };

    Ok(items
        .into_iter()
        .enumerate()
        .filter_map(|(position, item)| {
            if !item.is_object() {
                debug!(position, kind = value_kind(&item), "dropping non-object entry");
                return None;
            }
            match serde_json::from_value(item) {
                Ok(parsed) => Some(parsed),
                Err(err) => {
                    debug!(position, %err, "dropping unreadable entry");
                    None
                }
            }
        })
        .collect())
}

/// Non-empty mapping. `null`, `{}` and non-objects are all absent.
pub fn opt_object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Object(map) if !map.is_empty() => {
            Ok(serde_json::from_value(Value::Object(map)).ok())
        }
        _ => Ok(None),
    }
}

/// Short name of a JSON value's type, for diagnostics.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
