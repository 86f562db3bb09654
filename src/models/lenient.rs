//! Scalar fields as the JSON endpoints send them: `null` means absent,
//! numbers and booleans are kept as their text.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(text(Value::deserialize(deserializer)?).unwrap_or_default())
}

pub fn option<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(text(Value::deserialize(deserializer)?))
}
