use serde::de::Error;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Reads any JSON value as optional text, keeping only truthy values:
/// non-empty strings, non-zero numbers and `true`.
pub fn loose_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;

    Ok(match value {
        Some(Value::String(text)) if !text.is_empty() => Some(text),
        Some(Value::Number(number)) if number.as_f64() != Some(0.0) => Some(number.to_string()),
        Some(Value::Bool(true)) => Some(true.to_string()),
        _ => None,
    })
}

/// Reads an optional identifier sent either as a string or as a number.
/// Numbers are kept in their decimal text form; other types are rejected.
pub fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(Value::Number(number)) => Ok(Some(number.to_string())),
        Some(other) => Err(D::Error::custom(format!(
            "invalid type: {}, expected a string or a number",
            other
        ))),
    }
}
