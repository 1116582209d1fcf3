//! Lenient numeric handling.
//!
//! Amounts and day counts arrive either as form text or as JSON written by
//! older versions of the dashboard (which stored whatever `Number(...)`
//! produced). Anything that is not a usable number becomes zero instead of
//! failing: negatives clamp to zero and fractions are floored.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Parse free-form numeric text into a non-negative whole amount
pub fn parse_amount(text: &str) -> u64 {
    let trimmed = text.trim();
    if let Ok(n) = trimmed.parse::<u64>() {
        return n;
    }
    trimmed.parse::<f64>().map(clamp_float).unwrap_or(0)
}

fn clamp_float(n: f64) -> u64 {
    if n.is_finite() && n > 0.0 {
        // `as` saturates at u64::MAX
        n.floor() as u64
    } else {
        0
    }
}

fn value_to_amount(value: &Value) -> u64 {
    match value {
        Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                u
            } else if n.as_i64().is_some() {
                0
            } else {
                n.as_f64().map(clamp_float).unwrap_or(0)
            }
        }
        Value::String(s) => parse_amount(s),
        Value::Bool(true) => 1,
        _ => 0,
    }
}

pub fn lenient_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_amount(&value))
}

pub fn lenient_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_amount(&value).min(u64::from(u32::MAX)) as u32)
}

/// Optional variants for partial updates: an absent or `null` field stays
/// `None`, anything else present is coerced like the plain helpers.
pub fn lenient_opt_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.map(|v| value_to_amount(&v)))
}

pub fn lenient_opt_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.map(|v| value_to_amount(&v).min(u64::from(u32::MAX)) as u32))
}

/// Accepts a JSON string or number and keeps it as text, for raw form input
pub fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}
