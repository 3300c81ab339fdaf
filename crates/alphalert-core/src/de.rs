//! Lenient deserialization helpers for upstream payloads.
//!
//! The upstream API serializes most numerics as decimal strings, switches
//! between strings and numbers per endpoint, and omits fields freely. These
//! helpers accept string-or-number values and default missing or malformed
//! fields to zero instead of failing the whole record.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::str::FromStr;

/// Deserialize a string-or-number field into `f64`, defaulting to 0.
pub fn f64_or_default<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(f64_from_value).unwrap_or(0.0))
}

/// Deserialize a string-or-number field into `i64`, defaulting to 0.
pub fn i64_or_default<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(i64_from_value).unwrap_or(0))
}

/// Deserialize a string-or-number field into `u32`, defaulting to 0.
pub fn u32_or_default<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .map(|v| i64_from_value(v).clamp(0, u32::MAX as i64) as u32)
        .unwrap_or(0))
}

/// Deserialize a string-or-number field into `Decimal`, defaulting to 0.
pub fn decimal_or_default<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(decimal_from_value).unwrap_or(Decimal::ZERO))
}

pub(crate) fn f64_from_value(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

pub(crate) fn i64_from_value(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n.as_i64().unwrap_or_else(|| n.as_f64().unwrap_or(0.0) as i64),
        Value::String(s) => {
            let s = s.trim();
            s.parse()
                .unwrap_or_else(|_| s.parse::<f64>().map(|f| f as i64).unwrap_or(0))
        }
        _ => 0,
    }
}

pub(crate) fn decimal_from_value(value: &Value) -> Decimal {
    match value {
        Value::Number(n) => n
            .as_f64()
            .and_then(Decimal::from_f64)
            .unwrap_or(Decimal::ZERO),
        Value::String(s) => Decimal::from_str(s.trim()).unwrap_or(Decimal::ZERO),
        _ => Decimal::ZERO,
    }
}
