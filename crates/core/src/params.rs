//! Pure helpers for extracting typed parameters from a `serde_json::Value`.
//!
//! Preset overrides arrive as a free-form JSON object; these helpers read a
//! key and fall back to the preset default when the key is missing or has
//! the wrong type. They never fail.

use serde_json::Value;

/// Extracts an `f64` from `params[name]`, returning `default` if missing or
/// wrong type. JSON integers are accepted and widened.
pub fn param_f64(params: &Value, name: &str, default: f64) -> f64 {
    params.get(name).and_then(Value::as_f64).unwrap_or(default)
}

/// Extracts a `usize` from `params[name]`, returning `default` if missing,
/// negative, fractional, or wrong type.
pub fn param_usize(params: &Value, name: &str, default: usize) -> usize {
    params
        .get(name)
        .and_then(Value::as_u64)
        .map(|v| v as usize)
        .unwrap_or(default)
}

/// Extracts a `bool` from `params[name]`, returning `default` if missing or
/// wrong type.
pub fn param_bool(params: &Value, name: &str, default: bool) -> bool {
    params.get(name).and_then(Value::as_bool).unwrap_or(default)
}
