//! Helpers to compare, coerce and print the loosely typed values found in dataset rows.

use std::cmp::Ordering;

use serde_json::{Number, Value};

/// Convert a `serde_json::Value` to the text shown in a table cell.
///
/// Strings are printed without quotes, `null` as an empty string, and nested objects or arrays
/// as their JSON text.
pub fn value_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => number_to_string(n),
        Value::Bool(b) => b.to_string(),
        v @ (Value::Array(_) | Value::Object(_)) => v.to_string(),
    }
}

/// Print a number the way a dashboard user expects it: integral floats lose their `.0`.
pub fn number_to_string(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        i.to_string()
    } else if let Some(u) = n.as_u64() {
        u.to_string()
    } else {
        match n.as_f64() {
            Some(f) => f.to_string(),
            None => n.to_string(),
        }
    }
}

/// Coerce a value to a number.
///
/// Accepts `serde_json::Value::{Number,String}`, strings are trimmed before parsing.
///
/// Will return `None` if `value` does not contain a number/parseable string.
pub fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                return None;
            }
            s.parse::<f64>().ok().filter(|f| f.is_finite())
        }
        _ => None,
    }
}

/// Loose equality between a row value and a configured value.
///
/// Numbers compare numerically, also when one side is a numeric string. Everything else
/// compares by its printed form, so `true` equals `"true"`.
pub fn loose_eq(lhs: &Value, rhs: &Value) -> bool {
    match (lhs, rhs) {
        (Value::Null, Value::Null) => true,
        (Value::Null, _) | (_, Value::Null) => false,
        (Value::Number(_), _) | (_, Value::Number(_)) => match (as_number(lhs), as_number(rhs)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        },
        (Value::String(a), Value::String(b)) => a == b,
        (a, b) => value_to_string(a) == value_to_string(b),
    }
}

fn type_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}

/// Total order over row values used when sorting table rows.
///
/// Values of the same kind compare naturally (numbers numerically, strings lexicographically).
/// Values of different kinds are ordered `null < bool < number < string < array < object`; the
/// relative order of heterogeneous columns carries no meaning beyond being deterministic.
pub fn compare_values(lhs: &Value, rhs: &Value) -> Ordering {
    match (lhs, rhs) {
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        (Value::Number(a), Value::Number(b)) => {
            let a = a.as_f64().unwrap_or(f64::NAN);
            let b = b.as_f64().unwrap_or(f64::NAN);
            a.total_cmp(&b)
        }
        (Value::String(a), Value::String(b)) => a.cmp(b),
        (a @ Value::Array(_), b @ Value::Array(_)) | (a @ Value::Object(_), b @ Value::Object(_)) => {
            a.to_string().cmp(&b.to_string())
        }
        (a, b) => type_rank(a).cmp(&type_rank(b)),
    }
}

/// Hashable identity of a value under strict equality: `1` and `"1"` are different keys.
pub(crate) fn value_key(value: &Value) -> String {
    match value {
        Value::Number(n) => format!("n:{}", number_to_string(n)),
        Value::String(s) => format!("s:{s}"),
        other => format!("j:{other}"),
    }
}
