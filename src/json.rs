//! Lenient JSON coercion
//!
//! Rules applied by every `from_json` implementation. Input is never
//! rejected; values of the wrong JSON type are converted.
//!
//! | Target  | Input                      | Result                                    |
//! |---------|----------------------------|-------------------------------------------|
//! | text    | string                     | as-is                                     |
//! |         | number / bool              | decimal text / `true` / `false`           |
//! |         | array / object             | compact JSON text                         |
//! | integer | integer                    | as-is (u64 above i64::MAX wraps)          |
//! |         | float                      | truncated, 0 when not finite or too large |
//! |         | string                     | parsed as integer, then float, else 0     |
//! |         | bool                       | 1 / 0                                     |
//! | bool    | number                     | non-zero                                  |
//! |         | string                     | `true`/`1` true, `false`/`0`/empty false, other text true |
//! |         | array / object             | true                                      |
//! | any     | missing / null             | zero value                                |
//!
//! Boolean text is read by meaning: `"false"` and `"0"` are false even though
//! they are non-empty. This differs from JavaScript `Boolean(x)`, where every
//! non-empty string is true.

use serde::Serializer;
use serde_json::{Map, Value};

use crate::message::Message;

/// Look up the first of `names` present with a non-null value
pub fn field<'a>(object: &'a Map<String, Value>, names: &[&str]) -> Option<&'a Value> {
    names
        .iter()
        .filter_map(|name| object.get(*name))
        .find(|value| !value.is_null())
}

/// Text field, empty when absent
pub fn text_field(object: &Map<String, Value>, names: &[&str]) -> String {
    field(object, names).map(to_text).unwrap_or_default()
}

/// Integer field, 0 when absent
pub fn int64_field(object: &Map<String, Value>, names: &[&str]) -> i64 {
    field(object, names).map(to_int64).unwrap_or_default()
}

/// Boolean field, false when absent
pub fn bool_field(object: &Map<String, Value>, names: &[&str]) -> bool {
    field(object, names).map(to_bool).unwrap_or_default()
}

/// Repeated record field, empty when absent
pub fn repeated_field<M: Message>(object: &Map<String, Value>, names: &[&str]) -> Vec<M> {
    field(object, names).map(to_repeated::<M>).unwrap_or_default()
}

/// Coerce to text
pub fn to_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Coerce to a signed 64-bit integer
pub fn to_int64(value: &Value) -> i64 {
    match value {
        Value::Null | Value::Array(_) | Value::Object(_) => 0,
        Value::Bool(b) => i64::from(*b),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i
            } else if let Some(u) = n.as_u64() {
                u as i64
            } else {
                n.as_f64().map(truncate_float).unwrap_or(0)
            }
        }
        Value::String(s) => parse_int64(s),
    }
}

/// Coerce to a boolean
pub fn to_bool(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
        Value::String(s) => {
            let s = s.trim();
            if s.eq_ignore_ascii_case("true") || s == "1" {
                true
            } else {
                !(s.is_empty() || s.eq_ignore_ascii_case("false") || s == "0")
            }
        }
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Coerce to a sequence of records; anything but an array is empty
pub fn to_repeated<M: Message>(value: &Value) -> Vec<M> {
    match value {
        Value::Array(items) => items.iter().map(M::from_json).collect(),
        _ => Vec::new(),
    }
}

/// Serialize a 64-bit integer as decimal text
pub fn int64_as_string<S: Serializer>(value: &i64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

fn parse_int64(text: &str) -> i64 {
    let text = text.trim();
    if let Ok(i) = text.parse::<i64>() {
        return i;
    }
    text.parse::<f64>().map(truncate_float).unwrap_or(0)
}

fn truncate_float(f: f64) -> i64 {
    // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive.
    if f.is_finite() && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        f.trunc() as i64
    } else {
        0
    }
}
