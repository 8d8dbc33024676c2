//! Recursive search in nested values

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;

lazy_static! {
    static ref NUMERIC: Regex = Regex::new(
        r"^[ \t\n\r\x0B\x0C]*[+-]?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?[ \t\n\r\x0B\x0C]*$"
    )
    .expect("numeric pattern is valid");
}

/// Find a value anywhere in a nested array or object
///
/// Elements are compared with [`loose_eq`]; nested containers are searched
/// depth-first.
pub fn in_multiarray(needle: &Value, haystack: &Value) -> bool {
    let children: Box<dyn Iterator<Item = &Value> + '_> = match haystack {
        Value::Array(items) => Box::new(items.iter()),
        Value::Object(map) => Box::new(map.values()),
        _ => return false,
    };

    for value in children {
        if loose_eq(value, needle) {
            return true;
        }
        if in_multiarray(needle, value) {
            return true;
        }
    }

    false
}

/// Loose equality between two values
///
/// Numbers and numeric strings compare by value, booleans compare by
/// truthiness, and null equals every falsy value, empty containers included.
pub fn loose_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, other) | (other, Value::Null) => !is_truthy(other),
        (Value::Bool(x), other) | (other, Value::Bool(x)) => *x == is_truthy(other),
        (Value::Number(x), Value::Number(y)) => x.as_f64() == y.as_f64(),
        (Value::Number(x), Value::String(s)) | (Value::String(s), Value::Number(x)) => {
            match numeric(s) {
                Some(parsed) => x.as_f64() == Some(parsed),
                None => false,
            }
        }
        (Value::String(x), Value::String(y)) => {
            x == y || matches!((numeric(x), numeric(y)), (Some(p), Some(q)) if p == q)
        }
        _ => a == b,
    }
}

/// Value of a numeric string: optional surrounding whitespace, a sign,
/// digits with an optional fraction, and an optional exponent
fn numeric(s: &str) -> Option<f64> {
    if !NUMERIC.is_match(s) {
        return None;
    }
    s.trim().parse().ok()
}

/// Truthiness of a value: empty, zero and null are false
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(false, |f| f != 0.0),
        Value::String(s) => !(s.is_empty() || s == "0"),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
