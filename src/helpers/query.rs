//! Query-string lookup

use serde_json::{Map, Value};

use super::resolve::resolve;

/// Whether a key counts as empty: `""` and `"0"` do
fn is_blank(key: &str) -> bool {
    key.is_empty() || key == "0"
}

/// Render a resolved scalar as text, containers become empty
pub fn value_to_string(value: &Value) -> String {
    match value {
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
        Value::Bool(true) => "1".to_string(),
        Value::Bool(false) => String::new(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
    }
}

/// Look up a query parameter, lowercased, or return the default
///
/// # Examples
/// ```ignore
/// qs(&params, "sort", "asc") // -> "desc" for ?sort=DESC
/// ```
pub fn qs(params: &Map<String, Value>, key: &str, default: &str) -> String {
    if params.is_empty() || is_blank(key) {
        return default.to_string();
    }

    let found = resolve(&[Value::Object(params.clone()), Value::from(key)]);
    let value = resolve(&[found, Value::from(default), Value::from("")]);
    value_to_string(&value).to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }

    #[test]
    fn test_qs_found() {
        let p = params(json!({"sort": "DESC", "page": 2}));
        assert_eq!(qs(&p, "sort", "asc"), "desc");
        assert_eq!(qs(&p, "page", "1"), "2");
    }

    #[test]
    fn test_qs_missing() {
        let p = params(json!({"sort": "DESC"}));
        assert_eq!(qs(&p, "filter", "All"), "all");
        assert_eq!(qs(&p, "", "Asc"), "Asc");
        assert_eq!(qs(&Map::new(), "sort", "Asc"), "Asc");
    }

    #[test]
    fn test_qs_container_value() {
        let p = params(json!({"tags": ["a", "b"]}));
        assert_eq!(qs(&p, "tags", "none"), "");
    }
}
