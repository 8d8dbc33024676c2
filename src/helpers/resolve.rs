//! Null-coalescing lookup (`nvl`)
//!
//! Walks a sequence of arguments and returns the first one that is present.
//! Each entry is either a standalone value or a container followed by a key,
//! in which case the container is indexed with that key. The final position
//! is the default.

use serde_json::Value;
use std::borrow::Cow;

/// A key that can index a container
#[derive(Debug, Clone, PartialEq)]
pub enum Key<'a> {
    Null,
    Str(&'a str),
    Int(i64),
    Float(f64),
    Bool(bool),
}

/// Normalized container index
#[derive(Debug, PartialEq)]
enum Index<'a> {
    Name(Cow<'a, str>),
    Position(i64),
}

impl<'a> Key<'a> {
    /// Classify a value as a key. Containers are not valid keys.
    pub fn from_value(value: &'a Value) -> Option<Self> {
        match value {
            Value::Null => Some(Key::Null),
            Value::Bool(b) => Some(Key::Bool(*b)),
            Value::String(s) => Some(Key::Str(s)),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Some(Key::Int(i)),
                None => n.as_f64().map(Key::Float),
            },
            Value::Array(_) | Value::Object(_) => None,
        }
    }

    fn normalize(&self) -> Index<'a> {
        match self {
            Key::Null => Index::Name(Cow::Borrowed("")),
            Key::Bool(b) => Index::Position(i64::from(*b)),
            Key::Int(i) => Index::Position(*i),
            Key::Float(f) => Index::Position(f.trunc() as i64),
            Key::Str(s) => match canonical_int(s) {
                Some(i) => Index::Position(i),
                None => Index::Name(Cow::Borrowed(*s)),
            },
        }
    }

    /// Index a container with this key.
    ///
    /// Objects are indexed by the key's string form, arrays by position.
    /// Scalars never contain anything.
    pub fn lookup<'v>(&self, container: &'v Value) -> Option<&'v Value> {
        match (container, self.normalize()) {
            (Value::Object(map), Index::Name(name)) => map.get(&*name),
            (Value::Object(map), Index::Position(i)) => map.get(&i.to_string()),
            (Value::Array(items), Index::Position(i)) => {
                usize::try_from(i).ok().and_then(|i| items.get(i))
            }
            _ => None,
        }
    }
}

impl<'a> From<&'a str> for Key<'a> {
    fn from(s: &'a str) -> Self {
        Key::Str(s)
    }
}

impl From<i64> for Key<'_> {
    fn from(i: i64) -> Self {
        Key::Int(i)
    }
}

impl From<bool> for Key<'_> {
    fn from(b: bool) -> Self {
        Key::Bool(b)
    }
}

/// Decimal integer strings in canonical form ("12", "-3", "0") index by position
fn canonical_int(s: &str) -> Option<i64> {
    let digits = s.strip_prefix('-').unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if digits.starts_with('0') && (digits.len() > 1 || s.starts_with('-')) {
        return None;
    }
    s.parse().ok()
}

/// Whether a value is a container (array or object)
pub fn is_container(value: &Value) -> bool {
    matches!(value, Value::Array(_) | Value::Object(_))
}

/// One entry of a lookup sequence
#[derive(Debug, Clone, PartialEq)]
pub enum Argument<'a> {
    /// A standalone value, present unless null
    Value(&'a Value),
    /// A container and the key to look up in it
    Lookup(&'a Value, Key<'a>),
}

impl<'a> Argument<'a> {
    /// The present value this argument resolves to, if any
    pub fn resolve(&self) -> Option<&'a Value> {
        match self {
            Argument::Value(value) => Some(*value).filter(|v| !v.is_null()),
            Argument::Lookup(container, key) => key.lookup(*container).filter(|v| !v.is_null()),
        }
    }
}

/// A positional sequence split into arguments and the trailing default
#[derive(Debug, Clone, PartialEq)]
pub struct Classified<'a> {
    pub arguments: Vec<Argument<'a>>,
    /// `None` when there were no arguments, or the last one was consumed as a key
    pub default: Option<&'a Value>,
}

/// Split positional arguments into lookups and standalone values.
///
/// A container pairs with the next position when that position holds a
/// valid key. The last position is never paired as a container, but it can
/// be consumed as a key.
pub fn classify(args: &[Value]) -> Classified<'_> {
    let mut arguments = Vec::new();
    let mut i = 0;

    while i + 1 < args.len() {
        let current = &args[i];

        if is_container(current) {
            if let Some(key) = Key::from_value(&args[i + 1]) {
                arguments.push(Argument::Lookup(current, key));
                i += 2;
                continue;
            }
        }

        arguments.push(Argument::Value(current));
        i += 1;
    }

    Classified {
        arguments,
        default: args.get(i),
    }
}

/// Resolve an explicit argument sequence, falling back to `default`
pub fn resolve_arguments<'a>(
    arguments: &[Argument<'a>],
    default: Option<&'a Value>,
) -> Option<&'a Value> {
    arguments.iter().find_map(Argument::resolve).or(default)
}

/// Return the first present entry of a positional argument list, or null
///
/// # Examples
/// ```ignore
/// resolve(&[json!({"a": 1}), json!("a"), json!("fallback")]) // -> 1
/// resolve(&[json!(null), json!("fallback")])                 // -> "fallback"
/// ```
pub fn resolve(args: &[Value]) -> Value {
    let classified = classify(args);
    resolve_arguments(&classified.arguments, classified.default)
        .cloned()
        .unwrap_or(Value::Null)
}

/// Positional `nvl` over anything serializable, converted with `json!`
#[macro_export]
macro_rules! nvl {
    ($($arg:expr),* $(,)?) => {
        $crate::helpers::resolve(&[$($crate::json!($arg)),*])
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_no_arguments() {
        assert_eq!(resolve(&[]), Value::Null);
    }

    #[test]
    fn test_single_argument_is_default() {
        assert_eq!(resolve(&[json!("x")]), json!("x"));
        assert_eq!(resolve(&[json!({"a": 1})]), json!({"a": 1}));
        assert_eq!(resolve(&[json!(null)]), Value::Null);
    }

    #[test]
    fn test_null_skipped() {
        assert_eq!(resolve(&[json!(null), json!("fallback")]), json!("fallback"));
    }

    #[test]
    fn test_container_lookup() {
        let args = [json!({"a": 1}), json!("a"), json!("fallback")];
        assert_eq!(resolve(&args), json!(1));
    }

    #[test]
    fn test_null_under_key_is_absent() {
        let args = [json!({"a": null}), json!("a"), json!("fallback")];
        assert_eq!(resolve(&args), json!("fallback"));
    }

    #[test]
    fn test_missing_key() {
        let args = [json!({"a": 1}), json!("missing"), json!("fallback")];
        assert_eq!(resolve(&args), json!("fallback"));
    }

    #[test]
    fn test_container_followed_by_container() {
        let args = [json!({}), json!({}), json!("fallback")];
        assert_eq!(resolve(&args), json!({}));
    }

    #[test]
    fn test_scalar_short_circuits() {
        let args = [json!("x"), json!({"a": 1}), json!("a"), json!("fallback")];
        assert_eq!(resolve(&args), json!("x"));
    }

    #[test]
    fn test_two_argument_lookup_consumes_default() {
        assert_eq!(resolve(&[json!({"a": 1}), json!("a")]), json!(1));
        assert_eq!(resolve(&[json!({"a": 1}), json!("b")]), Value::Null);
    }

    #[test]
    fn test_falsy_values_are_present() {
        assert_eq!(resolve(&[json!(""), json!("fallback")]), json!(""));
        assert_eq!(resolve(&[json!(false), json!("fallback")]), json!(false));
        assert_eq!(resolve(&[json!(0), json!("fallback")]), json!(0));
    }

    #[test]
    fn test_key_normalization() {
        let list = json!(["zero", "one", "two"]);
        assert_eq!(resolve(&[list.clone(), json!(1), json!("d")]), json!("one"));
        assert_eq!(resolve(&[list.clone(), json!("2"), json!("d")]), json!("two"));
        assert_eq!(resolve(&[list.clone(), json!(true), json!("d")]), json!("one"));
        assert_eq!(resolve(&[list.clone(), json!(1.9), json!("d")]), json!("one"));
        assert_eq!(resolve(&[list.clone(), json!("01"), json!("d")]), json!("d"));
        assert_eq!(resolve(&[list, json!(-1), json!("d")]), json!("d"));

        let map = json!({"": "empty", "7": "seven"});
        assert_eq!(resolve(&[map.clone(), json!(null), json!("d")]), json!("empty"));
        assert_eq!(resolve(&[map, json!(7), json!("d")]), json!("seven"));
    }

    #[test]
    fn test_chained_lookups() {
        let item = json!({"value": "raw"});
        let args = [item.clone(), json!("safe_value"), item, json!("value"), json!("")];
        assert_eq!(resolve(&args), json!("raw"));
    }

    #[test]
    fn test_classify() {
        let args = [
            json!(null),
            json!({"a": 1}),
            json!("a"),
            json!([]),
            json!([]),
            json!("x"),
            json!("d"),
        ];
        let classified = classify(&args);
        assert_eq!(classified.arguments.len(), 4);
        assert!(matches!(classified.arguments[1], Argument::Lookup(_, Key::Str("a"))));
        assert!(matches!(classified.arguments[2], Argument::Value(v) if v == &json!([])));
        assert!(matches!(classified.arguments[3], Argument::Lookup(_, Key::Str("x"))));
        assert_eq!(classified.default, Some(&json!("d")));
    }

    #[test]
    fn test_classify_last_argument_as_key() {
        let args = [json!(null), json!([]), json!([]), json!("d")];
        let classified = classify(&args);
        assert_eq!(classified.default, None);
        assert!(matches!(
            classified.arguments.last(),
            Some(Argument::Lookup(_, Key::Str("d")))
        ));
    }

    #[test]
    fn test_resolve_arguments() {
        let node = json!({"title": null, "label": "Home"});
        let fallback = json!("Untitled");
        let args = [
            Argument::Lookup(&node, Key::from("title")),
            Argument::Lookup(&node, Key::from("label")),
        ];
        assert_eq!(resolve_arguments(&args, Some(&fallback)), Some(&json!("Home")));
        assert_eq!(resolve_arguments(&args[..1], Some(&fallback)), Some(&fallback));
        assert_eq!(resolve_arguments(&[], None), None);
    }

    #[test]
    fn test_macro() {
        let params = json!({"sort": "DESC"});
        assert_eq!(crate::nvl!(params.clone(), "sort", "asc"), json!("DESC"));
        assert_eq!(crate::nvl!(Value::Null, "fallback"), json!("fallback"));
        assert_eq!(crate::nvl!(), Value::Null);

        let title = String::from("Home");
        let missing: Option<String> = None;
        assert_eq!(crate::nvl!(&missing, &title, "Untitled"), json!("Home"));
    }
}
