//! CSS class attribute builders

use serde_json::Value;

use super::html::{AttributeValue, Attributes};
use super::nav::LinkOptions;

/// Classes given either as a space-delimited string or as a list
#[derive(Debug, Clone, PartialEq)]
pub enum ClassList<'a> {
    Delimited(&'a str),
    List(Vec<String>),
}

impl<'a> From<&'a str> for ClassList<'a> {
    fn from(s: &'a str) -> Self {
        ClassList::Delimited(s)
    }
}

impl From<Vec<String>> for ClassList<'_> {
    fn from(list: Vec<String>) -> Self {
        ClassList::List(list)
    }
}

/// Build a `class` attribute map
///
/// Delimited strings are split on single spaces, so doubled spaces yield
/// empty entries.
pub fn class_array<'a>(classes: impl Into<ClassList<'a>>) -> Attributes {
    let list = match classes.into() {
        ClassList::Delimited(s) => s.split(' ').map(str::to_string).collect(),
        ClassList::List(list) => list,
    };

    let mut attributes = Attributes::new();
    attributes.insert("class".to_string(), AttributeValue::List(list));
    attributes
}

/// Link options whose attributes carry the string arguments as classes
///
/// Anything that is not a string is ignored. The result plugs straight into
/// [`MenuItem::options`](super::nav::MenuItem).
pub fn classes(args: &[Value]) -> LinkOptions {
    let list = args
        .iter()
        .filter_map(Value::as_str)
        .map(str::to_string)
        .collect::<Vec<_>>();

    LinkOptions {
        attributes: class_array(list),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::helpers::html::link;
    use crate::helpers::nav::MenuItem;
    use serde_json::json;

    fn class_list(attributes: &Attributes) -> Vec<String> {
        match attributes.get("class") {
            Some(AttributeValue::List(list)) => list.clone(),
            other => panic!("unexpected class attribute: {:?}", other),
        }
    }

    #[test]
    fn test_class_array_from_string() {
        let attrs = class_array("btn btn-primary");
        assert_eq!(class_list(&attrs), vec!["btn", "btn-primary"]);
    }

    #[test]
    fn test_class_array_from_list() {
        let attrs = class_array(vec!["a".to_string(), "b c".to_string()]);
        assert_eq!(class_list(&attrs), vec!["a", "b c"]);
    }

    #[test]
    fn test_classes_ignores_non_strings() {
        let options = classes(&[json!("card"), json!(3), json!(null), json!("wide")]);
        assert_eq!(class_list(&options.attributes), vec!["card", "wide"]);
        assert!(class_list(&classes(&[]).attributes).is_empty());
    }

    #[test]
    fn test_classes_as_link_options() {
        let options = classes(&[json!("card")]);
        assert_eq!(
            serde_json::to_value(&options).unwrap(),
            json!({"attributes": {"class": ["card"]}})
        );

        let item = MenuItem {
            title: "Team".to_string(),
            path: "team".to_string(),
            options,
            localized_options: LinkOptions::default(),
        };
        let html = link(&SiteConfig::default(), &item.title, &item.path, &item.attributes());
        assert_eq!(html, r#"<a href="/team" class="card">Team</a>"#);
    }
}
