//! Field value extraction

use serde_json::{json, Value};

use super::node::{FieldType, Node, UNDEFINED_LANGUAGE};
use super::store::ContentStore;
use crate::config::SiteConfig;
use crate::helpers::{file_url, image, remove_hw, resolve_arguments, Argument, ImageOptions, Key};

/// Items of a field in a language, falling back to language-neutral items
pub fn field_items<'a>(node: &'a Node, field: &str, language: &str) -> Option<&'a [Value]> {
    let by_language = node.fields.get(field)?;
    by_language
        .get(language)
        .or_else(|| by_language.get(UNDEFINED_LANGUAGE))
        .map(Vec::as_slice)
}

/// Aliased path of a node, or its system path when it has no alias
pub fn nu<S: ContentStore + ?Sized>(store: &S, nid: u64) -> String {
    let path = Node::system_path(nid);
    store.path_alias(&path).unwrap_or(path)
}

/// Extract the value of a node field, shaped by the field's type
///
/// A field with exactly one output is returned unwrapped; otherwise the
/// outputs are returned as an array, which is empty for missing fields.
pub fn nv<S: ContentStore + ?Sized>(
    store: &S,
    config: &SiteConfig,
    node: &Node,
    field: &str,
    view_mode: &str,
) -> Value {
    let language = node.language();
    let field_type = store
        .field_type(field)
        .unwrap_or_else(|| FieldType::Other(String::new()));

    let mut output: Vec<Value> = Vec::new();

    for item in field_items(node, field, language).unwrap_or_default() {
        match field_type {
            // Nothing to render for plain list values
            FieldType::ListBoolean | FieldType::ListText => {
                output.push(item.get("value").cloned().unwrap_or(Value::Null));
            }

            FieldType::Text => {
                let text = resolve_arguments(
                    &[
                        Argument::Lookup(item, Key::from("safe_value")),
                        Argument::Lookup(item, Key::from("value")),
                    ],
                    None,
                );
                output.push(text.cloned().unwrap_or(Value::Null));
            }

            FieldType::LinkField | FieldType::TaxonomyTermReference => {
                output.push(item.clone());
            }

            FieldType::Image => output.push(image_value(config, item)),

            FieldType::NodeReference => {
                if let Some(target) = referenced_node(store, item) {
                    output.push(store.view_node(&target, view_mode));
                }
            }

            FieldType::RevisionReference => {
                let revision = item
                    .get("vid")
                    .and_then(Value::as_u64)
                    .and_then(|vid| store.revision(vid));
                if let Some(revision) = revision {
                    output.push(store.view_node(&revision, view_mode));
                }
            }

            FieldType::Other(_) => {
                let rendered = store.view_field_item(node, field, item, view_mode, language);
                output.push(rendered.unwrap_or_else(|| json!([])));
            }
        }
    }

    if output.len() == 1 {
        output.pop().unwrap_or(Value::Null)
    } else {
        Value::Array(output)
    }
}

/// Image item as `{"o": item, "u": url, "m": markup}`, markup without dimensions
fn image_value(config: &SiteConfig, item: &Value) -> Value {
    let text = |key: &str| item.get(key).and_then(Value::as_str).unwrap_or("");
    let uri = text("uri");

    let markup = image(
        config,
        uri,
        &ImageOptions {
            alt: text("alt"),
            title: text("title"),
            ..Default::default()
        },
    );

    json!({
        "o": item,
        "u": file_url(config, uri),
        "m": remove_hw(&markup),
    })
}

/// Node targeted by a reference item, embedded or by ID
fn referenced_node<S: ContentStore + ?Sized>(store: &S, item: &Value) -> Option<Node> {
    match item.get("node")? {
        Value::Object(_) => serde_json::from_value(item["node"].clone()).ok(),
        Value::Number(nid) => nid.as_u64().and_then(|nid| store.node(nid)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::MemoryStore;

    fn store() -> MemoryStore {
        serde_yaml::from_str(
            r#"
nodes:
  - nid: 2
    title: Team
revisions:
  - nid: 3
    vid: 30
    title: Draft
field_types:
  field_featured: list_boolean
  body: text
  field_photo: image
  field_related: node_reference
  field_previous: revisionreference
  field_tags: taxonomy_term_reference
  field_date: datetime
aliases:
  node/2: team
"#,
        )
        .unwrap()
    }

    fn node() -> Node {
        serde_json::from_value(json!({
            "nid": 1,
            "language": "en",
            "fields": {
                "field_featured": {"und": [{"value": 1}]},
                "body": {
                    "en": [{"value": "<p>raw</p>", "safe_value": "<p>safe</p>"}],
                    "und": [{"value": "neutral"}]
                },
                "field_photo": {"und": [{"uri": "public://a.jpg", "alt": "A", "width": 10}]},
                "field_related": {"und": [{"node": 2}, {"node": 404}, {"node": {"nid": 8, "title": "Inline"}}]},
                "field_previous": {"und": [{"vid": 30}]},
                "field_tags": {"und": [{"tid": 7}, {"tid": 8}]},
                "field_date": {"und": [{"value": "2024-01-01"}, {"date": null}]}
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_field_items_language_fallback() {
        let node = node();
        assert_eq!(field_items(&node, "body", "en").unwrap().len(), 1);
        assert_eq!(
            field_items(&node, "body", "fr").unwrap()[0]["value"],
            json!("neutral")
        );
        assert!(field_items(&node, "missing", "en").is_none());
    }

    #[test]
    fn test_nv_single_values_unwrapped() {
        let (store, config, node) = (store(), SiteConfig::default(), node());
        assert_eq!(nv(&store, &config, &node, "field_featured", "full"), json!(1));
        assert_eq!(nv(&store, &config, &node, "body", "full"), json!("<p>safe</p>"));
    }

    #[test]
    fn test_nv_missing_field() {
        let (store, config, node) = (store(), SiteConfig::default(), node());
        assert_eq!(nv(&store, &config, &node, "field_nothing", "full"), json!([]));
    }

    #[test]
    fn test_nv_image() {
        let (store, config, node) = (store(), SiteConfig::default(), node());
        let value = nv(&store, &config, &node, "field_photo", "full");
        assert_eq!(value["u"], json!("http://example.com/sites/default/files/a.jpg"));
        assert_eq!(value["o"]["alt"], json!("A"));
        assert_eq!(
            value["m"],
            json!(r#"<img src='http://example.com/sites/default/files/a.jpg' alt="A" />"#)
        );
    }

    #[test]
    fn test_nv_references() {
        let (store, config, node) = (store(), SiteConfig::default(), node());
        let related = nv(&store, &config, &node, "field_related", "teaser");
        assert_eq!(
            related,
            json!([
                {"#node": 2, "#title": "Team", "#view_mode": "teaser"},
                {"#node": 8, "#title": "Inline", "#view_mode": "teaser"}
            ])
        );

        let previous = nv(&store, &config, &node, "field_previous", "full");
        assert_eq!(previous["#title"], json!("Draft"));
    }

    #[test]
    fn test_nv_passthrough_and_default() {
        let (store, config, node) = (store(), SiteConfig::default(), node());
        assert_eq!(
            nv(&store, &config, &node, "field_tags", "full"),
            json!([{"tid": 7}, {"tid": 8}])
        );
        assert_eq!(
            nv(&store, &config, &node, "field_date", "full"),
            json!([{"#markup": "2024-01-01"}, []])
        );
    }

    #[test]
    fn test_nu() {
        let store = store();
        assert_eq!(nu(&store, 2), "team");
        assert_eq!(nu(&store, 5), "node/5");
    }
}
