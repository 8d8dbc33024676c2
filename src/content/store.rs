//! Content storage: the `ContentStore` trait and an in-memory implementation

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use thiserror::Error;

use super::node::{FieldType, Node, Term, Vocabulary};
use crate::helpers::{html_escape, value_to_string, MenuItem};

/// Errors raised while loading content
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Unsupported content format: {0}")]
    UnsupportedFormat(String),
}

/// Read access to CMS content
pub trait ContentStore {
    /// Load a node by ID
    fn node(&self, nid: u64) -> Option<Node>;

    /// Load a node at a given revision
    fn revision(&self, vid: u64) -> Option<Node>;

    /// Storage type of a field, if the field exists
    fn field_type(&self, field: &str) -> Option<FieldType>;

    /// URL alias of a system path
    fn path_alias(&self, path: &str) -> Option<String>;

    /// Renderable representation of a node in a view mode
    fn view_node(&self, node: &Node, view_mode: &str) -> Value;

    /// Renderable representation of a single field item
    fn view_field_item(
        &self,
        node: &Node,
        field: &str,
        item: &Value,
        view_mode: &str,
        language: &str,
    ) -> Option<Value>;

    /// Vocabulary by machine name
    fn vocabulary(&self, name: &str) -> Option<Vocabulary>;

    /// Terms of a vocabulary in tree order
    fn terms(&self, vid: u64) -> Vec<Term>;

    /// Entries of a named menu
    fn menu(&self, name: &str) -> Vec<MenuItem>;
}

/// Content held in memory, loaded from a YAML or JSON dump
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryStore {
    pub nodes: Vec<Node>,
    /// Past revisions, looked up before current nodes
    pub revisions: Vec<Node>,
    pub field_types: IndexMap<String, FieldType>,
    /// System path -> alias
    pub aliases: IndexMap<String, String>,
    pub vocabularies: Vec<Vocabulary>,
    pub menus: IndexMap<String, Vec<MenuItem>>,
}

impl MemoryStore {
    /// Load a content dump, choosing the format by file extension
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ContentError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;

        let store: MemoryStore = match path.extension().and_then(|e| e.to_str()) {
            Some("yml") | Some("yaml") => serde_yaml::from_str(&content)?,
            Some("json") => serde_json::from_str(&content)?,
            _ => return Err(ContentError::UnsupportedFormat(path.display().to_string())),
        };

        tracing::debug!(
            "Loaded {} nodes and {} vocabularies from {:?}",
            store.nodes.len(),
            store.vocabularies.len(),
            path
        );
        Ok(store)
    }
}

impl ContentStore for MemoryStore {
    fn node(&self, nid: u64) -> Option<Node> {
        self.nodes.iter().find(|n| n.nid == nid).cloned()
    }

    fn revision(&self, vid: u64) -> Option<Node> {
        self.revisions
            .iter()
            .chain(self.nodes.iter())
            .find(|n| n.vid == Some(vid))
            .cloned()
    }

    fn field_type(&self, field: &str) -> Option<FieldType> {
        self.field_types.get(field).cloned()
    }

    fn path_alias(&self, path: &str) -> Option<String> {
        self.aliases.get(path).cloned()
    }

    fn view_node(&self, node: &Node, view_mode: &str) -> Value {
        json!({
            "#node": node.nid,
            "#title": node.title,
            "#view_mode": view_mode,
        })
    }

    fn view_field_item(
        &self,
        _node: &Node,
        _field: &str,
        item: &Value,
        _view_mode: &str,
        _language: &str,
    ) -> Option<Value> {
        match item.get("value") {
            Some(value) if !value.is_null() && !value.is_array() && !value.is_object() => {
                Some(json!({ "#markup": html_escape(&value_to_string(value)) }))
            }
            _ => None,
        }
    }

    fn vocabulary(&self, name: &str) -> Option<Vocabulary> {
        self.vocabularies.iter().find(|v| v.name == name).cloned()
    }

    fn terms(&self, vid: u64) -> Vec<Term> {
        self.vocabularies
            .iter()
            .find(|v| v.vid == vid)
            .map(|v| v.terms.clone())
            .unwrap_or_default()
    }

    fn menu(&self, name: &str) -> Vec<MenuItem> {
        self.menus.get(name).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const CONTENT: &str = r#"
nodes:
  - nid: 1
    vid: 11
    title: Home
  - nid: 2
    vid: 12
    title: About
revisions:
  - nid: 2
    vid: 5
    title: About (draft)
field_types:
  field_tags: taxonomy_term_reference
aliases:
  node/2: about-us
vocabularies:
  - vid: 3
    name: tags
    terms:
      - tid: 7
        name: Rust
"#;

    #[test]
    fn test_load_yaml() {
        let mut file = tempfile::Builder::new().suffix(".yml").tempfile().unwrap();
        file.write_all(CONTENT.as_bytes()).unwrap();

        let store = MemoryStore::load(file.path()).unwrap();
        assert_eq!(store.node(2).unwrap().title, "About");
        assert_eq!(store.revision(5).unwrap().title, "About (draft)");
        assert_eq!(store.revision(11).unwrap().title, "Home");
        assert!(store.revision(99).is_none());
        assert_eq!(
            store.field_type("field_tags"),
            Some(FieldType::TaxonomyTermReference)
        );
        assert_eq!(store.path_alias("node/2").as_deref(), Some("about-us"));
        assert_eq!(store.terms(3).len(), 1);
        assert!(store.terms(4).is_empty());
    }

    #[test]
    fn test_load_json() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(br#"{"nodes": [{"nid": 9, "title": "Nine"}]}"#)
            .unwrap();

        let store = MemoryStore::load(file.path()).unwrap();
        assert_eq!(store.node(9).unwrap().title, "Nine");
    }

    #[test]
    fn test_unsupported_format() {
        let file = tempfile::Builder::new().suffix(".ini").tempfile().unwrap();
        assert!(matches!(
            MemoryStore::load(file.path()),
            Err(ContentError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_view_field_item() {
        let store = MemoryStore::default();
        let node: Node = serde_json::from_value(json!({"nid": 1})).unwrap();

        assert_eq!(
            store.view_field_item(&node, "body", &json!({"value": "<b>hi</b>"}), "full", "und"),
            Some(json!({"#markup": "&lt;b&gt;hi&lt;/b&gt;"}))
        );
        assert_eq!(
            store.view_field_item(&node, "body", &json!({"target": 3}), "full", "und"),
            None
        );
    }
}
