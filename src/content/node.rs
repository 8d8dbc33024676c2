//! Node and taxonomy models

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Language code for language-neutral field values
pub const UNDEFINED_LANGUAGE: &str = "und";

/// A content node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Node ID
    pub nid: u64,

    /// Revision ID
    #[serde(default)]
    pub vid: Option<u64>,

    /// Node title
    #[serde(default)]
    pub title: String,

    /// Content type
    #[serde(default, rename = "type")]
    pub bundle: String,

    /// Node language, language-neutral when unset
    #[serde(default)]
    pub language: Option<String>,

    /// Field items keyed by field name, then by language code
    #[serde(default)]
    pub fields: IndexMap<String, IndexMap<String, Vec<Value>>>,
}

impl Node {
    /// Language used to pick field items
    pub fn language(&self) -> &str {
        self.language.as_deref().unwrap_or(UNDEFINED_LANGUAGE)
    }

    /// System path of the node with the given ID
    pub fn system_path(nid: u64) -> String {
        format!("node/{}", nid)
    }
}

/// Storage type of a field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldType {
    ListBoolean,
    Text,
    LinkField,
    Image,
    ListText,
    NodeReference,
    RevisionReference,
    TaxonomyTermReference,
    Other(String),
}

impl From<&str> for FieldType {
    fn from(s: &str) -> Self {
        match s {
            "list_boolean" => FieldType::ListBoolean,
            "text" => FieldType::Text,
            "link_field" => FieldType::LinkField,
            "image" => FieldType::Image,
            "list_text" => FieldType::ListText,
            "node_reference" => FieldType::NodeReference,
            "revisionreference" => FieldType::RevisionReference,
            "taxonomy_term_reference" => FieldType::TaxonomyTermReference,
            other => FieldType::Other(other.to_string()),
        }
    }
}

impl From<String> for FieldType {
    fn from(s: String) -> Self {
        FieldType::from(s.as_str())
    }
}

impl From<FieldType> for String {
    fn from(field_type: FieldType) -> Self {
        match field_type {
            FieldType::ListBoolean => "list_boolean".to_string(),
            FieldType::Text => "text".to_string(),
            FieldType::LinkField => "link_field".to_string(),
            FieldType::Image => "image".to_string(),
            FieldType::ListText => "list_text".to_string(),
            FieldType::NodeReference => "node_reference".to_string(),
            FieldType::RevisionReference => "revisionreference".to_string(),
            FieldType::TaxonomyTermReference => "taxonomy_term_reference".to_string(),
            FieldType::Other(other) => other,
        }
    }
}

/// A taxonomy vocabulary with its term tree flattened in display order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vocabulary {
    pub vid: u64,
    /// Machine name
    pub name: String,
    #[serde(default)]
    pub terms: Vec<Term>,
}

/// A taxonomy term
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Term {
    pub tid: u64,
    pub name: String,
    #[serde(default)]
    pub depth: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_type_names() {
        assert_eq!(FieldType::from("image"), FieldType::Image);
        assert_eq!(
            FieldType::from("datetime"),
            FieldType::Other("datetime".to_string())
        );
        assert_eq!(String::from(FieldType::RevisionReference), "revisionreference");
    }

    #[test]
    fn test_parse_node() {
        let yaml = r#"
nid: 4
title: Welcome
type: page
fields:
  body:
    und:
      - value: Hello
"#;
        let node: Node = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(node.bundle, "page");
        assert_eq!(node.language(), "und");
        assert_eq!(Node::system_path(node.nid), "node/4");
        assert_eq!(node.fields["body"]["und"].len(), 1);
    }
}
