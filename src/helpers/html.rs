//! HTML helper functions

use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::url::{file_url, is_external, url_for};
use crate::config::SiteConfig;

lazy_static! {
    /// A tag carrying both a width and a height attribute, in either order
    static ref WIDTH_HEIGHT: Regex = Regex::new(
        r#"(?i)<(.*?)((?:width|height)="(.*?)")(.*?)((?:width|height)="(.*?)")(.*?)>"#
    )
    .expect("width/height pattern is valid");
}

/// Value of a single HTML attribute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Text(String),
    List(Vec<String>),
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        AttributeValue::Text(s.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(s: String) -> Self {
        AttributeValue::Text(s)
    }
}

impl From<Vec<String>> for AttributeValue {
    fn from(list: Vec<String>) -> Self {
        AttributeValue::List(list)
    }
}

/// Ordered attribute map, rendered in insertion order
pub type Attributes = IndexMap<String, AttributeValue>;

/// Render attributes as ` name="value"` pairs
///
/// List values are joined with spaces. Every pair carries its leading space,
/// so the result can be appended straight after a tag name.
///
/// # Examples
/// ```ignore
/// render_attributes(&attrs) // -> r#" id="main" class="menu primary""#
/// ```
pub fn render_attributes(attributes: &Attributes) -> String {
    let mut html = String::new();

    for (name, value) in attributes {
        let value = match value {
            AttributeValue::Text(text) => html_escape(text),
            AttributeValue::List(list) => html_escape(&list.join(" ")),
        };
        html.push_str(&format!(r#" {}="{}""#, name, value));
    }

    html
}

/// Generate an anchor tag with extra attributes
///
/// # Examples
/// ```ignore
/// link(&config, "About", "about", &Attributes::new()) // -> <a href="/about">About</a>
/// ```
pub fn link(config: &SiteConfig, text: &str, path: &str, attributes: &Attributes) -> String {
    let href = if is_external(path) {
        path.to_string()
    } else {
        url_for(config, path)
    };

    format!(
        r#"<a href="{}"{}>{}</a>"#,
        html_escape(&href),
        render_attributes(attributes),
        html_escape(text)
    )
}

/// Optional parts of an image tag
#[derive(Debug, Clone, Default)]
pub struct ImageOptions<'a> {
    pub alt: &'a str,
    pub title: &'a str,
    pub width: u32,
    pub height: u32,
    pub style: &'a str,
}

/// Generate an image tag for a stored file
///
/// Empty text and zero dimensions are left out.
///
/// # Examples
/// ```ignore
/// image(&config, "public://a.jpg", &ImageOptions { alt: "A", ..Default::default() })
/// // -> <img src='http://example.com/sites/default/files/a.jpg' alt="A" />
/// ```
pub fn image(config: &SiteConfig, uri: &str, options: &ImageOptions<'_>) -> String {
    let mut attributes = Attributes::new();

    if !options.alt.is_empty() {
        attributes.insert("alt".to_string(), options.alt.into());
    }
    if !options.title.is_empty() {
        attributes.insert("title".to_string(), options.title.into());
    }
    if options.width != 0 {
        attributes.insert("width".to_string(), options.width.to_string().into());
    }
    if options.height != 0 {
        attributes.insert("height".to_string(), options.height.to_string().into());
    }
    if !options.style.is_empty() {
        attributes.insert("style".to_string(), options.style.into());
    }

    format!(
        "<img src='{}'{} />",
        html_escape(&file_url(config, uri)),
        render_attributes(&attributes)
    )
}

/// Remove width and height attributes from a tag, for responsive images
///
/// Only tags carrying both attributes are rewritten.
pub fn remove_hw(markup: &str) -> String {
    WIDTH_HEIGHT.replace_all(markup, "<${1}${4}${7}>").into_owned()
}

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Decode HTML entities (named and numeric)
pub fn decode_entities(s: &str) -> String {
    ::html_escape::decode_html_entities(s).into_owned()
}
