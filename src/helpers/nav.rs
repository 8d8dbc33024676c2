//! Navigation and list markup

use serde::{Deserialize, Serialize};

use super::html::{link, render_attributes, Attributes};
use crate::config::SiteConfig;

/// Link options carried by a menu entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkOptions {
    pub attributes: Attributes,
}

/// A single menu entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub title: String,
    pub path: String,
    #[serde(default)]
    pub options: LinkOptions,
    /// Per-language overrides, applied on top of `options`
    #[serde(default)]
    pub localized_options: LinkOptions,
}

impl MenuItem {
    /// Link attributes with localized values overriding the base ones
    pub fn attributes(&self) -> Attributes {
        let mut attributes = self.options.attributes.clone();
        for (name, value) in &self.localized_options.attributes {
            attributes.insert(name.clone(), value.clone());
        }
        attributes
    }
}

/// Wrap pre-rendered list items in a `<ul>`
///
/// Returns an empty string when there are no items.
pub fn ul<S: AsRef<str>>(items: &[S], attributes: &Attributes) -> String {
    if items.is_empty() {
        return String::new();
    }

    let mut html = format!("<ul{}>", render_attributes(attributes));
    for item in items {
        html.push_str(item.as_ref());
    }
    html.push_str("</ul>");
    html
}

/// Render a menu as `<nav><ul><li><a ...></a></li>...</ul></nav>`
///
/// Returns an empty string when the menu has no entries.
pub fn nav(
    config: &SiteConfig,
    items: &[MenuItem],
    nav_attributes: &Attributes,
    ul_attributes: &Attributes,
) -> String {
    if items.is_empty() {
        return String::new();
    }

    let entries: Vec<String> = items
        .iter()
        .map(|item| {
            format!(
                "<li>{}</li>",
                link(config, &item.title, &item.path, &item.attributes())
            )
        })
        .collect();

    format!(
        "<nav{}>{}</nav>",
        render_attributes(nav_attributes),
        ul(&entries, ul_attributes)
    )
}
