//! Commands that read site content: fields, aliases, taxonomy options and menus

use anyhow::Result;

use crate::content::{nu, nv, tax_options, tax_options_by_name, ContentStore};
use crate::helpers::{class_array, Attributes};
use crate::Site;

/// Print the value of a node field as JSON
pub fn field(site: &Site, nid: u64, field: &str, view_mode: Option<&str>) -> Result<()> {
    let store = site.load_content()?;
    let Some(node) = store.node(nid) else {
        anyhow::bail!("Node not found: {}", nid);
    };

    let view_mode = view_mode.unwrap_or(&site.config.default_view_mode);
    let value = nv(&store, &site.config, &node, field, view_mode);
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

/// Print the aliased path of a node
pub fn alias(site: &Site, nid: u64) -> Result<()> {
    let store = site.load_content()?;
    println!("{}", nu(&store, nid));
    Ok(())
}

/// Print `<option>` markup for a vocabulary
pub fn options(site: &Site, vocabulary: &str, default: &str, by_name: bool) -> Result<()> {
    let store = site.load_content()?;
    let html = if by_name {
        tax_options_by_name(&store, vocabulary, default)
    } else {
        tax_options(&store, vocabulary, default)
    };

    if html.is_empty() {
        tracing::warn!("Vocabulary {} has no terms", vocabulary);
    }
    println!("{}", html);
    Ok(())
}

/// Print navigation markup for a menu
pub fn nav(site: &Site, menu: &str, class: Option<&str>) -> Result<()> {
    let store = site.load_content()?;
    let items = store.menu(menu);

    let ul_attrs = class.map(|c| class_array(c)).unwrap_or_else(Attributes::new);
    let html = site.helpers().nav(&items, &Attributes::new(), &ul_attrs);

    if html.is_empty() {
        tracing::warn!("Menu {} is empty", menu);
    }
    println!("{}", html);
    Ok(())
}
