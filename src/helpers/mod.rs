//! Helper functions for templates
//!
//! These functions are called from templates and provide lookups with
//! fallbacks, markup builders for links, images and menus, and class
//! attribute maps.

mod classes;
mod html;
mod nav;
mod query;
mod resolve;
mod search;
mod url;

pub use classes::*;
pub use html::*;
pub use nav::*;
pub use query::*;
pub use resolve::*;
pub use search::*;
pub use url::*;

use crate::config::SiteConfig;

/// Helpers bound to a site configuration
pub struct Helpers {
    config: SiteConfig,
}

impl Helpers {
    /// Create a new helpers instance
    pub fn new(config: SiteConfig) -> Self {
        Self { config }
    }

    /// Get url_for helper
    pub fn url_for(&self, path: &str) -> String {
        url_for(&self.config, path)
    }

    /// Get file_url helper
    pub fn file_url(&self, uri: &str) -> String {
        file_url(&self.config, uri)
    }

    /// Get link helper
    pub fn link(&self, text: &str, path: &str, attributes: &Attributes) -> String {
        link(&self.config, text, path, attributes)
    }

    /// Get image helper
    pub fn image(&self, uri: &str, options: &ImageOptions<'_>) -> String {
        image(&self.config, uri, options)
    }

    /// Render a menu
    pub fn nav(&self, items: &[MenuItem], nav_attrs: &Attributes, ul_attrs: &Attributes) -> String {
        nav(&self.config, items, nav_attrs, ul_attrs)
    }
}
