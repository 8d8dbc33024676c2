//! cms-helpers: template helpers for CMS-driven sites
//!
//! This crate provides the helpers a theme layer calls while rendering:
//! null-coalescing lookups over dynamic values, markup builders for links,
//! images and menus, node field extraction, CSV tables, and video metadata.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;
pub mod tables;
pub mod video;

pub use serde_json::{json, Value};

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// A site the helpers operate on
#[derive(Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Content dump backing the in-memory store
    pub content_path: PathBuf,
}

impl Site {
    /// Create a new site from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let content_path = base_dir.join(&config.content_file);

        Ok(Self {
            config,
            base_dir,
            content_path,
        })
    }

    /// Load the site content into memory
    pub fn load_content(&self) -> Result<content::MemoryStore> {
        content::MemoryStore::load(&self.content_path)
            .with_context(|| format!("Failed to load content from {:?}", self.content_path))
    }

    /// Helpers bound to this site's configuration
    pub fn helpers(&self) -> helpers::Helpers {
        helpers::Helpers::new(self.config.clone())
    }

    /// Client for video metadata lookups
    pub fn video_client(&self) -> Result<video::VideoClient> {
        video::VideoClient::new(&self.config.video)
    }

    /// Resolve a path relative to the base directory
    pub fn resolve_path<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }
}
