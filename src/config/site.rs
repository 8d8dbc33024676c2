//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub language: String,

    // URL
    pub url: String,
    pub root: String,
    /// Directory under the root that `public://` file URIs map to
    pub files_dir: String,

    // Content
    /// Content dump the in-memory store is loaded from (YAML or JSON)
    pub content_file: String,
    pub default_view_mode: String,

    // CSV
    pub csv_delimiter: char,

    // Video metadata endpoints
    #[serde(default)]
    pub video: VideoConfig,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Site".to_string(),
            language: "und".to_string(),

            url: "http://example.com".to_string(),
            root: "/".to_string(),
            files_dir: "sites/default/files".to_string(),

            content_file: "content.yml".to_string(),
            default_view_mode: "full".to_string(),

            csv_delimiter: ',',

            video: VideoConfig::default(),
            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        tracing::debug!("Loaded site config from {:?}", path.as_ref());
        Ok(config)
    }
}

/// Video metadata API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoConfig {
    /// Base of the Vimeo simple API, `<base>/<id>.json` is requested
    pub vimeo_api: String,
    /// Base of the YouTube video feed, `<base>/<id>?v=2&alt=json` is requested
    pub youtube_api: String,
    /// Base of YouTube still images, `<base>/<id>/maxresdefault.jpg` is probed
    pub youtube_images: String,
    /// Per-request timeout in seconds, none when unset
    pub timeout_secs: Option<u64>,
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            vimeo_api: "http://vimeo.com/api/v2/video".to_string(),
            youtube_api: "http://gdata.youtube.com/feeds/api/videos".to_string(),
            youtube_images: "http://i.ytimg.com/vi".to_string(),
            timeout_secs: None,
        }
    }
}
