//! HTTP client for Vimeo and YouTube metadata endpoints
//!
//! Lookups never fail: any transport error, error status or unexpected
//! document yields an empty string and a warning.

use anyhow::{Context, Result};
use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;

use super::{video_id, VideoId};
use crate::config::VideoConfig;

/// Metadata client for hosted videos
pub struct VideoClient {
    /// HTTP client
    client: reqwest::Client,
    /// Endpoint configuration
    config: VideoConfig,
}

impl VideoClient {
    /// Create a client for the configured endpoints
    pub fn new(config: &VideoConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build().context("Failed to build HTTP client")?,
            config: config.clone(),
        })
    }

    /// Thumbnail URL of the video behind a Vimeo or YouTube URL
    pub async fn thumbnail(&self, url: &str) -> String {
        match video_id(url) {
            Some(VideoId::Vimeo(id)) => self.vimeo_thumbnail(id).await,
            Some(VideoId::YouTube(id)) => self.youtube_thumbnail(&id).await,
            None => String::new(),
        }
    }

    /// Title of the video behind a Vimeo or YouTube URL
    pub async fn title(&self, url: &str) -> String {
        let title = match video_id(url) {
            Some(VideoId::Vimeo(id)) => self
                .fetch_json(&self.vimeo_url(id))
                .await
                .map(|doc| text_at(&doc, "/0/title")),
            Some(VideoId::YouTube(id)) => self
                .fetch_json(&self.youtube_feed_url(&id))
                .await
                .map(|doc| text_at(&doc, "/entry/title/$t")),
            None => return String::new(),
        };

        title.unwrap_or_else(|e| {
            tracing::warn!("Failed to fetch video title for {}: {:#}", url, e);
            String::new()
        })
    }

    /// Large thumbnail of a Vimeo video
    pub async fn vimeo_thumbnail(&self, id: u64) -> String {
        match self.fetch_json(&self.vimeo_url(id)).await {
            Ok(doc) => text_at(&doc, "/0/thumbnail_large"),
            Err(e) => {
                tracing::warn!("Failed to fetch Vimeo thumbnail for {}: {:#}", id, e);
                String::new()
            }
        }
    }

    /// Best available thumbnail of a YouTube video
    ///
    /// A 4xx answer for the feed means the video is unknown and yields "".
    /// Otherwise takes the fourth-from-last feed thumbnail when the feed is
    /// readable, then prefers the `maxresdefault.jpg` still unless probing
    /// it answers 404.
    pub async fn youtube_thumbnail(&self, id: &str) -> String {
        let mut image = match self.fetch_json(&self.youtube_feed_url(id)).await {
            Ok(feed) => feed_thumbnail(&feed),
            Err(e) if is_client_error(&e) => {
                tracing::warn!("Unknown YouTube video {}: {:#}", id, e);
                return String::new();
            }
            Err(e) => {
                tracing::warn!("Failed to fetch YouTube feed for {}: {:#}", id, e);
                String::new()
            }
        };

        let max_url = format!(
            "{}/{}/maxresdefault.jpg",
            self.config.youtube_images.trim_end_matches('/'),
            id
        );

        match self.client.head(&max_url).send().await {
            Ok(response) if response.status() == StatusCode::NOT_FOUND => {
                tracing::debug!("No max resolution still for {}", id);
            }
            Ok(_) => image = max_url,
            Err(e) => {
                // Only an explicit 404 rules the still out
                tracing::debug!("Probe of {} failed: {}", max_url, e);
                image = max_url;
            }
        }

        image
    }

    fn vimeo_url(&self, id: u64) -> String {
        format!("{}/{}.json", self.config.vimeo_api.trim_end_matches('/'), id)
    }

    fn youtube_feed_url(&self, id: &str) -> String {
        format!(
            "{}/{}?v=2&alt=json",
            self.config.youtube_api.trim_end_matches('/'),
            id
        )
    }

    /// GET a JSON document, treating error statuses as failures
    async fn fetch_json(&self, url: &str) -> Result<Value> {
        tracing::debug!("Fetching {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Request to {} failed", url))?
            .error_for_status()?;

        response
            .json()
            .await
            .with_context(|| format!("Invalid JSON from {}", url))
    }
}

/// Fourth-from-last thumbnail URL of a YouTube feed entry
fn feed_thumbnail(feed: &Value) -> String {
    feed.pointer("/entry/media$group/media$thumbnail")
        .and_then(Value::as_array)
        .and_then(|thumbs| thumbs.len().checked_sub(4).and_then(|i| thumbs.get(i)))
        .and_then(|thumb| thumb.get("url"))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Whether a request failed with a 4xx status
fn is_client_error(error: &anyhow::Error) -> bool {
    error
        .downcast_ref::<reqwest::Error>()
        .and_then(reqwest::Error::status)
        .map_or(false, |status| status.is_client_error())
}

/// String at a JSON pointer, empty when absent or not a string
fn text_at(doc: &Value, pointer: &str) -> String {
    doc.pointer(pointer)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}
