//! Video URL parsing and metadata lookup for Vimeo and YouTube

mod client;

pub use client::VideoClient;

use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

lazy_static! {
    static ref YOUTUBE_URL: Regex = Regex::new(
        r"^(?:https?://)?(?:www\.)?(?:youtu\.be/|youtube\.com(?:/embed/|/v/|/watch\?v=|/watch\?.+&v=))([A-Za-z0-9_-]{11})(?:.+)?$"
    )
    .expect("YouTube URL pattern is valid");
}

/// Video hosting service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoProvider {
    Vimeo,
    YouTube,
}

impl VideoProvider {
    /// Guess the provider from a URL
    ///
    /// Matching is by substring; a URL mentioning both services counts as
    /// YouTube. Short `youtu.be` links are not recognized here.
    pub fn detect(url: &str) -> Option<Self> {
        if url.contains("youtube") {
            Some(VideoProvider::YouTube)
        } else if url.contains("vimeo") {
            Some(VideoProvider::Vimeo)
        } else {
            None
        }
    }
}

/// Identifier of a hosted video
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoId {
    Vimeo(u64),
    YouTube(String),
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VideoId::Vimeo(id) => write!(f, "{}", id),
            VideoId::YouTube(id) => write!(f, "{}", id),
        }
    }
}

/// Extract the video ID from a Vimeo or YouTube URL
///
/// # Examples
/// ```ignore
/// video_id("https://vimeo.com/76979871")                 // -> Some(VideoId::Vimeo(76979871))
/// video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ") // -> Some(VideoId::YouTube("dQw4w9WgXcQ"))
/// ```
pub fn video_id(url: &str) -> Option<VideoId> {
    match VideoProvider::detect(url)? {
        VideoProvider::Vimeo => Some(VideoId::Vimeo(vimeo_id(url))),
        VideoProvider::YouTube => parse_youtube_url(url).map(VideoId::YouTube),
    }
}

/// Leading number of the URL path, 0 when there is none
fn vimeo_id(url: &str) -> u64 {
    let path = match url::Url::parse(url) {
        Ok(parsed) => parsed.path().to_string(),
        Err(_) => url.to_string(),
    };

    let digits: String = path
        .chars()
        .skip(1)
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().unwrap_or(0)
}

/// Check that a string is a YouTube URL and pull out its 11-character video ID
pub fn parse_youtube_url(url: &str) -> Option<String> {
    YOUTUBE_URL
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect() {
        assert_eq!(
            VideoProvider::detect("https://vimeo.com/1"),
            Some(VideoProvider::Vimeo)
        );
        assert_eq!(
            VideoProvider::detect("https://youtube.com/watch?v=x&from=vimeo"),
            Some(VideoProvider::YouTube)
        );
        assert_eq!(VideoProvider::detect("https://youtu.be/dQw4w9WgXcQ"), None);
        assert_eq!(VideoProvider::detect("https://example.com"), None);
    }

    #[test]
    fn test_vimeo_id() {
        assert_eq!(
            video_id("https://vimeo.com/76979871"),
            Some(VideoId::Vimeo(76979871))
        );
        assert_eq!(
            video_id("http://vimeo.com/123/extra"),
            Some(VideoId::Vimeo(123))
        );
        assert_eq!(
            video_id("https://vimeo.com/channels/staffpicks"),
            Some(VideoId::Vimeo(0))
        );
    }

    #[test]
    fn test_parse_youtube_url() {
        let id = Some("dQw4w9WgXcQ".to_string());
        assert_eq!(parse_youtube_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ"), id);
        assert_eq!(parse_youtube_url("youtube.com/embed/dQw4w9WgXcQ?rel=0"), id);
        assert_eq!(parse_youtube_url("http://youtu.be/dQw4w9WgXcQ"), id);
        assert_eq!(
            parse_youtube_url("https://www.youtube.com/watch?feature=share&v=dQw4w9WgXcQ"),
            id
        );
        assert_eq!(parse_youtube_url("https://www.youtube.com/user/someone"), None);
    }

    #[test]
    fn test_youtube_video_id() {
        assert_eq!(
            video_id("https://www.youtube.com/v/dQw4w9WgXcQ").map(|id| id.to_string()),
            Some("dQw4w9WgXcQ".to_string())
        );
        assert_eq!(video_id("https://www.youtube.com/about"), None);
    }
}
