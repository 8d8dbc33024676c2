//! Video ID, thumbnail and title lookups

use anyhow::Result;

use crate::video::video_id;
use crate::Site;

/// What to look up for a video URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    Id,
    Thumbnail,
    Title,
}

/// Look up a video property and print it
pub async fn run(site: &Site, lookup: Lookup, url: &str) -> Result<()> {
    let output = match lookup {
        Lookup::Id => video_id(url).map(|id| id.to_string()).unwrap_or_default(),
        Lookup::Thumbnail => site.video_client()?.thumbnail(url).await,
        Lookup::Title => site.video_client()?.title(url).await,
    };

    if output.is_empty() {
        tracing::warn!("Nothing found for {}", url);
    }
    println!("{}", output);
    Ok(())
}
