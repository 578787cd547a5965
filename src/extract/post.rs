use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::selectors::{
    AUTHOR_REGION_SEL, CAPTION_SEL, POSTED_AT_SEL, USERNAME_SEL, VIDEO_SEL, VIDEO_SOURCE_SEL,
};
use crate::document::{attr, text, Document};

/// A single byte (post).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    /// Canonical post URL.
    pub url: String,
    #[serde(rename = "authorUsername")]
    pub author_username: String,
    /// Absolute profile URL of the author; empty when the page names no author.
    #[serde(rename = "authorURL")]
    pub author_url: String,
    pub caption: String,
    #[serde(rename = "videoURL")]
    pub video_url: String,
    #[serde(rename = "thumbnailURL")]
    pub thumbnail_url: String,
    #[serde(rename = "postedAt")]
    pub posted_at: Option<DateTime<Utc>>,
}

/// Build a [`Post`] from a parsed post page.
#[must_use]
pub fn extract_post(document: &Document, id: &str, url: &str, base_url: &str) -> Post {
    let root = Some(document.root());
    let author = document.first(&AUTHOR_REGION_SEL);

    let author_username = text(author, &USERNAME_SEL);
    let author_url = if author_username.is_empty() {
        String::new()
    } else {
        format!("{base_url}/@{author_username}")
    };

    let mut video_url = attr(root, &VIDEO_SEL, "src");
    if video_url.is_empty() {
        video_url = attr(root, &VIDEO_SOURCE_SEL, "src");
    }

    Post {
        id: id.to_string(),
        url: url.to_string(),
        author_username,
        author_url,
        caption: text(root, &CAPTION_SEL),
        video_url,
        thumbnail_url: attr(root, &VIDEO_SEL, "poster"),
        posted_at: parse_timestamp(&attr(root, &POSTED_AT_SEL, "datetime")),
    }
}

fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
