//! Wire types for the YouTube Data API and for the caption data embedded in
//! a video's watch page.

use chrono::{DateTime, Utc};
use serde::Deserialize;

// ─── Data API: search.list ───────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SearchListResponse {
    #[serde(default)]
    pub items: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
pub struct SearchResult {
    pub id: SearchResultId,
}

/// `search.list` can return channels and playlists alongside videos, so
/// `videoId` is optional here.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultId {
    #[serde(default)]
    pub video_id: Option<String>,
}

// ─── Data API: videos.list ───────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct VideoListResponse {
    #[serde(default)]
    pub items: Vec<VideoResult>,
}

#[derive(Debug, Deserialize)]
pub struct VideoResult {
    pub snippet: VideoSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSnippet {
    pub title: String,
    pub published_at: DateTime<Utc>,
}

// ─── Watch page: ytInitialPlayerResponse captions ────────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionTrack {
    pub base_url: String,
    pub language_code: String,
    /// `"asr"` marks an auto-generated track.
    #[serde(default)]
    pub kind: Option<String>,
}

// ─── Timedtext `fmt=json3` payload ───────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct Json3Transcript {
    #[serde(default)]
    pub events: Vec<CaptionEvent>,
}

#[derive(Debug, Deserialize)]
pub struct CaptionEvent {
    #[serde(default)]
    pub segs: Option<Vec<CaptionSeg>>,
}

#[derive(Debug, Deserialize)]
pub struct CaptionSeg {
    pub utf8: String,
}
