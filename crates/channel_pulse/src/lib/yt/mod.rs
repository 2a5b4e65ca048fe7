pub mod client;

use std::{fmt::Debug, future::Future};

use chrono::{DateTime, Utc};

pub use client::{YouTubeClient, YouTubeError};

/// Title and publish timestamp of one video, as reported by the hosting
/// service at ingestion time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoMetadata {
    pub title: String,
    pub published_at: DateTime<Utc>,
}

/// Lists the most recently published videos of a channel.
pub trait VideoLister {
    type Error: Debug;

    /// Returns up to `max_results` video ids, ordered by publish date
    /// descending. A failure here is channel-wide.
    fn list_videos(
        &self,
        channel_id: &str,
        max_results: usize,
    ) -> impl Future<Output = Result<Vec<String>, Self::Error>>;
}

/// Retrieves per-video metadata and caption lines.
pub trait TranscriptFetcher {
    type Error: Debug;

    fn fetch_metadata(
        &self,
        video_id: &str,
    ) -> impl Future<Output = Result<VideoMetadata, Self::Error>>;

    /// Ordered caption lines for one video. An empty list is a valid
    /// transcript; a video without any caption track is an error.
    fn fetch_captions(
        &self,
        video_id: &str,
    ) -> impl Future<Output = Result<Vec<String>, Self::Error>>;
}
