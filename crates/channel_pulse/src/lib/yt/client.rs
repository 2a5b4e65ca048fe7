use reqwest::Client;
use serde_json::Value;

use crate::{
    parser::{caption_lines, parse_caption_tracks, PlayerHtmlDocument},
    types::{CaptionTrack, Json3Transcript, SearchListResponse, VideoListResponse},
    yt::{TranscriptFetcher, VideoLister, VideoMetadata},
};

/// Client for the YouTube Data API plus the watch-page caption transport.
///
/// One instance serves both the [`VideoLister`] and [`TranscriptFetcher`]
/// seams; it is `Clone` so a binary can hand it to both.
#[derive(Clone)]
pub struct YouTubeClient {
    client: Client,
    api_key: String,
    api_base_url: String,
    watch_base_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum YouTubeError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
    #[error("No caption track available for video {video_id}")]
    CaptionsUnavailable { video_id: String },
    #[error("No metadata returned for video {video_id}")]
    MissingVideo { video_id: String },
    #[error(transparent)]
    Parse(#[from] crate::error::Error),
}

impl YouTubeClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            api_base_url: "https://www.googleapis.com/youtube/v3".into(),
            watch_base_url: "https://www.youtube.com/watch".into(),
        }
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    pub fn with_watch_base_url(mut self, url: impl Into<String>) -> Self {
        self.watch_base_url = url.into();
        self
    }

    async fn send_search_request(
        &self,
        channel_id: &str,
        max_results: usize,
    ) -> Result<SearchListResponse, YouTubeError> {
        let resp = self
            .client
            .get(format!("{}/search", self.api_base_url))
            .query(&[
                ("part", "id"),
                ("channelId", channel_id),
                ("order", "date"),
                ("maxResults", &max_results.to_string()),
                ("key", &self.api_key),
            ])
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(YouTubeError::Api { status, message });
        }

        Ok(resp.json::<SearchListResponse>().await?)
    }

    async fn send_videos_request(
        &self,
        video_id: &str,
    ) -> Result<VideoListResponse, YouTubeError> {
        let resp = self
            .client
            .get(format!("{}/videos", self.api_base_url))
            .query(&[
                ("part", "snippet"),
                ("id", video_id),
                ("key", &self.api_key),
            ])
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(YouTubeError::Api { status, message });
        }

        Ok(resp.json::<VideoListResponse>().await?)
    }

    /// Loads the watch page of one video.
    async fn fetch_watch_page(&self, video_id: &str) -> Result<PlayerHtmlDocument, YouTubeError> {
        let html = self
            .client
            .get(&self.watch_base_url)
            .query(&[("v", video_id)])
            .header("Accept-Language", "en-US,en;q=0.9")
            .send()
            .await?
            .text()
            .await?;

        Ok(html.into())
    }

    async fn fetch_timedtext(&self, track: &CaptionTrack) -> Result<Json3Transcript, YouTubeError> {
        let resp = self
            .client
            .get(format!("{}&fmt=json3", track.base_url))
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(YouTubeError::Api { status, message });
        }

        Ok(resp.json::<Json3Transcript>().await?)
    }
}

/// Prefers a human-made track over an auto-generated (`asr`) one, falling
/// back to whatever is first.
fn select_caption_track(tracks: &[CaptionTrack]) -> Option<&CaptionTrack> {
    tracks
        .iter()
        .find(|track| track.kind.as_deref() != Some("asr"))
        .or_else(|| tracks.first())
}

impl VideoLister for YouTubeClient {
    type Error = YouTubeError;

    #[tracing::instrument(skip(self))]
    async fn list_videos(
        &self,
        channel_id: &str,
        max_results: usize,
    ) -> Result<Vec<String>, Self::Error> {
        let response = self.send_search_request(channel_id, max_results).await?;

        let video_ids = response
            .items
            .into_iter()
            .filter_map(|item| item.id.video_id)
            .collect();

        Ok(video_ids)
    }
}

impl TranscriptFetcher for YouTubeClient {
    type Error = YouTubeError;

    #[tracing::instrument(skip(self))]
    async fn fetch_metadata(&self, video_id: &str) -> Result<VideoMetadata, Self::Error> {
        let response = self.send_videos_request(video_id).await?;

        let video = response
            .items
            .into_iter()
            .next()
            .ok_or_else(|| YouTubeError::MissingVideo {
                video_id: video_id.to_string(),
            })?;

        Ok(VideoMetadata {
            title: video.snippet.title,
            published_at: video.snippet.published_at,
        })
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_captions(&self, video_id: &str) -> Result<Vec<String>, Self::Error> {
        let doc = self.fetch_watch_page(video_id).await?;
        let json = doc.to_json::<Value>()?;

        let tracks = parse_caption_tracks(&json)?;
        let track =
            select_caption_track(&tracks).ok_or_else(|| YouTubeError::CaptionsUnavailable {
                video_id: video_id.to_string(),
            })?;

        let transcript = self.fetch_timedtext(track).await?;
        Ok(caption_lines(&transcript))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(language_code: &str, kind: Option<&str>) -> CaptionTrack {
        CaptionTrack {
            base_url: format!("https://example.com/tt?lang={language_code}"),
            language_code: language_code.to_string(),
            kind: kind.map(str::to_string),
        }
    }

    #[test]
    fn test_select_prefers_human_track_over_asr() {
        let tracks = vec![track("en", Some("asr")), track("en", None)];
        let selected = select_caption_track(&tracks).unwrap();
        assert!(selected.kind.is_none());
    }

    #[test]
    fn test_select_falls_back_to_asr_only_track() {
        let tracks = vec![track("en", Some("asr"))];
        let selected = select_caption_track(&tracks).unwrap();
        assert_eq!(selected.kind.as_deref(), Some("asr"));
    }

    #[test]
    fn test_select_with_no_tracks() {
        assert!(select_caption_track(&[]).is_none());
    }
}
