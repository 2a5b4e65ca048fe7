use std::{
    collections::{HashMap, HashSet},
    sync::{Arc, Mutex},
};

use channel_pulse::yt::{TranscriptFetcher, VideoMetadata};
use chrono::{DateTime, Utc};

#[derive(Clone)]
pub struct MockTranscriptFetcher {
    pub videos: HashMap<String, (VideoMetadata, Vec<String>)>,
    pub unavailable_captions: HashSet<String>,
    pub metadata_calls: Arc<Mutex<Vec<String>>>,
    pub caption_calls: Arc<Mutex<Vec<String>>>,
}

impl Default for MockTranscriptFetcher {
    fn default() -> Self {
        Self {
            videos: HashMap::new(),
            unavailable_captions: HashSet::new(),
            metadata_calls: Arc::new(Mutex::new(Vec::new())),
            caption_calls: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl MockTranscriptFetcher {
    pub fn with_video(
        mut self,
        video_id: &str,
        title: &str,
        published_at: &str,
        captions: &[&str],
    ) -> Self {
        let metadata = VideoMetadata {
            title: title.to_string(),
            published_at: published_at.parse::<DateTime<Utc>>().unwrap(),
        };
        self.videos.insert(
            video_id.to_string(),
            (metadata, captions.iter().map(|c| c.to_string()).collect()),
        );
        self
    }

    /// Metadata resolves but caption retrieval reports "unavailable".
    pub fn with_unavailable_captions(mut self, video_id: &str) -> Self {
        self.unavailable_captions.insert(video_id.to_string());
        self
    }
}

impl TranscriptFetcher for MockTranscriptFetcher {
    type Error = anyhow::Error;

    async fn fetch_metadata(&self, video_id: &str) -> anyhow::Result<VideoMetadata> {
        self.metadata_calls
            .lock()
            .unwrap()
            .push(video_id.to_string());
        self.videos
            .get(video_id)
            .map(|(metadata, _)| metadata.clone())
            .ok_or_else(|| anyhow::anyhow!("No metadata for video {}", video_id))
    }

    async fn fetch_captions(&self, video_id: &str) -> anyhow::Result<Vec<String>> {
        self.caption_calls
            .lock()
            .unwrap()
            .push(video_id.to_string());
        if self.unavailable_captions.contains(video_id) {
            return Err(anyhow::anyhow!(
                "No caption track available for video {}",
                video_id
            ));
        }
        self.videos
            .get(video_id)
            .map(|(_, captions)| captions.clone())
            .ok_or_else(|| anyhow::anyhow!("No captions for video {}", video_id))
    }
}
