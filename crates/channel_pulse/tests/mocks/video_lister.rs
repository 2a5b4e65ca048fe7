use std::sync::{Arc, Mutex};

use channel_pulse::yt::VideoLister;

#[derive(Clone)]
pub struct MockVideoLister {
    pub video_ids: Vec<String>,
    pub calls: Arc<Mutex<usize>>,
    pub fail_with: Option<String>,
}

impl MockVideoLister {
    pub fn new(video_ids: &[&str]) -> Self {
        Self {
            video_ids: video_ids.iter().map(|id| id.to_string()).collect(),
            calls: Arc::new(Mutex::new(0)),
            fail_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            video_ids: Vec::new(),
            calls: Arc::new(Mutex::new(0)),
            fail_with: Some(msg.to_string()),
        }
    }
}

impl VideoLister for MockVideoLister {
    type Error = anyhow::Error;

    async fn list_videos(
        &self,
        _channel_id: &str,
        max_results: usize,
    ) -> anyhow::Result<Vec<String>> {
        *self.calls.lock().unwrap() += 1;
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        Ok(self.video_ids.iter().take(max_results).cloned().collect())
    }
}
