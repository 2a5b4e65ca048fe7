use std::sync::{Arc, Mutex};

use channel_pulse::{Summarizer, SummaryResponse};

#[derive(Clone)]
pub struct MockSummarizer {
    pub fixed_summary: Option<String>,
    pub echo_prefix: Option<String>,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<String>,
}

impl MockSummarizer {
    pub fn new(summary: &str) -> Self {
        Self {
            fixed_summary: Some(summary.to_string()),
            echo_prefix: None,
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    /// Responds with `prefix + input`, so tests can see exactly what was sent.
    pub fn echoing(prefix: &str) -> Self {
        Self {
            fixed_summary: None,
            echo_prefix: Some(prefix.to_string()),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            fixed_summary: None,
            echo_prefix: None,
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(msg.to_string()),
        }
    }
}

impl Summarizer for MockSummarizer {
    type Error = anyhow::Error;

    async fn summarize(&self, content: &str) -> anyhow::Result<SummaryResponse> {
        self.calls.lock().unwrap().push(content.to_string());
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        let summary = match (&self.fixed_summary, &self.echo_prefix) {
            (Some(fixed), _) => fixed.clone(),
            (None, Some(prefix)) => format!("{prefix}{content}"),
            (None, None) => String::new(),
        };
        Ok(SummaryResponse { summary })
    }
}
