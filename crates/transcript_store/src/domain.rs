use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The full transcript of one video at time of ingestion.
///
/// Serialized with the `name`/`date`/`transcript` field names the artifact
/// files use on disk; `date` round-trips as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptRecord {
    #[serde(rename = "name")]
    pub title: String,
    pub date: NaiveDate,
    pub transcript: Vec<String>,
}

/// A summary derived from exactly one [`TranscriptRecord`], reusing its
/// title and publish date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRecord {
    pub title: String,
    pub date: NaiveDate,
    pub summary: String,
}
