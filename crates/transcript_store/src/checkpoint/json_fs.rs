use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    checkpoint::{ArtifactKind, CheckpointStore},
    SummaryRecord, TranscriptRecord,
};

const SUMMARY_SUFFIX: &str = "_summary.json";
const TRANSCRIPT_SUFFIX: &str = ".json";

/// Directory-backed [`CheckpointStore`]: `{id}.json` for transcripts,
/// `{id}_summary.json` for summaries.
///
/// Writes go to a `.tmp` sibling first and are renamed into place, so a
/// crash mid-write never leaves an artifact that `exists` would report
/// as present.
#[derive(Debug, Clone)]
pub struct JsonFsStore {
    root: PathBuf,
}

impl JsonFsStore {
    /// Opens the store rooted at `root`, creating the directory if needed.
    pub async fn init(root: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let root = root.into();

        tokio::fs::create_dir_all(&root)
            .await
            .inspect_err(|e| tracing::error!(error = ?e, root = ?root, "Failed to create artifact directory"))
            .context("Failed to create artifact directory")?;

        Ok(JsonFsStore { root })
    }

    fn artifact_path(&self, kind: ArtifactKind, video_id: &str) -> PathBuf {
        match kind {
            ArtifactKind::Transcript => self.root.join(format!("{video_id}{TRANSCRIPT_SUFFIX}")),
            ArtifactKind::Summary => self.root.join(format!("{video_id}{SUMMARY_SUFFIX}")),
        }
    }

    async fn write_json<T: Serialize>(&self, path: &Path, record: &T) -> anyhow::Result<()> {
        let bytes = serde_json::to_vec_pretty(record).context("Failed to serialize record")?;

        // all-or-nothing publish: write a sibling temp file, then rename
        let tmp_path = path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, &bytes)
            .await
            .with_context(|| format!("Failed to write {}", tmp_path.display()))?;
        tokio::fs::rename(&tmp_path, path)
            .await
            .with_context(|| format!("Failed to publish {}", path.display()))?;

        Ok(())
    }

    async fn read_json<T: DeserializeOwned>(&self, path: &Path) -> anyhow::Result<T> {
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_slice(&bytes)
            .with_context(|| format!("Malformed artifact at {}", path.display()))
    }
}

impl CheckpointStore for JsonFsStore {
    async fn exists(&self, kind: ArtifactKind, video_id: &str) -> anyhow::Result<bool> {
        let path = self.artifact_path(kind, video_id);
        tokio::fs::try_exists(&path)
            .await
            .with_context(|| format!("Failed to stat {}", path.display()))
    }

    async fn write_transcript(
        &self,
        video_id: &str,
        record: &TranscriptRecord,
    ) -> anyhow::Result<()> {
        let path = self.artifact_path(ArtifactKind::Transcript, video_id);
        self.write_json(&path, record).await
    }

    async fn write_summary(&self, video_id: &str, record: &SummaryRecord) -> anyhow::Result<()> {
        let path = self.artifact_path(ArtifactKind::Summary, video_id);
        self.write_json(&path, record).await
    }

    async fn read_transcript(&self, video_id: &str) -> anyhow::Result<TranscriptRecord> {
        let path = self.artifact_path(ArtifactKind::Transcript, video_id);
        self.read_json(&path).await
    }

    async fn read_summary(&self, video_id: &str) -> anyhow::Result<SummaryRecord> {
        let path = self.artifact_path(ArtifactKind::Summary, video_id);
        self.read_json(&path).await
    }

    async fn list(&self, kind: ArtifactKind) -> anyhow::Result<BTreeSet<String>> {
        let mut ids = BTreeSet::new();

        let mut entries = tokio::fs::read_dir(&self.root)
            .await
            .context("Failed to read artifact directory")?;

        while let Some(entry) = entries.next_entry().await? {
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                continue;
            };

            let id = match kind {
                ArtifactKind::Transcript => name
                    .strip_suffix(TRANSCRIPT_SUFFIX)
                    .filter(|_| !name.ends_with(SUMMARY_SUFFIX)),
                ArtifactKind::Summary => name.strip_suffix(SUMMARY_SUFFIX),
            };

            if let Some(id) = id {
                ids.insert(id.to_string());
            }
        }

        Ok(ids)
    }
}
