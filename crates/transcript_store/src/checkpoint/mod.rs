use std::{collections::BTreeSet, future::Future};

use crate::{SummaryRecord, TranscriptRecord};

pub mod json_fs;

/// The two artifact families a video id can be checkpointed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Transcript,
    Summary,
}

/// Durable, existence-checked artifact storage keyed by video id.
///
/// Records are write-once: implementations persist a record so that a later
/// [`CheckpointStore::exists`] call reports it, and never expose a partially
/// written artifact. The pipeline is the single writer; no locking is layered
/// on top of this trait.
pub trait CheckpointStore {
    fn exists(
        &self,
        kind: ArtifactKind,
        video_id: &str,
    ) -> impl Future<Output = anyhow::Result<bool>> + Send;

    fn write_transcript(
        &self,
        video_id: &str,
        record: &TranscriptRecord,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;

    fn write_summary(
        &self,
        video_id: &str,
        record: &SummaryRecord,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;

    fn read_transcript(
        &self,
        video_id: &str,
    ) -> impl Future<Output = anyhow::Result<TranscriptRecord>> + Send;

    fn read_summary(
        &self,
        video_id: &str,
    ) -> impl Future<Output = anyhow::Result<SummaryRecord>> + Send;

    /// All video ids with a fully written record of `kind`, in sorted order.
    fn list(
        &self,
        kind: ArtifactKind,
    ) -> impl Future<Output = anyhow::Result<BTreeSet<String>>> + Send;
}
