pub mod builder;

use anyhow::Context;
use itertools::Itertools;
use transcript_store::{ArtifactKind, CheckpointStore, SummaryRecord, TranscriptRecord};

use crate::{
    yt::{TranscriptFetcher, VideoLister},
    Summarizer,
};

/// The two-stage transcript pipeline: ingest the latest videos of one
/// channel, then summarize every transcript that has no summary yet.
///
/// Both stages are idempotent over the checkpoint store and isolate
/// per-item failures: one video failing never stops the others.
pub struct Pipeline<C, L, F, S>
where
    C: CheckpointStore + 'static,
    L: VideoLister + 'static,
    F: TranscriptFetcher + 'static,
    S: Summarizer + 'static,
{
    pub(crate) store: C,
    pub(crate) lister: L,
    pub(crate) fetcher: F,
    pub(crate) summarizer: S,
    pub(crate) channel_id: String,
    pub(crate) max_videos: usize,
}

impl<C, L, F, S> Pipeline<C, L, F, S>
where
    C: CheckpointStore + 'static,
    L: VideoLister + 'static,
    F: TranscriptFetcher + 'static,
    S: Summarizer + 'static,
{
    /// Runs both stages sequentially.
    ///
    /// An aborted ingest stage (channel-wide listing failure) is logged and
    /// the summarize stage still runs over whatever transcripts exist from
    /// prior runs.
    #[tracing::instrument(skip(self))]
    pub async fn run(&self) -> anyhow::Result<()> {
        if let Err(e) = self.ingest().await {
            tracing::error!(error = ?e, channel_id = %self.channel_id, "Ingest stage aborted");
        }

        self.summarize().await
    }

    /// Stage one: fetch and checkpoint a transcript for every listed video
    /// id that has none yet, in listing order.
    #[tracing::instrument(skip(self))]
    pub async fn ingest(&self) -> anyhow::Result<()> {
        tracing::info!(channel_id = %self.channel_id, "Fetching latest videos");

        let video_ids = self
            .lister
            .list_videos(&self.channel_id, self.max_videos)
            .await
            .map_err(|e| {
                anyhow::anyhow!(
                    "Failed to list videos for channel {}: {e:?}",
                    self.channel_id
                )
            })?;

        tracing::info!(count = video_ids.len(), "Listed videos");

        for video_id in &video_ids {
            if self
                .store
                .exists(ArtifactKind::Transcript, video_id)
                .await
                .context("Failed to check for existing transcript")?
            {
                tracing::info!(%video_id, "Transcript already exists. Skipping");
                continue;
            }

            match self.ingest_video(video_id).await {
                Ok(()) => tracing::info!(%video_id, "Transcript written"),
                Err(e) => {
                    // isolated: no record is written, the loop moves on
                    tracing::error!(error = ?e, %video_id, "Could not ingest transcript")
                }
            }
        }

        Ok(())
    }

    async fn ingest_video(&self, video_id: &str) -> anyhow::Result<()> {
        let metadata = self
            .fetcher
            .fetch_metadata(video_id)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to fetch video metadata: {e:?}"))?;

        let captions = self
            .fetcher
            .fetch_captions(video_id)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to fetch captions: {e:?}"))?;

        // only now, with every input in hand, does a record come into being
        let record = TranscriptRecord {
            title: metadata.title,
            date: metadata.published_at.date_naive(),
            transcript: captions,
        };

        self.store.write_transcript(video_id, &record).await
    }

    /// Stage two: summarize every checkpointed transcript that has no
    /// summary yet.
    #[tracing::instrument(skip(self))]
    pub async fn summarize(&self) -> anyhow::Result<()> {
        let transcript_ids = self
            .store
            .list(ArtifactKind::Transcript)
            .await
            .context("Failed to list existing transcripts")?;

        for video_id in &transcript_ids {
            if self
                .store
                .exists(ArtifactKind::Summary, video_id)
                .await
                .context("Failed to check for existing summary")?
            {
                tracing::info!(%video_id, "Summary already exists. Skipping");
                continue;
            }

            match self.summarize_video(video_id).await {
                Ok(()) => tracing::info!(%video_id, "Summary written"),
                Err(e) => {
                    tracing::error!(error = ?e, %video_id, "Could not summarize transcript")
                }
            }
        }

        Ok(())
    }

    async fn summarize_video(&self, video_id: &str) -> anyhow::Result<()> {
        let transcript = self.store.read_transcript(video_id).await?;

        let text = transcript.transcript.iter().join(" ");

        let response = self
            .summarizer
            .summarize(&text)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to summarize transcript: {e:?}"))?;

        let record = SummaryRecord {
            title: transcript.title,
            date: transcript.date,
            summary: response.summary.trim().to_string(),
        };

        self.store.write_summary(video_id, &record).await
    }
}
