use transcript_store::CheckpointStore;

use crate::{
    yt::{TranscriptFetcher, VideoLister},
    Pipeline, Summarizer,
};

/// Type-state builder for [`Pipeline`]: each seam starts as `()` and
/// `build` is only available once all four are filled in.
pub struct PipelineBuilder<C = (), L = (), F = (), S = ()> {
    store: C,
    lister: L,
    fetcher: F,
    summarizer: S,
    channel_id: String,
    max_videos: usize,
}

impl PipelineBuilder {
    pub fn new(channel_id: impl Into<String>) -> Self {
        Self {
            store: (),
            lister: (),
            fetcher: (),
            summarizer: (),
            channel_id: channel_id.into(),
            max_videos: 10,
        }
    }
}

impl<C, L, F, S> PipelineBuilder<C, L, F, S> {
    pub fn store<C2: CheckpointStore + 'static>(self, store: C2) -> PipelineBuilder<C2, L, F, S> {
        PipelineBuilder {
            store,
            lister: self.lister,
            fetcher: self.fetcher,
            summarizer: self.summarizer,
            channel_id: self.channel_id,
            max_videos: self.max_videos,
        }
    }

    pub fn lister<L2: VideoLister + 'static>(self, lister: L2) -> PipelineBuilder<C, L2, F, S> {
        PipelineBuilder {
            store: self.store,
            lister,
            fetcher: self.fetcher,
            summarizer: self.summarizer,
            channel_id: self.channel_id,
            max_videos: self.max_videos,
        }
    }

    pub fn fetcher<F2: TranscriptFetcher + 'static>(
        self,
        fetcher: F2,
    ) -> PipelineBuilder<C, L, F2, S> {
        PipelineBuilder {
            store: self.store,
            lister: self.lister,
            fetcher,
            summarizer: self.summarizer,
            channel_id: self.channel_id,
            max_videos: self.max_videos,
        }
    }

    pub fn summarizer<S2: Summarizer + 'static>(
        self,
        summarizer: S2,
    ) -> PipelineBuilder<C, L, F, S2> {
        PipelineBuilder {
            store: self.store,
            lister: self.lister,
            fetcher: self.fetcher,
            summarizer,
            channel_id: self.channel_id,
            max_videos: self.max_videos,
        }
    }

    pub fn max_videos(mut self, max_videos: usize) -> Self {
        self.max_videos = max_videos;
        self
    }
}

impl<C, L, F, S> PipelineBuilder<C, L, F, S>
where
    C: CheckpointStore + 'static,
    L: VideoLister + 'static,
    F: TranscriptFetcher + 'static,
    S: Summarizer + 'static,
{
    pub fn build(self) -> Pipeline<C, L, F, S> {
        Pipeline {
            store: self.store,
            lister: self.lister,
            fetcher: self.fetcher,
            summarizer: self.summarizer,
            channel_id: self.channel_id,
            max_videos: self.max_videos,
        }
    }
}
