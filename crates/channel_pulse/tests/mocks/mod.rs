pub mod summarizer;
pub mod transcript_fetcher;
pub mod video_lister;
