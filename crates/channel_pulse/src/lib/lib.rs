mod error;
mod llm;
pub mod parser;
mod pipeline;
pub mod tracing;
pub mod types;
pub mod yt;

pub use error::Error;
pub use llm::openai;
pub use llm::summarizer::{Summarizer, SummaryResponse};
pub use pipeline::{builder::PipelineBuilder, Pipeline};
