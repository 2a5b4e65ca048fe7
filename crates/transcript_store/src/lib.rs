//! # Transcript Store
//!
//! This crate provides durable, existence-checked storage for the artifacts
//! produced by the transcript pipeline: one JSON file per video per artifact
//! kind (transcript or summary).
//!
//! The mere presence of an artifact marks its unit of work as done, which is
//! what makes repeated pipeline runs cheap: callers check [`CheckpointStore::exists`]
//! before doing any fetching or summarization.

mod checkpoint;
mod domain;

pub use checkpoint::json_fs::JsonFsStore;
pub use checkpoint::{ArtifactKind, CheckpointStore};
pub use domain::{SummaryRecord, TranscriptRecord};
