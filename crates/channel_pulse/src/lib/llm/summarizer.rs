use std::{fmt::Debug, future::Future};

/// Produces a text summary of one transcript.
///
/// The model identity is a property of the implementation (it comes from
/// runtime configuration), not of the trait.
pub trait Summarizer {
    type Error: Debug;

    fn summarize(
        &self,
        content: &str,
    ) -> impl Future<Output = Result<SummaryResponse, Self::Error>>;
}

#[derive(Debug)]
pub struct SummaryResponse {
    pub summary: String,
}
