#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A scraped document or JSON blob did not have the expected structure.
    #[error("Parse error: {0}")]
    ParseError(&'static str),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
