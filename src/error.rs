use thiserror::Error;

pub type InsightResult<T> = Result<T, InsightError>;

/// Failures of the external summarization service.
#[derive(Error, Debug)]
pub enum InsightError {
    #[error("no API key configured (set GEMINI_API_KEY or API_KEY)")]
    MissingApiKey,

    #[error("failed to reach summarization service: {0}")]
    Http(#[from] reqwest::Error),

    #[error("summarization service returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("failed to encode metrics snapshot: {0}")]
    Json(#[from] serde_json::Error),
}
