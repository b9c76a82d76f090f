use thiserror::Error;

/// Failure classes an analyzer may surface. The supervisor keys its
/// retry decision off `is_transient`; `MissingInput` is neither retried
/// nor counted as an error, it marks the analyzer as skipped.
#[derive(Debug, Clone, Error)]
pub enum AnalyzerFailure {
    #[error("network error: {0}")]
    Network(String),

    #[error("rate limited: {0}")]
    RateLimited(String),

    #[error("authentication failed: {0}")]
    Authentication(String),

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("missing input: {0}")]
    MissingInput(String),
}

impl AnalyzerFailure {
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Network(_) | Self::RateLimited(_))
    }
}
