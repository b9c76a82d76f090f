use thiserror::Error;

/// Fetch failures are fatal to the whole run: without page content
/// there is nothing for the analyzers to evaluate.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("connection to '{url}' failed: {reason}")]
    Connection { url: String, reason: String },

    #[error("request to '{url}' timed out after {seconds}s")]
    Timeout { url: String, seconds: u64 },

    #[error("'{url}' answered with HTTP {status}")]
    HttpStatus { url: String, status: u16 },
}
