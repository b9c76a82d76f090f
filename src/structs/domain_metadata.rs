use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainMetadata {
    pub host: String,
    pub https: bool,
    pub status_code: u16,
    pub response_time_ms: u64,
}
