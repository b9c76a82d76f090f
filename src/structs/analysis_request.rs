use chrono::{DateTime, Utc};
use uuid::Uuid;
use crate::structs::run_options::RunOptions;

#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub id: Uuid,
    pub url: String,
    pub requested_at: DateTime<Utc>,
    pub options: RunOptions,
}

impl AnalysisRequest {
    pub fn new(url: String, options: RunOptions) -> Self {
        Self {
            id: Uuid::new_v4(),
            url,
            requested_at: Utc::now(),
            options,
        }
    }
}
