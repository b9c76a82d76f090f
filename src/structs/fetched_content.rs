use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::structs::domain_metadata::DomainMetadata;
use crate::structs::form_info::FormInfo;

/// Snapshot of a fetched page, the single input shared by all analyzers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchedContent {
    /// Final URL after redirects.
    pub url: String,
    pub title: Option<String>,
    pub html: String,
    /// Visible text with tags stripped and whitespace collapsed.
    pub text: String,
    pub meta_description: Option<String>,
    pub meta_keywords: Vec<String>,
    pub links: Vec<String>,
    pub forms: Vec<FormInfo>,
    /// Path to a pre-captured screenshot, when the caller supplied one.
    pub screenshot_ref: Option<String>,
    pub domain: DomainMetadata,
    pub fetched_at: DateTime<Utc>,
}
