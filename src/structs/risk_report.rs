use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::enums::recommendation::Recommendation;

/// Published report shape. This is a compatibility contract: keys are
/// never omitted, findings of analyzers that did not return `ok` are
/// serialized as explicit nulls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskReport {
    pub url: String,
    pub risk_score: f64,
    pub analysis_timestamp: DateTime<Utc>,
    pub findings: ReportFindings,
    pub recommendation: Recommendation,
    pub confidence: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportFindings {
    pub content_analysis: Option<Value>,
    pub visual_analysis: Option<Value>,
    pub reputation_check: Option<Value>,
}
