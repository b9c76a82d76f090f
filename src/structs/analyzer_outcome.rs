use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::enums::analyzer_kind::AnalyzerKind;
use crate::enums::outcome_status::OutcomeStatus;
use crate::structs::analyzer_verdict::AnalyzerVerdict;

/// The supervisor's answer for one analyzer. Constructors keep the
/// shape honest: verdict fields exist exactly when status is `ok`,
/// and every non-`ok` outcome names its reason.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerOutcome {
    pub source: AnalyzerKind,
    pub status: OutcomeStatus,
    pub sub_score: Option<f64>,
    pub confidence: Option<f64>,
    pub findings: Option<Value>,
    pub error_detail: Option<String>,
    pub elapsed_ms: u64,
}

impl AnalyzerOutcome {
    pub fn ok(source: AnalyzerKind, verdict: AnalyzerVerdict, elapsed_ms: u64) -> Self {
        Self {
            source,
            status: OutcomeStatus::Ok,
            sub_score: Some(verdict.sub_score),
            confidence: Some(verdict.confidence),
            findings: Some(verdict.findings),
            error_detail: None,
            elapsed_ms,
        }
    }

    pub fn timeout(source: AnalyzerKind, detail: &str, elapsed_ms: u64) -> Self {
        Self::unusable(source, OutcomeStatus::Timeout, detail, elapsed_ms)
    }

    pub fn error(source: AnalyzerKind, detail: &str, elapsed_ms: u64) -> Self {
        Self::unusable(source, OutcomeStatus::Error, detail, elapsed_ms)
    }

    pub fn skipped(source: AnalyzerKind, detail: &str, elapsed_ms: u64) -> Self {
        Self::unusable(source, OutcomeStatus::Skipped, detail, elapsed_ms)
    }

    fn unusable(source: AnalyzerKind, status: OutcomeStatus, detail: &str, elapsed_ms: u64) -> Self {
        Self {
            source,
            status,
            sub_score: None,
            confidence: None,
            findings: None,
            error_detail: Some(detail.to_string()),
            elapsed_ms,
        }
    }

    pub fn is_usable(&self) -> bool {
        self.status.is_usable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ok_outcome_carries_full_verdict() {
        let verdict = AnalyzerVerdict::new(7.0, 0.8, json!({"indicators": ["login form"]}));
        let outcome = AnalyzerOutcome::ok(AnalyzerKind::Content, verdict, 42);

        assert!(outcome.is_usable());
        assert_eq!(outcome.sub_score, Some(7.0));
        assert_eq!(outcome.confidence, Some(0.8));
        assert!(outcome.findings.is_some());
        assert!(outcome.error_detail.is_none());
    }

    #[test]
    fn test_failed_outcomes_carry_no_verdict_fields() {
        let outcome = AnalyzerOutcome::timeout(AnalyzerKind::Visual, "deadline elapsed", 20_000);

        assert!(!outcome.is_usable());
        assert_eq!(outcome.status, OutcomeStatus::Timeout);
        assert!(outcome.sub_score.is_none());
        assert!(outcome.confidence.is_none());
        assert!(outcome.findings.is_none());
        assert_eq!(outcome.error_detail.as_deref(), Some("deadline elapsed"));
    }
}
