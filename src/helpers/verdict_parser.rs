use serde_json::{json, Value};

use crate::helpers::json_extractor::JsonExtractor;
use crate::structs::analyzer_verdict::AnalyzerVerdict;

const HIGH_RISK_TERMS: &[&str] = &["high risk", "phishing", "suspicious", "fake", "scam"];
const LOW_RISK_TERMS: &[&str] = &["legitimate", "safe", "low risk", "trusted"];

pub struct VerdictParser;

impl VerdictParser {
    /// Full parsing path for a model completion: JSON extraction first,
    /// keyword scoring when that fails.
    pub fn from_completion(completion: &str) -> AnalyzerVerdict {
        match JsonExtractor::extract_object(completion).and_then(|value| Self::from_json(&value)) {
            Some(verdict) => verdict,
            None => {
                log::warn!("⚠️ Completion was not parseable JSON, falling back to keyword scoring");
                Self::from_text(completion)
            }
        }
    }

    /// Maps a well-formed completion object onto a verdict. Returns
    /// `None` when a numeric field is missing so the caller can fall
    /// back to keyword scoring.
    pub fn from_json(value: &Value) -> Option<AnalyzerVerdict> {
        let sub_score = value.get("risk_score")?.as_f64()?;
        let confidence = value.get("confidence")?.as_f64()?;

        let findings = json!({
            "indicators": value.get("indicators").cloned().unwrap_or_else(|| json!([])),
            "legitimate_indicators": value.get("legitimate_indicators").cloned().unwrap_or_else(|| json!([])),
            "brand_impersonation": value.get("brand_impersonation").cloned().unwrap_or(Value::Null),
            "explanation": value.get("explanation").cloned().unwrap_or(Value::Null),
        });

        Some(AnalyzerVerdict::new(sub_score, confidence, findings))
    }

    /// Last-resort scoring for completions that never parsed as JSON.
    /// Keyword presence decides the band; the low confidence tells the
    /// fusion step to discount it.
    pub fn from_text(completion: &str) -> AnalyzerVerdict {
        let lowered = completion.to_lowercase();
        let sub_score = if HIGH_RISK_TERMS.iter().any(|term| lowered.contains(term)) {
            8.0
        } else if LOW_RISK_TERMS.iter().any(|term| lowered.contains(term)) {
            2.0
        } else {
            5.0
        };

        let findings = json!({
            "indicators": ["AI analysis inconclusive"],
            "legitimate_indicators": [],
            "brand_impersonation": Value::Null,
            "explanation": "AI response could not be parsed properly",
        });

        AnalyzerVerdict::new(sub_score, 0.6, findings)
    }
}
