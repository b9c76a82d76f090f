use serde::{Deserialize, Serialize};
use serde_json::Value;

/// What a healthy analyzer returns. Bounds are enforced here so no
/// out-of-range value can reach the fusion step, whatever the backend
/// responded with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerVerdict {
    pub sub_score: f64,
    pub confidence: f64,
    pub findings: Value,
}

impl AnalyzerVerdict {
    pub fn new(sub_score: f64, confidence: f64, findings: Value) -> Self {
        Self {
            sub_score: clamp_finite(sub_score, 0.0, 10.0),
            confidence: clamp_finite(confidence, 0.0, 1.0),
            findings: if findings.is_object() {
                findings
            } else {
                Value::Object(serde_json::Map::new())
            },
        }
    }
}

fn clamp_finite(value: f64, min: f64, max: f64) -> f64 {
    if value.is_finite() {
        value.clamp(min, max)
    } else {
        min
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_out_of_range_values_are_clamped() {
        let verdict = AnalyzerVerdict::new(14.0, 1.7, json!({"indicators": []}));
        assert_eq!(verdict.sub_score, 10.0);
        assert_eq!(verdict.confidence, 1.0);

        let verdict = AnalyzerVerdict::new(-2.0, -0.5, json!({}));
        assert_eq!(verdict.sub_score, 0.0);
        assert_eq!(verdict.confidence, 0.0);
    }

    #[test]
    fn test_non_finite_values_collapse_to_floor() {
        let verdict = AnalyzerVerdict::new(f64::NAN, f64::INFINITY, json!({}));
        assert_eq!(verdict.sub_score, 0.0);
        assert_eq!(verdict.confidence, 0.0);
    }

    #[test]
    fn test_non_object_findings_are_replaced_with_empty_object() {
        let verdict = AnalyzerVerdict::new(5.0, 0.5, json!("free text"));
        assert!(verdict.findings.is_object());
    }
}
