use serde::{Deserialize, Serialize};
use crate::config::constants::WEIGHT_SUM_TOLERANCE;
use crate::enums::analyzer_kind::AnalyzerKind;
use crate::helpers::config_helper::ConfigHelper;

/// Base weight table for result fusion. Weights must be finite,
/// non-negative and sum to 1.0 within tolerance; `problems` reports
/// every violation so callers can surface them all at once.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FusionConfig {
    #[serde(default = "ConfigHelper::default_content_weight")]
    pub content_weight: f64,

    #[serde(default = "ConfigHelper::default_visual_weight")]
    pub visual_weight: f64,

    #[serde(default = "ConfigHelper::default_reputation_weight")]
    pub reputation_weight: f64,
}

impl FusionConfig {
    pub fn new(content_weight: f64, visual_weight: f64, reputation_weight: f64) -> Self {
        Self {
            content_weight,
            visual_weight,
            reputation_weight,
        }
    }

    pub fn weight_for(&self, kind: AnalyzerKind) -> f64 {
        match kind {
            AnalyzerKind::Content => self.content_weight,
            AnalyzerKind::Visual => self.visual_weight,
            AnalyzerKind::Reputation => self.reputation_weight,
        }
    }

    pub fn sum(&self) -> f64 {
        self.content_weight + self.visual_weight + self.reputation_weight
    }

    pub fn problems(&self) -> Vec<String> {
        let mut problems = Vec::new();

        for kind in AnalyzerKind::ALL {
            let weight = self.weight_for(kind);
            if !weight.is_finite() {
                problems.push(format!("fusion weight for '{}' is not a number", kind));
            } else if weight < 0.0 {
                problems.push(format!("fusion weight for '{}' is negative: {}", kind, weight));
            }
        }

        let sum = self.sum();
        if sum.is_finite() && (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            problems.push(format!("fusion weights must sum to 1.0, got {}", sum));
        }

        problems
    }
}

impl Default for FusionConfig {
    fn default() -> Self {
        Self {
            content_weight: ConfigHelper::default_content_weight(),
            visual_weight: ConfigHelper::default_visual_weight(),
            reputation_weight: ConfigHelper::default_reputation_weight(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_are_valid() {
        let config = FusionConfig::default();
        assert_eq!(config.content_weight, 0.4);
        assert_eq!(config.visual_weight, 0.3);
        assert_eq!(config.reputation_weight, 0.3);
        assert!(config.problems().is_empty());
    }

    #[test]
    fn test_bad_sum_is_reported() {
        let config = FusionConfig::new(0.5, 0.3, 0.3);
        let problems = config.problems();
        assert_eq!(problems.len(), 1);
        assert!(problems[0].contains("sum to 1.0"));
    }

    #[test]
    fn test_negative_weight_is_reported() {
        let config = FusionConfig::new(1.3, -0.3, 0.0);
        assert!(config.problems().iter().any(|p| p.contains("negative")));
    }

    #[test]
    fn test_zero_weight_with_valid_sum_is_accepted() {
        let config = FusionConfig::new(0.7, 0.0, 0.3);
        assert!(config.problems().is_empty());
    }
}
