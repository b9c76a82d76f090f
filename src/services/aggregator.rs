use std::collections::BTreeMap;

use crate::enums::analyzer_kind::AnalyzerKind;
use crate::enums::recommendation::Recommendation;
use crate::errors::{SitecheckError, SitecheckResult};
use crate::structs::analyzer_outcome::AnalyzerOutcome;
use crate::structs::config::fusion_config::FusionConfig;
use crate::structs::fused_result::FusedResult;

/// Weighted fusion of analyzer outcomes. Weights of unusable analyzers
/// are renormalized across the usable ones so the score stays on the
/// 0..=10 scale, and the lost weight is charged against confidence.
pub struct ResultAggregator;

impl ResultAggregator {
    pub fn fuse(
        url: &str,
        outcomes: &[AnalyzerOutcome],
        weights: &FusionConfig,
    ) -> SitecheckResult<FusedResult> {
        let mut usable: Vec<&AnalyzerOutcome> = outcomes.iter().filter(|o| o.is_usable()).collect();
        // Canonical order keeps the weighted sums bit-identical no
        // matter how the outcomes were collected.
        usable.sort_by_key(|outcome| outcome.source);

        if usable.is_empty() {
            return Err(SitecheckError::analysis_error(
                url,
                "aggregation",
                "no analyzer produced a usable verdict",
                false,
            ));
        }

        let usable_weight: f64 = usable.iter().map(|o| weights.weight_for(o.source)).sum();
        if usable_weight <= 0.0 {
            return Err(SitecheckError::analysis_error(
                url,
                "aggregation",
                "usable analyzers carry no fusion weight",
                false,
            ));
        }

        for outcome in outcomes.iter().filter(|o| !o.is_usable()) {
            if weights.weight_for(outcome.source) > 0.0 {
                log::warn!(
                    "⚠️ Fusing without {} ({}); confidence will degrade",
                    outcome.source,
                    outcome.status.as_str()
                );
            }
        }

        let mut contributing_weights = BTreeMap::new();
        for kind in AnalyzerKind::ALL {
            contributing_weights.insert(kind, 0.0);
        }

        let mut weighted_score = 0.0;
        let mut base_confidence = 0.0;
        for outcome in &usable {
            let effective = weights.weight_for(outcome.source) / usable_weight;
            weighted_score += effective * outcome.sub_score.unwrap_or(0.0);
            base_confidence += effective * outcome.confidence.unwrap_or(0.0);
            contributing_weights.insert(outcome.source, effective);
        }

        // Missing weight is measured on the original table, not the
        // renormalized one.
        let missing_fraction = outcomes
            .iter()
            .filter(|o| !o.is_usable())
            .map(|o| weights.weight_for(o.source))
            .sum::<f64>()
            .clamp(0.0, 1.0);

        let risk_score = round_score(weighted_score).clamp(0.0, 10.0);
        let confidence = round_confidence((base_confidence * (1.0 - missing_fraction)).clamp(0.0, 1.0));

        Ok(FusedResult {
            risk_score,
            confidence,
            recommendation: Recommendation::from_score(risk_score),
            contributing_weights,
        })
    }
}

/// One decimal, ties away from zero.
fn round_score(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Two decimals, ties to even.
fn round_confidence(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
