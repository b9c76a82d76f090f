use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use crate::enums::analyzer_kind::AnalyzerKind;
use crate::enums::recommendation::Recommendation;

/// Fusion output. `risk_score` is already rounded to 1 decimal and
/// `confidence` to 2, so the report builder copies them verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FusedResult {
    pub risk_score: f64,
    pub confidence: f64,
    pub recommendation: Recommendation,
    /// Effective (renormalized) weight each analyzer contributed;
    /// 0.0 for analyzers that produced nothing usable.
    pub contributing_weights: BTreeMap<AnalyzerKind, f64>,
}
