use serde::Deserialize;

/// Wire shape of a reputation lookup: `GET {base}/domains/{host}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ReputationRecord {
    pub risk_score: f64,
    pub confidence: f64,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub blocklisted: bool,
    #[serde(default)]
    pub domain_age_days: Option<u32>,
}
