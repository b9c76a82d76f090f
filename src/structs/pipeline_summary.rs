use serde::Serialize;
use crate::enums::run_state::RunState;
use crate::structs::analyzer_outcome::AnalyzerOutcome;
use crate::structs::domain_metadata::DomainMetadata;
use crate::structs::risk_report::RiskReport;

/// Everything a run produced. `report` is always well-formed, even
/// when `state` is FAILED.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineSummary {
    pub report: RiskReport,
    pub state: RunState,
    pub outcomes: Vec<AnalyzerOutcome>,
    pub domain: Option<DomainMetadata>,
    pub processing_time_ms: u64,
    pub errors: Vec<String>,
}
