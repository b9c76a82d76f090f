use std::path::PathBuf;

use chrono::{DateTime, Utc};

use crate::config::config_manager::ConfigManager;
use crate::config::constants::REPORTS_DIR_NAME;
use crate::enums::analyzer_kind::AnalyzerKind;
use crate::enums::recommendation::Recommendation;
use crate::errors::SitecheckResult;
use crate::helpers::url_helper::UrlHelper;
use crate::structs::analyzer_outcome::AnalyzerOutcome;
use crate::structs::config::output_config::OutputConfig;
use crate::structs::fused_result::FusedResult;
use crate::structs::risk_report::{ReportFindings, RiskReport};

/// Assembles the published report. Every number in it was computed by
/// the aggregator; this layer only shapes and persists.
pub struct ReportBuilder;

impl ReportBuilder {
    pub fn build(
        url: &str,
        analysis_timestamp: DateTime<Utc>,
        fused: &FusedResult,
        outcomes: &[AnalyzerOutcome],
    ) -> RiskReport {
        let mut findings = ReportFindings::default();
        for outcome in outcomes.iter().filter(|o| o.is_usable()) {
            let slot = match outcome.source {
                AnalyzerKind::Content => &mut findings.content_analysis,
                AnalyzerKind::Visual => &mut findings.visual_analysis,
                AnalyzerKind::Reputation => &mut findings.reputation_check,
            };
            *slot = outcome.findings.clone();
        }

        RiskReport {
            url: url.to_string(),
            risk_score: fused.risk_score,
            analysis_timestamp,
            findings,
            recommendation: fused.recommendation,
            confidence: fused.confidence,
        }
    }

    /// The fatal path still publishes the full schema: UNKNOWN verdict,
    /// zero confidence, all findings explicitly null.
    pub fn fatal_report(url: &str, analysis_timestamp: DateTime<Utc>) -> RiskReport {
        RiskReport {
            url: url.to_string(),
            risk_score: 0.0,
            analysis_timestamp,
            findings: ReportFindings::default(),
            recommendation: Recommendation::Unknown,
            confidence: 0.0,
        }
    }

    pub fn save_report(report: &RiskReport, output: &OutputConfig) -> SitecheckResult<PathBuf> {
        let dir = match &output.reports_dir {
            Some(dir) => PathBuf::from(dir),
            None => ConfigManager::config_dir()?.join(REPORTS_DIR_NAME),
        };
        std::fs::create_dir_all(&dir)?;

        let host = UrlHelper::host(&report.url).unwrap_or_else(|| "report".to_string());
        let file_name = format!(
            "{}-{}.json",
            host,
            report.analysis_timestamp.format("%Y%m%dT%H%M%SZ")
        );
        let path = dir.join(file_name);

        let json = serde_json::to_string_pretty(report)?;
        std::fs::write(&path, json)?;
        log::info!("💾 Report saved to {}", path.display());

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    use serde_json::json;

    use crate::structs::analyzer_verdict::AnalyzerVerdict;

    fn fused_fixture() -> FusedResult {
        let mut contributing_weights = BTreeMap::new();
        for kind in AnalyzerKind::ALL {
            contributing_weights.insert(kind, 0.0);
        }
        FusedResult {
            risk_score: 7.5,
            confidence: 0.8,
            recommendation: Recommendation::High,
            contributing_weights,
        }
    }

    #[test]
    fn test_findings_land_under_their_analyzer_key() {
        let outcomes = vec![
            AnalyzerOutcome::ok(
                AnalyzerKind::Content,
                AnalyzerVerdict::new(8.0, 0.9, json!({"indicators": ["login form"]})),
                12,
            ),
            AnalyzerOutcome::timeout(AnalyzerKind::Visual, "deadline of 20s elapsed", 20_000),
            AnalyzerOutcome::ok(
                AnalyzerKind::Reputation,
                AnalyzerVerdict::new(9.0, 0.95, json!({"indicators": ["blocklisted"]})),
                40,
            ),
        ];

        let report = ReportBuilder::build("https://example.com", Utc::now(), &fused_fixture(), &outcomes);

        assert_eq!(report.findings.content_analysis.as_ref().unwrap()["indicators"][0], "login form");
        assert!(report.findings.visual_analysis.is_none());
        assert_eq!(report.findings.reputation_check.as_ref().unwrap()["indicators"][0], "blocklisted");
        assert_eq!(report.risk_score, 7.5);
        assert_eq!(report.confidence, 0.8);
    }

    #[test]
    fn test_fatal_report_keeps_the_published_schema() {
        let report = ReportBuilder::fatal_report("https://unreachable.example.com", Utc::now());

        assert_eq!(report.recommendation, Recommendation::Unknown);
        assert_eq!(report.risk_score, 0.0);
        assert_eq!(report.confidence, 0.0);

        let json = serde_json::to_value(&report).unwrap();
        assert!(json["findings"]["content_analysis"].is_null());
        assert!(json["findings"]["visual_analysis"].is_null());
        assert!(json["findings"]["reputation_check"].is_null());
    }

    #[test]
    fn test_save_report_writes_parseable_json() {
        let dir = tempfile::tempdir().unwrap();
        let output = OutputConfig {
            save_reports: true,
            reports_dir: Some(dir.path().display().to_string()),
            verbose: false,
        };
        let report = ReportBuilder::fatal_report("https://example.com/path", Utc::now());

        let path = ReportBuilder::save_report(&report, &output).unwrap();

        assert!(path.file_name().unwrap().to_string_lossy().starts_with("example.com-"));
        let raw = std::fs::read_to_string(&path).unwrap();
        let parsed: RiskReport = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed.url, "https://example.com/path");
    }
}
