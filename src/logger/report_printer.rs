use serde_json::Value;
use terminal_size::{terminal_size, Width};
use crate::enums::analyzer_kind::AnalyzerKind;
use crate::enums::outcome_status::OutcomeStatus;
use crate::enums::recommendation::Recommendation;
use crate::structs::pipeline_summary::PipelineSummary;

const MAX_SEPARATOR_WIDTH: usize = 72;
const FALLBACK_SEPARATOR_WIDTH: usize = 60;

pub struct ReportPrinter {}

impl ReportPrinter {

    pub fn print_report(summary: &PipelineSummary, verbose: bool) {
        let separator = Self::separator();
        let report = &summary.report;

        println!("\n🛡️ PHISHING ANALYSIS REPORT");
        println!("{}", separator);
        println!("🔗 URL: {}", report.url);
        println!("🕐 Analyzed at: {}", report.analysis_timestamp.format("%Y-%m-%d %H:%M:%S UTC"));

        let (color, reset) = Self::risk_color(&report.recommendation);
        println!("{}📊 Risk score: {:.1} / 10{}", color, report.risk_score, reset);
        println!("🎯 Confidence: {:.0}%", report.confidence * 100.0);
        println!("{}{} Recommendation: {}{}", color, report.recommendation.emoji(), report.recommendation.label(), reset);

        for kind in AnalyzerKind::ALL {
            Self::print_findings_section(summary, kind, &separator);
        }

        if verbose {
            Self::print_technical_section(summary, &separator);
        }

        println!("{}", separator);
    }

    fn print_findings_section(summary: &PipelineSummary, kind: AnalyzerKind, separator: &str) {
        let outcome = summary.outcomes.iter().find(|outcome| outcome.source == kind);

        println!("{}", separator);
        match outcome {
            Some(outcome) if outcome.status == OutcomeStatus::Ok => {
                println!("{} {}", Self::section_emoji(kind), Self::section_title(kind));
                if let (Some(score), Some(confidence)) = (outcome.sub_score, outcome.confidence) {
                    println!("  📊 Sub-score: {:.1} (confidence {:.2})", score, confidence);
                }
            }
            Some(outcome) => {
                println!("{} {} ({})", Self::section_emoji(kind), Self::section_title(kind), Self::status_note(outcome.status));
                if let Some(detail) = &outcome.error_detail {
                    println!("  ❔ {}", detail);
                }
            }
            None => {
                println!("{} {} (no data)", Self::section_emoji(kind), Self::section_title(kind));
            }
        }

        if let Some(findings) = Self::findings_for(summary, kind) {
            Self::print_findings_body(findings);
        }
    }

    fn print_findings_body(findings: &Value) {
        for indicator in Self::string_items(findings, "indicators") {
            println!("  ⚠️ {}", indicator);
        }

        for indicator in Self::string_items(findings, "legitimate_indicators") {
            println!("  ✅ {}", indicator);
        }

        if let Some(brand) = findings.get("brand_impersonation").and_then(Value::as_str) {
            if !brand.is_empty() {
                println!("  🎭 Possible brand impersonation: {}", brand);
            }
        }

        if let Some(explanation) = findings.get("explanation").and_then(Value::as_str) {
            println!("  📝 {}", explanation);
        }
    }

    fn print_technical_section(summary: &PipelineSummary, separator: &str) {
        println!("{}", separator);
        println!("🔧 TECHNICAL DETAILS");
        println!("  🏁 Pipeline state: {}", summary.state.as_str());
        println!("  ⏱️ Processing time: {:.2}s", summary.processing_time_ms as f64 / 1000.0);

        if let Some(domain) = &summary.domain {
            println!("  🌐 Host: {} (HTTP {}, {}ms, https: {})", domain.host, domain.status_code, domain.response_time_ms, domain.https);
        }

        for outcome in &summary.outcomes {
            let mut line = format!("  {} {}: {} in {}ms", Self::status_emoji(outcome.status), outcome.source, outcome.status.as_str(), outcome.elapsed_ms);
            if let Some(detail) = &outcome.error_detail {
                line.push_str(&format!(" ({})", detail));
            }
            println!("{}", line);
        }

        for error in &summary.errors {
            println!("  ❌ {}", error);
        }
    }

    fn findings_for(summary: &PipelineSummary, kind: AnalyzerKind) -> Option<&Value> {
        match kind {
            AnalyzerKind::Content => summary.report.findings.content_analysis.as_ref(),
            AnalyzerKind::Visual => summary.report.findings.visual_analysis.as_ref(),
            AnalyzerKind::Reputation => summary.report.findings.reputation_check.as_ref(),
        }
    }

    fn string_items<'a>(findings: &'a Value, key: &str) -> Vec<&'a str> {
        findings
            .get(key)
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    fn section_emoji(kind: AnalyzerKind) -> &'static str {
        match kind {
            AnalyzerKind::Content => "📄",
            AnalyzerKind::Visual => "🖼️",
            AnalyzerKind::Reputation => "🌐",
        }
    }

    fn section_title(kind: AnalyzerKind) -> &'static str {
        match kind {
            AnalyzerKind::Content => "Content analysis",
            AnalyzerKind::Visual => "Visual analysis",
            AnalyzerKind::Reputation => "Reputation check",
        }
    }

    fn status_note(status: OutcomeStatus) -> &'static str {
        match status {
            OutcomeStatus::Ok => "ok",
            OutcomeStatus::Timeout => "timed out",
            OutcomeStatus::Error => "failed",
            OutcomeStatus::Skipped => "skipped",
        }
    }

    fn status_emoji(status: OutcomeStatus) -> &'static str {
        match status {
            OutcomeStatus::Ok => "✅",
            OutcomeStatus::Timeout => "⏱️",
            OutcomeStatus::Error => "❌",
            OutcomeStatus::Skipped => "⏭️",
        }
    }

    fn risk_color(recommendation: &Recommendation) -> (&'static str, &'static str) {
        match recommendation {
            Recommendation::Low => ("\x1b[32m", "\x1b[0m"),
            Recommendation::Medium => ("\x1b[33m", "\x1b[0m"),
            Recommendation::High => ("\x1b[31m", "\x1b[0m"),
            Recommendation::Unknown => ("", ""),
        }
    }

    fn separator() -> String {
        let width = match terminal_size() {
            Some((Width(width), _)) => (width as usize).min(MAX_SEPARATOR_WIDTH),
            None => FALLBACK_SEPARATOR_WIDTH,
        };

        "━".repeat(width)
    }
}
