use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::enums::analyzer_failure::AnalyzerFailure;
use crate::enums::analyzer_kind::AnalyzerKind;
use crate::helpers::verdict_parser::VerdictParser;
use crate::prompts::content_analysis_prompt::CONTENT_ANALYSIS_PROMPT;
use crate::services::llm_client::LlmClient;
use crate::structs::analyzer_verdict::AnalyzerVerdict;
use crate::structs::fetched_content::FetchedContent;
use crate::structs::security_flags::SecurityFlags;
use crate::traits::analyzer::Analyzer;

const SUMMARY_TEXT_CHARS: usize = 1000;
const SUMMARY_FORM_LIMIT: usize = 3;

/// Scores the textual content of a page. With an AI client the page
/// summary goes to the model; without one a rule-based fallback scores
/// the derived security flags so the pipeline stays useful offline.
pub struct ContentAnalyzer {
    llm: Option<Arc<LlmClient>>,
}

impl ContentAnalyzer {
    pub fn new(llm: Option<Arc<LlmClient>>) -> Self {
        Self { llm }
    }

    fn page_summary(content: &FetchedContent, flags: &SecurityFlags) -> String {
        let mut parts = vec![
            format!("URL: {}", content.url),
            format!("Title: {}", content.title.as_deref().unwrap_or("(none)")),
        ];

        if let Some(description) = &content.meta_description {
            parts.push(format!("Meta description: {}", description));
        }

        parts.push(format!(
            "Transport: {}",
            if flags.has_https { "HTTPS" } else { "plain HTTP" }
        ));
        parts.push(format!("Links count: {}", content.links.len()));

        for form in content.forms.iter().take(SUMMARY_FORM_LIMIT) {
            let field_types: Vec<&str> = form.fields.iter().map(|f| f.field_type.as_str()).collect();
            parts.push(format!(
                "Form ({} {}): fields {}",
                form.method,
                form.action,
                field_types.join(", ")
            ));
        }

        let text: String = content.text.chars().take(SUMMARY_TEXT_CHARS).collect();
        parts.push(format!("Page text: {}", text));

        parts.join("\n")
    }

    fn heuristic_verdict(flags: &SecurityFlags) -> AnalyzerVerdict {
        let mut indicators: Vec<&str> = Vec::new();
        let mut legitimate: Vec<&str> = Vec::new();

        if flags.has_https {
            legitimate.push("HTTPS encryption present");
        } else {
            indicators.push("No HTTPS encryption");
        }
        if flags.has_suspicious_keywords {
            indicators.push("Urgency or threat wording detected");
        }
        if flags.has_login_form {
            indicators.push("Password input forms detected");
        }
        if flags.has_payment_form {
            indicators.push("Form collects several pieces of personal data");
        }

        let risk_factors = indicators.len();
        let findings = json!({
            "indicators": indicators,
            "legitimate_indicators": legitimate,
            "brand_impersonation": Value::Null,
            "explanation": format!("Rule-based analysis found {} risk factors", risk_factors),
        });

        AnalyzerVerdict::new(risk_factors as f64 * 1.5, 0.7, findings)
    }
}

#[async_trait]
impl Analyzer for ContentAnalyzer {
    fn kind(&self) -> AnalyzerKind {
        AnalyzerKind::Content
    }

    async fn evaluate(&self, content: &FetchedContent) -> Result<AnalyzerVerdict, AnalyzerFailure> {
        let flags = SecurityFlags::derive(content);

        match &self.llm {
            Some(llm) => {
                let summary = Self::page_summary(content, &flags);
                let completion = llm.complete(CONTENT_ANALYSIS_PROMPT, &summary).await?;
                Ok(VerdictParser::from_completion(&completion))
            }
            None => {
                log::debug!("🔧 No AI client configured, scoring content with rules only");
                Ok(Self::heuristic_verdict(&flags))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use crate::structs::domain_metadata::DomainMetadata;
    use crate::structs::form_field::FormField;
    use crate::structs::form_info::FormInfo;

    fn content_fixture(text: &str, https: bool, forms: Vec<FormInfo>) -> FetchedContent {
        FetchedContent {
            url: "https://example.com/login".to_string(),
            title: Some("Example".to_string()),
            html: String::new(),
            text: text.to_string(),
            meta_description: Some("An example page".to_string()),
            meta_keywords: vec![],
            links: vec!["https://example.com/about".to_string()],
            forms,
            screenshot_ref: None,
            domain: DomainMetadata {
                host: "example.com".to_string(),
                https,
                status_code: 200,
                response_time_ms: 80,
            },
            fetched_at: Utc::now(),
        }
    }

    fn login_form() -> FormInfo {
        FormInfo {
            action: "/session".to_string(),
            method: "post".to_string(),
            fields: vec![
                FormField::new("text", "user", ""),
                FormField::new("password", "pass", ""),
            ],
        }
    }

    #[test]
    fn test_heuristic_scores_by_flag_count() {
        let hostile = content_fixture("URGENT: verify your account now", false, vec![login_form()]);
        let verdict = ContentAnalyzer::heuristic_verdict(&SecurityFlags::derive(&hostile));
        assert_eq!(verdict.sub_score, 4.5);
        assert_eq!(verdict.confidence, 0.7);
        assert_eq!(verdict.findings["indicators"].as_array().unwrap().len(), 3);

        let benign = content_fixture("plain marketing copy", true, vec![]);
        let verdict = ContentAnalyzer::heuristic_verdict(&SecurityFlags::derive(&benign));
        assert_eq!(verdict.sub_score, 0.0);
        assert_eq!(verdict.findings["legitimate_indicators"][0], "HTTPS encryption present");
    }

    #[test]
    fn test_summary_carries_the_signals_the_model_needs() {
        let content = content_fixture("Welcome to our store", true, vec![login_form()]);
        let summary = ContentAnalyzer::page_summary(&content, &SecurityFlags::derive(&content));

        assert!(summary.contains("URL: https://example.com/login"));
        assert!(summary.contains("Title: Example"));
        assert!(summary.contains("Transport: HTTPS"));
        assert!(summary.contains("Links count: 1"));
        assert!(summary.contains("Form (post /session): fields text, password"));
        assert!(summary.contains("Page text: Welcome to our store"));
    }

    #[test]
    fn test_summary_truncates_long_page_text() {
        let content = content_fixture(&"a".repeat(5000), true, vec![]);
        let summary = ContentAnalyzer::page_summary(&content, &SecurityFlags::derive(&content));
        let text_line = summary.lines().last().unwrap();
        assert_eq!(text_line.len(), "Page text: ".len() + SUMMARY_TEXT_CHARS);
    }

    #[tokio::test]
    async fn test_keyless_evaluation_uses_rules() {
        let analyzer = ContentAnalyzer::new(None);
        let content = content_fixture("Security alert: account locked", false, vec![]);

        let verdict = analyzer.evaluate(&content).await.unwrap();
        assert_eq!(verdict.sub_score, 3.0);
        assert_eq!(verdict.findings["explanation"], "Rule-based analysis found 2 risk factors");
    }
}
