use std::sync::Arc;

use async_trait::async_trait;

use crate::enums::analyzer_failure::AnalyzerFailure;
use crate::enums::analyzer_kind::AnalyzerKind;
use crate::helpers::verdict_parser::VerdictParser;
use crate::prompts::visual_analysis_prompt::VISUAL_ANALYSIS_PROMPT;
use crate::services::llm_client::LlmClient;
use crate::structs::analyzer_verdict::AnalyzerVerdict;
use crate::structs::fetched_content::FetchedContent;
use crate::traits::analyzer::Analyzer;

/// Scores the rendered look of a page from a screenshot. Needs both a
/// screenshot reference and an AI client; lacking either is a skip,
/// not an error, because the run can proceed on the other analyzers.
pub struct VisualAnalyzer {
    llm: Option<Arc<LlmClient>>,
}

impl VisualAnalyzer {
    pub fn new(llm: Option<Arc<LlmClient>>) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl Analyzer for VisualAnalyzer {
    fn kind(&self) -> AnalyzerKind {
        AnalyzerKind::Visual
    }

    async fn evaluate(&self, content: &FetchedContent) -> Result<AnalyzerVerdict, AnalyzerFailure> {
        let screenshot_ref = match &content.screenshot_ref {
            Some(path) => path,
            None => {
                return Err(AnalyzerFailure::MissingInput(
                    "no screenshot was provided".to_string(),
                ))
            }
        };

        let llm = match &self.llm {
            Some(llm) => llm,
            None => {
                return Err(AnalyzerFailure::MissingInput(
                    "visual analysis needs an AI API key".to_string(),
                ))
            }
        };

        let image = tokio::fs::read(screenshot_ref).await.map_err(|error| {
            AnalyzerFailure::InvalidInput(format!(
                "cannot read screenshot '{}': {}",
                screenshot_ref, error
            ))
        })?;

        let user_prompt = format!(
            "The attached image is a screenshot of {}. Assess it for phishing.",
            content.url
        );
        let completion = llm
            .complete_with_image(VISUAL_ANALYSIS_PROMPT, &user_prompt, &image)
            .await?;
        Ok(VerdictParser::from_completion(&completion))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use crate::structs::domain_metadata::DomainMetadata;

    fn content_fixture(screenshot_ref: Option<String>) -> FetchedContent {
        FetchedContent {
            url: "https://example.com".to_string(),
            title: None,
            html: String::new(),
            text: String::new(),
            meta_description: None,
            meta_keywords: vec![],
            links: vec![],
            forms: vec![],
            screenshot_ref,
            domain: DomainMetadata {
                host: "example.com".to_string(),
                https: true,
                status_code: 200,
                response_time_ms: 50,
            },
            fetched_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_missing_screenshot_is_a_skip() {
        let analyzer = VisualAnalyzer::new(None);
        let failure = analyzer.evaluate(&content_fixture(None)).await.unwrap_err();
        assert!(matches!(failure, AnalyzerFailure::MissingInput(_)));
    }

    #[tokio::test]
    async fn test_missing_client_is_a_skip_even_with_screenshot() {
        let analyzer = VisualAnalyzer::new(None);
        let content = content_fixture(Some("/tmp/shot.png".to_string()));
        let failure = analyzer.evaluate(&content).await.unwrap_err();
        assert!(matches!(failure, AnalyzerFailure::MissingInput(detail) if detail.contains("API key")));
    }
}
