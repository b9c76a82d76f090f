use async_trait::async_trait;
use crate::enums::analyzer_failure::AnalyzerFailure;
use crate::enums::analyzer_kind::AnalyzerKind;
use crate::structs::analyzer_verdict::AnalyzerVerdict;
use crate::structs::fetched_content::FetchedContent;

/// One evaluation perspective on a fetched page. Implementations are
/// independent of each other and must not assume any sibling ran.
#[async_trait]
pub trait Analyzer: Send + Sync {
    fn kind(&self) -> AnalyzerKind;

    async fn evaluate(&self, content: &FetchedContent) -> Result<AnalyzerVerdict, AnalyzerFailure>;
}
