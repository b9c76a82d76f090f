use std::sync::Arc;

use tokio::time::Instant;

use crate::config::constants::{duration_millis, duration_secs};
use crate::enums::analyzer_failure::AnalyzerFailure;
use crate::enums::analyzer_kind::AnalyzerKind;
use crate::structs::analyzer_outcome::AnalyzerOutcome;
use crate::structs::config::supervisor_config::SupervisorConfig;
use crate::structs::fetched_content::FetchedContent;
use crate::traits::analyzer::Analyzer;

/// Runs one analyzer under a hard per-analyzer deadline that covers
/// every attempt and every backoff pause. Always returns an outcome;
/// failures become data for the aggregator, never errors for the
/// caller.
pub struct Supervisor {
    config: SupervisorConfig,
}

impl Supervisor {
    pub fn new(config: SupervisorConfig) -> Self {
        Self { config }
    }

    pub async fn supervise(
        &self,
        analyzer: Arc<dyn Analyzer>,
        content: Arc<FetchedContent>,
    ) -> AnalyzerOutcome {
        let kind = analyzer.kind();
        let started = Instant::now();
        let deadline = started + duration_secs(self.config.analyzer_timeout_secs);
        let mut retry_delay = duration_millis(self.config.initial_backoff_ms);

        for attempt in 1..=self.config.max_attempts {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                break;
            }

            match tokio::time::timeout(remaining, analyzer.evaluate(&content)).await {
                Ok(Ok(verdict)) => {
                    let elapsed_ms = started.elapsed().as_millis() as u64;
                    log::debug!("✅ {} analyzer finished in {}ms (attempt {})", kind, elapsed_ms, attempt);
                    return AnalyzerOutcome::ok(kind, verdict, elapsed_ms);
                }
                Ok(Err(AnalyzerFailure::MissingInput(detail))) => {
                    log::debug!("⏭️ {} analyzer skipped: {}", kind, detail);
                    return AnalyzerOutcome::skipped(kind, &detail, started.elapsed().as_millis() as u64);
                }
                Ok(Err(failure)) if failure.is_transient() && attempt < self.config.max_attempts => {
                    // Backoff never sleeps past the deadline.
                    let pause = retry_delay.min(deadline.saturating_duration_since(Instant::now()));
                    if pause.is_zero() {
                        break;
                    }
                    log::warn!(
                        "🔄 {} analyzer attempt {} failed ({}), retrying in {:?}",
                        kind,
                        attempt,
                        failure,
                        pause
                    );
                    tokio::time::sleep(pause).await;
                    retry_delay *= 2;
                }
                Ok(Err(failure)) => {
                    log::warn!("❌ {} analyzer failed: {}", kind, failure);
                    return AnalyzerOutcome::error(
                        kind,
                        &failure.to_string(),
                        started.elapsed().as_millis() as u64,
                    );
                }
                Err(_) => {
                    log::warn!("⏱️ {} analyzer hit its {}s deadline", kind, self.config.analyzer_timeout_secs);
                    return self.timeout_outcome(kind, started);
                }
            }
        }

        log::warn!("⏱️ {} analyzer exhausted its deadline between retries", kind);
        self.timeout_outcome(kind, started)
    }

    fn timeout_outcome(&self, kind: AnalyzerKind, started: Instant) -> AnalyzerOutcome {
        AnalyzerOutcome::timeout(
            kind,
            &format!("deadline of {}s elapsed", self.config.analyzer_timeout_secs),
            started.elapsed().as_millis() as u64,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    use async_trait::async_trait;
    use chrono::Utc;
    use serde_json::json;

    use crate::enums::outcome_status::OutcomeStatus;
    use crate::structs::analyzer_verdict::AnalyzerVerdict;
    use crate::structs::domain_metadata::DomainMetadata;

    fn content_fixture() -> Arc<FetchedContent> {
        Arc::new(FetchedContent {
            url: "https://example.com".to_string(),
            title: None,
            html: String::new(),
            text: String::new(),
            meta_description: None,
            meta_keywords: vec![],
            links: vec![],
            forms: vec![],
            screenshot_ref: None,
            domain: DomainMetadata {
                host: "example.com".to_string(),
                https: true,
                status_code: 200,
                response_time_ms: 10,
            },
            fetched_at: Utc::now(),
        })
    }

    fn config(analyzer_timeout_secs: u64, max_attempts: u32, initial_backoff_ms: u64) -> SupervisorConfig {
        SupervisorConfig {
            analyzer_timeout_secs,
            max_attempts,
            initial_backoff_ms,
            pipeline_deadline_secs: 60,
        }
    }

    struct FlakyAnalyzer {
        calls: AtomicU32,
        failures_before_success: u32,
    }

    #[async_trait]
    impl Analyzer for FlakyAnalyzer {
        fn kind(&self) -> AnalyzerKind {
            AnalyzerKind::Content
        }

        async fn evaluate(&self, _content: &FetchedContent) -> Result<AnalyzerVerdict, AnalyzerFailure> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if call < self.failures_before_success {
                Err(AnalyzerFailure::Network("connection reset".to_string()))
            } else {
                Ok(AnalyzerVerdict::new(4.0, 0.8, json!({})))
            }
        }
    }

    struct PermanentFailure {
        calls: AtomicU32,
    }

    #[async_trait]
    impl Analyzer for PermanentFailure {
        fn kind(&self) -> AnalyzerKind {
            AnalyzerKind::Reputation
        }

        async fn evaluate(&self, _content: &FetchedContent) -> Result<AnalyzerVerdict, AnalyzerFailure> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(AnalyzerFailure::Authentication("bad key".to_string()))
        }
    }

    struct NoInput;

    #[async_trait]
    impl Analyzer for NoInput {
        fn kind(&self) -> AnalyzerKind {
            AnalyzerKind::Visual
        }

        async fn evaluate(&self, _content: &FetchedContent) -> Result<AnalyzerVerdict, AnalyzerFailure> {
            Err(AnalyzerFailure::MissingInput("no screenshot".to_string()))
        }
    }

    struct SlowAnalyzer;

    #[async_trait]
    impl Analyzer for SlowAnalyzer {
        fn kind(&self) -> AnalyzerKind {
            AnalyzerKind::Visual
        }

        async fn evaluate(&self, _content: &FetchedContent) -> Result<AnalyzerVerdict, AnalyzerFailure> {
            tokio::time::sleep(duration_secs(30)).await;
            Ok(AnalyzerVerdict::new(5.0, 0.5, json!({})))
        }
    }

    #[tokio::test]
    async fn test_transient_failures_are_retried_until_success() {
        let analyzer = Arc::new(FlakyAnalyzer {
            calls: AtomicU32::new(0),
            failures_before_success: 2,
        });
        let supervisor = Supervisor::new(config(20, 3, 1));

        let outcome = supervisor.supervise(analyzer.clone(), content_fixture()).await;

        assert_eq!(outcome.status, OutcomeStatus::Ok);
        assert_eq!(outcome.sub_score, Some(4.0));
        assert_eq!(analyzer.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_permanent_failure_is_not_retried() {
        let analyzer = Arc::new(PermanentFailure {
            calls: AtomicU32::new(0),
        });
        let supervisor = Supervisor::new(config(20, 3, 1));

        let outcome = supervisor.supervise(analyzer.clone(), content_fixture()).await;

        assert_eq!(outcome.status, OutcomeStatus::Error);
        assert_eq!(analyzer.calls.load(Ordering::SeqCst), 1);
        assert!(outcome.error_detail.unwrap().contains("authentication failed"));
    }

    #[tokio::test]
    async fn test_transient_failure_on_the_last_attempt_is_an_error() {
        let analyzer = Arc::new(FlakyAnalyzer {
            calls: AtomicU32::new(0),
            failures_before_success: 5,
        });
        let supervisor = Supervisor::new(config(20, 2, 1));

        let outcome = supervisor.supervise(analyzer.clone(), content_fixture()).await;

        assert_eq!(outcome.status, OutcomeStatus::Error);
        assert_eq!(analyzer.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_missing_input_becomes_a_skip() {
        let supervisor = Supervisor::new(config(20, 3, 1));
        let outcome = supervisor.supervise(Arc::new(NoInput), content_fixture()).await;

        assert_eq!(outcome.status, OutcomeStatus::Skipped);
        assert_eq!(outcome.error_detail.as_deref(), Some("no screenshot"));
    }

    #[tokio::test]
    async fn test_slow_analyzer_hits_the_deadline() {
        let supervisor = Supervisor::new(config(1, 3, 1));
        let outcome = supervisor.supervise(Arc::new(SlowAnalyzer), content_fixture()).await;

        assert_eq!(outcome.status, OutcomeStatus::Timeout);
        assert!(outcome.error_detail.unwrap().contains("deadline of 1s"));
    }
}
