use std::sync::Arc;

use chrono::Utc;
use tokio::sync::mpsc;
use tokio::time::Instant;

use crate::config::constants::duration_secs;
use crate::enums::analyzer_kind::AnalyzerKind;
use crate::enums::run_state::RunState;
use crate::helpers::url_helper::UrlHelper;
use crate::services::aggregator::ResultAggregator;
use crate::services::report_builder::ReportBuilder;
use crate::services::supervisor::Supervisor;
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::analyzer_outcome::AnalyzerOutcome;
use crate::structs::config::fusion_config::FusionConfig;
use crate::structs::config::supervisor_config::SupervisorConfig;
use crate::structs::fetched_content::FetchedContent;
use crate::structs::pipeline_summary::PipelineSummary;
use crate::traits::analyzer::Analyzer;
use crate::traits::content_fetcher::ContentFetcher;

/// Drives one check through its lifecycle: fetch, fan the analyzers
/// out under supervision, fuse what came back, publish a report. Every
/// exit path produces a complete summary.
pub struct Orchestrator {
    fetcher: Arc<dyn ContentFetcher>,
    analyzers: Vec<Arc<dyn Analyzer>>,
    supervisor_config: SupervisorConfig,
    fusion_config: FusionConfig,
}

impl Orchestrator {
    pub fn new(
        fetcher: Arc<dyn ContentFetcher>,
        analyzers: Vec<Arc<dyn Analyzer>>,
        supervisor_config: SupervisorConfig,
        fusion_config: FusionConfig,
    ) -> Self {
        Self {
            fetcher,
            analyzers,
            supervisor_config,
            fusion_config,
        }
    }

    pub async fn run(&self, request: &AnalysisRequest) -> PipelineSummary {
        let started = Instant::now();
        let analysis_timestamp = Utc::now();
        let supervisor_config = self.effective_supervisor_config(request);
        let fusion_config = request.options.weights.as_ref().unwrap_or(&self.fusion_config);

        let mut state = RunState::Pending;
        let mut errors: Vec<String> = Vec::new();

        log::info!("🚀 Checking {} (run {})", request.url, request.id);
        Self::transition(&mut state, RunState::Fetching);

        let content = match self.fetcher.fetch(&request.url).await {
            Ok(content) => Arc::new(content),
            Err(fetch_error) => {
                log::error!("❌ Fetch failed for {}: {}", request.url, fetch_error);
                errors.push(fetch_error.to_string());
                Self::transition(&mut state, RunState::Failed);
                return PipelineSummary {
                    report: ReportBuilder::fatal_report(
                        &UrlHelper::normalize(&request.url),
                        analysis_timestamp,
                    ),
                    state,
                    outcomes: vec![],
                    domain: None,
                    processing_time_ms: started.elapsed().as_millis() as u64,
                    errors,
                };
            }
        };

        Self::transition(&mut state, RunState::Analyzing);
        let outcomes = self
            .collect_outcomes(&supervisor_config, fusion_config, content.clone(), &mut errors)
            .await;

        Self::transition(&mut state, RunState::Aggregating);
        let report = match ResultAggregator::fuse(&content.url, &outcomes, fusion_config) {
            Ok(fused) => {
                Self::transition(&mut state, RunState::Done);
                log::info!(
                    "📊 {} scored {:.1}/10 ({}) at {:.0}% confidence",
                    content.url,
                    fused.risk_score,
                    fused.recommendation.label(),
                    fused.confidence * 100.0
                );
                ReportBuilder::build(&content.url, analysis_timestamp, &fused, &outcomes)
            }
            Err(error) => {
                log::error!("❌ Aggregation failed for {}: {}", content.url, error);
                errors.push(error.to_string());
                Self::transition(&mut state, RunState::Failed);
                ReportBuilder::fatal_report(&content.url, analysis_timestamp)
            }
        };

        PipelineSummary {
            report,
            state,
            outcomes,
            domain: Some(content.domain.clone()),
            processing_time_ms: started.elapsed().as_millis() as u64,
            errors,
        }
    }

    /// Dispatches every weighted analyzer under its own supervisor task
    /// and gathers outcomes until all report or the pipeline deadline
    /// passes. Stragglers are aborted and recorded as timeouts.
    async fn collect_outcomes(
        &self,
        supervisor_config: &SupervisorConfig,
        fusion_config: &FusionConfig,
        content: Arc<FetchedContent>,
        errors: &mut Vec<String>,
    ) -> Vec<AnalyzerOutcome> {
        let mut outcomes: Vec<AnalyzerOutcome> = Vec::new();
        let mut handles: Vec<(AnalyzerKind, tokio::task::JoinHandle<()>)> = Vec::new();
        let (outcome_tx, mut outcome_rx) = mpsc::unbounded_channel::<AnalyzerOutcome>();

        for analyzer in &self.analyzers {
            let kind = analyzer.kind();
            if fusion_config.weight_for(kind) == 0.0 {
                log::debug!("⏭️ {} analyzer not dispatched: assigned weight is 0", kind);
                outcomes.push(AnalyzerOutcome::skipped(kind, "assigned weight is 0", 0));
                continue;
            }

            let supervisor = Supervisor::new(supervisor_config.clone());
            let analyzer = analyzer.clone();
            let content = content.clone();
            let tx = outcome_tx.clone();
            handles.push((
                kind,
                tokio::spawn(async move {
                    let outcome = supervisor.supervise(analyzer, content).await;
                    let _ = tx.send(outcome);
                }),
            ));
        }
        drop(outcome_tx);

        let dispatched = handles.len();
        let mut received = 0;
        let mut deadline_hit = false;
        let deadline = tokio::time::sleep(duration_secs(supervisor_config.pipeline_deadline_secs));
        tokio::pin!(deadline);

        while received < dispatched {
            tokio::select! {
                maybe_outcome = outcome_rx.recv() => match maybe_outcome {
                    Some(outcome) => {
                        received += 1;
                        outcomes.push(outcome);
                    }
                    None => break,
                },
                _ = &mut deadline => {
                    deadline_hit = true;
                    log::warn!(
                        "⏱️ Pipeline deadline of {}s passed with {} of {} analyzers outstanding",
                        supervisor_config.pipeline_deadline_secs,
                        dispatched - received,
                        dispatched
                    );
                    break;
                }
            }
        }

        let dispatched_kinds: Vec<AnalyzerKind> = handles.iter().map(|(kind, _)| *kind).collect();
        for (kind, handle) in &handles {
            if !outcomes.iter().any(|outcome| outcome.source == *kind) {
                handle.abort();
            }
        }
        let _ = futures::future::join_all(handles.into_iter().map(|(_, handle)| handle)).await;

        for kind in dispatched_kinds {
            if !outcomes.iter().any(|outcome| outcome.source == kind) {
                let detail = if deadline_hit {
                    "cancelled at the pipeline deadline"
                } else {
                    "analyzer task ended without an outcome"
                };
                errors.push(format!("{} analyzer did not complete", kind));
                outcomes.push(AnalyzerOutcome::timeout(
                    kind,
                    detail,
                    duration_secs(supervisor_config.pipeline_deadline_secs).as_millis() as u64,
                ));
            }
        }

        outcomes.sort_by_key(|outcome| outcome.source);
        outcomes
    }

    fn effective_supervisor_config(&self, request: &AnalysisRequest) -> SupervisorConfig {
        let mut config = self.supervisor_config.clone();
        if let Some(secs) = request.options.analyzer_timeout_secs {
            config.analyzer_timeout_secs = secs;
        }
        if let Some(secs) = request.options.pipeline_deadline_secs {
            config.pipeline_deadline_secs = secs;
        }
        config
    }

    fn transition(state: &mut RunState, next: RunState) {
        log::debug!("🧭 state {} -> {}", state.as_str(), next.as_str());
        *state = next;
    }
}
