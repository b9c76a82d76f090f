use std::sync::Arc;
use std::time::Instant;

use crate::config::config_manager::ConfigManager;
use crate::enums::commands::Commands;
use crate::enums::run_state::RunState;
use crate::errors::{SitecheckError, SitecheckResult};
use crate::logger::animated_logger::AnimatedLogger;
use crate::logger::report_printer::ReportPrinter;
use crate::services::analyzers::content_analyzer::ContentAnalyzer;
use crate::services::analyzers::reputation_analyzer::ReputationAnalyzer;
use crate::services::analyzers::visual_analyzer::VisualAnalyzer;
use crate::services::llm_client::LlmClient;
use crate::services::orchestrator::Orchestrator;
use crate::services::page_fetcher::PageFetcher;
use crate::services::report_builder::ReportBuilder;
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::config::fusion_config::FusionConfig;
use crate::structs::run_options::RunOptions;
use crate::traits::analyzer::Analyzer;
use crate::traits::content_fetcher::ContentFetcher;

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new() -> Self {
        Self { start_time: None }
    }

    pub async fn run_command(&mut self, command: Commands) -> SitecheckResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Check {
                url,
                screenshot,
                json,
                no_verbose,
                weights,
                analyzer_timeout,
                deadline,
            } => {
                self.check_command(url, screenshot, json, no_verbose, weights, analyzer_timeout, deadline)
                    .await
            }
            Commands::Init => self.init_command().await,
            Commands::Validate => self.validate_command().await,
        };

        if let Some(start) = self.start_time {
            log::info!("⏱️  Command completed in {:.2}s", start.elapsed().as_secs_f64());
        }

        result
    }

    #[allow(clippy::too_many_arguments)]
    async fn check_command(
        &self,
        url: String,
        screenshot: Option<String>,
        json: bool,
        no_verbose: bool,
        weights: Option<String>,
        analyzer_timeout: Option<u64>,
        deadline: Option<u64>,
    ) -> SitecheckResult<()> {
        let config = match ConfigManager::load() {
            Ok(config) => config,
            Err(e) => {
                log::error!("❌ Failed to load configuration: {}", e);
                log::error!("💡 Run 'sitecheck init' to create a configuration file.");
                return Err(e);
            }
        };

        if let Err(problems) = ConfigManager::validate_config(&config) {
            for problem in &problems {
                eprintln!("❌ {}", problem);
            }
            return Err(SitecheckError::config_error(
                "configuration is invalid",
                None,
                Some("fix the fields listed above or run 'sitecheck init' to regenerate the file"),
            ));
        }

        let weight_override = match weights {
            Some(raw) => Some(Self::parse_weights(&raw)?),
            None => None,
        };

        let options = RunOptions {
            weights: weight_override,
            analyzer_timeout_secs: analyzer_timeout,
            pipeline_deadline_secs: deadline,
            screenshot_path: screenshot,
        };
        let request = AnalysisRequest::new(url, options);

        let llm = LlmClient::from_env(&config.ai).map(Arc::new);
        if llm.is_none() {
            log::warn!("🔑 No AI API key found; content analysis falls back to rules and visual analysis is skipped");
        }

        let fetcher: Arc<dyn ContentFetcher> = Arc::new(PageFetcher::new(
            config.fetch.clone(),
            request.options.screenshot_path.clone(),
        ));
        let analyzers: Vec<Arc<dyn Analyzer>> = vec![
            Arc::new(ContentAnalyzer::new(llm.clone())),
            Arc::new(VisualAnalyzer::new(llm)),
            Arc::new(ReputationAnalyzer::new(config.reputation.clone())),
        ];
        let orchestrator = Orchestrator::new(
            fetcher,
            analyzers,
            config.supervisor.clone(),
            config.fusion.clone(),
        );

        let mut spinner = AnimatedLogger::start(&format!("🔍 Evaluating {}", request.url));
        let summary = orchestrator.run(&request).await;

        if summary.state == RunState::Done {
            spinner
                .stop(&format!(
                    "Analysis finished: {} ({:.1}/10)",
                    summary.report.recommendation.label(),
                    summary.report.risk_score
                ))
                .await;
        } else {
            spinner.error("Analysis ended without a usable verdict").await;
        }

        if json {
            println!("{}", serde_json::to_string_pretty(&summary.report)?);
        } else {
            let verbose = config.output.verbose && !no_verbose;
            ReportPrinter::print_report(&summary, verbose);
        }

        if config.output.save_reports {
            if let Err(e) = ReportBuilder::save_report(&summary.report, &config.output) {
                log::warn!("⚠️ Could not save the report: {}", e);
            }
        }

        Ok(())
    }

    async fn init_command(&self) -> SitecheckResult<()> {
        log::info!("🚀 Initializing sitecheck configuration...");

        match ConfigManager::create_sample_config() {
            Ok(_) => {
                log::info!("📝 Edit the file to adjust weights, timeouts and API settings.");
                log::info!("🔧 Set ANTHROPIC_API_KEY to enable AI-backed analysis.");
            }
            Err(e) => {
                log::error!("❌ Failed to create configuration: {}", e);
                return Err(e);
            }
        }

        Ok(())
    }

    async fn validate_command(&self) -> SitecheckResult<()> {
        let path = ConfigManager::config_path()?;
        log::info!("🔍 Validating {}", path.display());

        let config = ConfigManager::load()?;
        match ConfigManager::validate_config(&config) {
            Ok(()) => {
                log::info!("✅ Configuration is valid");
                Ok(())
            }
            Err(problems) => {
                for problem in &problems {
                    eprintln!("❌ {}", problem);
                }
                Err(SitecheckError::config_error(
                    "configuration is invalid",
                    None,
                    Some("fix the fields listed above"),
                ))
            }
        }
    }

    fn parse_weights(raw: &str) -> SitecheckResult<FusionConfig> {
        let parts: Vec<&str> = raw.split(',').map(|part| part.trim()).collect();
        if parts.len() != 3 {
            return Err(SitecheckError::user_input_error(
                raw,
                "three comma-separated weights: content,visual,reputation",
                "example: --weights 0.5,0.2,0.3",
            ));
        }

        let mut values = [0.0f64; 3];
        for (i, part) in parts.iter().enumerate() {
            values[i] = part.parse().map_err(|_| {
                SitecheckError::user_input_error(part, "a number", "example: --weights 0.5,0.2,0.3")
            })?;
        }

        let weights = FusionConfig::new(values[0], values[1], values[2]);
        let problems = weights.problems();
        if !problems.is_empty() {
            return Err(SitecheckError::user_input_error(
                raw,
                "weights that are non-negative and sum to 1.0",
                &problems.join("; "),
            ));
        }

        Ok(weights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_parse_with_optional_spaces() {
        let weights = CommandRunner::parse_weights("0.5, 0.2,0.3").unwrap();
        assert_eq!(weights.content_weight, 0.5);
        assert_eq!(weights.visual_weight, 0.2);
        assert_eq!(weights.reputation_weight, 0.3);
    }

    #[test]
    fn test_wrong_arity_is_rejected() {
        assert!(CommandRunner::parse_weights("0.5,0.5").is_err());
        assert!(CommandRunner::parse_weights("0.25,0.25,0.25,0.25").is_err());
    }

    #[test]
    fn test_non_numeric_weight_is_rejected() {
        assert!(CommandRunner::parse_weights("a,b,c").is_err());
    }

    #[test]
    fn test_invalid_weight_table_is_rejected() {
        assert!(CommandRunner::parse_weights("0.9,0.9,0.9").is_err());
        assert!(CommandRunner::parse_weights("1.3,-0.3,0.0").is_err());
    }

    #[test]
    fn test_zero_weight_is_allowed_when_the_sum_holds() {
        let weights = CommandRunner::parse_weights("0.7,0.0,0.3").unwrap();
        assert_eq!(weights.visual_weight, 0.0);
    }
}
