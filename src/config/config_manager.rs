use std::fs;
use std::path::PathBuf;
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::errors::{SitecheckError, SitecheckResult};
use crate::structs::config::config::Config;

const SAMPLE_CONFIG: &str = r#"# Sitecheck Configuration

# Result fusion weights. Must be non-negative and sum to 1.0.
# An analyzer weighted 0 is skipped entirely.
[fusion]
content_weight = 0.4
visual_weight = 0.3
reputation_weight = 0.3

# Analyzer supervision
[supervisor]
# Per-analyzer deadline in seconds, retries included
analyzer_timeout_secs = 20
# Attempts per analyzer (first try plus retries)
max_attempts = 3
# First retry delay; doubles on every further retry
initial_backoff_ms = 500
# Whole-pipeline deadline in seconds
pipeline_deadline_secs = 60

# Page fetching
[fetch]
request_timeout_secs = 15
user_agent = "Mozilla/5.0 (compatible; sitecheck/0.2)"
max_links = 50
max_text_chars = 10000

# AI backend shared by the content and visual analyzers.
# Without the API key both analyzers fall back to rule-based scoring.
[ai]
base_url = "https://api.anthropic.com/v1"
model = "claude-3-5-sonnet-20241022"
max_tokens = 1024
temperature = 0.0
api_key_env = "ANTHROPIC_API_KEY"

# Domain reputation service (optional). Leave the base URL empty to
# score from domain shape alone.
[reputation]
api_base_url = ""
api_key_env = "SITECHECK_REPUTATION_API_KEY"
request_timeout_secs = 10

# Report output
[output]
save_reports = true
# reports_dir = "/path/for/reports"   # default: ~/.sitecheck/reports
verbose = true
"#;

pub struct ConfigManager;

impl ConfigManager {
    pub fn config_dir() -> SitecheckResult<PathBuf> {
        dirs::home_dir()
            .map(|d| d.join(CONFIG_DIR_NAME))
            .ok_or_else(|| {
                SitecheckError::config_error(
                    "could not resolve the home directory",
                    None,
                    Some("set $HOME and retry"),
                )
            })
    }

    pub fn config_path() -> SitecheckResult<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    pub fn load() -> SitecheckResult<Config> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            log::info!("📋 Loading config from: {}", config_path.display());
            let content = fs::read_to_string(&config_path).map_err(|e| {
                SitecheckError::config_file_error(&config_path.display().to_string(), &e.to_string())
            })?;
            let config: Config = toml::from_str(&content).map_err(|e| {
                SitecheckError::config_file_error(&config_path.display().to_string(), e.message())
            })?;
            return Ok(config);
        }

        Ok(Config::default())
    }

    pub fn create_sample_config() -> SitecheckResult<()> {
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir)?;

        let config_path = Self::config_path()?;
        fs::write(&config_path, SAMPLE_CONFIG)?;
        log::info!("✅ Created sample config at: {}", config_path.display());
        Ok(())
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        errors.extend(config.fusion.problems());

        if config.supervisor.analyzer_timeout_secs == 0 {
            errors.push("supervisor.analyzer_timeout_secs must be greater than 0".to_string());
        }
        if config.supervisor.max_attempts == 0 {
            errors.push("supervisor.max_attempts must be greater than 0".to_string());
        }
        if config.supervisor.initial_backoff_ms == 0 {
            errors.push("supervisor.initial_backoff_ms must be greater than 0".to_string());
        }
        if config.supervisor.pipeline_deadline_secs < config.supervisor.analyzer_timeout_secs {
            errors.push(format!(
                "supervisor.pipeline_deadline_secs ({}) is shorter than analyzer_timeout_secs ({})",
                config.supervisor.pipeline_deadline_secs, config.supervisor.analyzer_timeout_secs
            ));
        }

        if config.fetch.request_timeout_secs == 0 {
            errors.push("fetch.request_timeout_secs must be greater than 0".to_string());
        }
        if config.fetch.max_text_chars == 0 {
            errors.push("fetch.max_text_chars must be greater than 0".to_string());
        }

        if config.ai.base_url.trim().is_empty() {
            errors.push("ai.base_url must not be empty".to_string());
        }
        if config.ai.model.trim().is_empty() {
            errors.push("ai.model must not be empty".to_string());
        }
        if config.ai.max_tokens == 0 {
            errors.push("ai.max_tokens must be greater than 0".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_config_parses_and_validates() {
        let config: Config = toml::from_str(SAMPLE_CONFIG).unwrap();
        assert!(ConfigManager::validate_config(&config).is_ok());
        assert_eq!(config.fusion.content_weight, 0.4);
        assert_eq!(config.supervisor.max_attempts, 3);
        assert_eq!(config.ai.api_key_env.as_deref(), Some("ANTHROPIC_API_KEY"));
    }

    #[test]
    fn test_partial_config_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[fusion]\ncontent_weight = 0.5\nvisual_weight = 0.25\nreputation_weight = 0.25\n").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let config: Config = toml::from_str(&content).unwrap();

        assert_eq!(config.fusion.content_weight, 0.5);
        assert_eq!(config.supervisor.analyzer_timeout_secs, 20);
        assert_eq!(config.fetch.max_links, 50);
        assert!(config.output.save_reports);
    }

    #[test]
    fn test_invalid_weights_fail_validation() {
        let mut config = Config::default();
        config.fusion.content_weight = 0.9;

        let errors = ConfigManager::validate_config(&config).unwrap_err();
        assert!(errors.iter().any(|e| e.contains("sum to 1.0")));
    }

    #[test]
    fn test_deadline_shorter_than_analyzer_timeout_fails_validation() {
        let mut config = Config::default();
        config.supervisor.pipeline_deadline_secs = 5;

        let errors = ConfigManager::validate_config(&config).unwrap_err();
        assert!(errors.iter().any(|e| e.contains("pipeline_deadline_secs")));
    }

    #[test]
    fn test_empty_config_is_valid_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(ConfigManager::validate_config(&config).is_ok());
    }
}
