use crate::structs::config::fusion_config::FusionConfig;

/// Per-run overrides on top of the loaded configuration.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub weights: Option<FusionConfig>,
    pub analyzer_timeout_secs: Option<u64>,
    pub pipeline_deadline_secs: Option<u64>,
    pub screenshot_path: Option<String>,
}
