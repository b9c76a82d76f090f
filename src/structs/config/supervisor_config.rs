use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SupervisorConfig {
    /// Deadline for one supervised analyzer call, retries included.
    #[serde(default = "ConfigHelper::default_analyzer_timeout_secs")]
    pub analyzer_timeout_secs: u64,

    #[serde(default = "ConfigHelper::default_max_attempts")]
    pub max_attempts: u32,

    #[serde(default = "ConfigHelper::default_initial_backoff_ms")]
    pub initial_backoff_ms: u64,

    /// Deadline for the whole pipeline join.
    #[serde(default = "ConfigHelper::default_pipeline_deadline_secs")]
    pub pipeline_deadline_secs: u64,
}

impl Default for SupervisorConfig {
    fn default() -> Self {
        Self {
            analyzer_timeout_secs: ConfigHelper::default_analyzer_timeout_secs(),
            max_attempts: ConfigHelper::default_max_attempts(),
            initial_backoff_ms: ConfigHelper::default_initial_backoff_ms(),
            pipeline_deadline_secs: ConfigHelper::default_pipeline_deadline_secs(),
        }
    }
}
