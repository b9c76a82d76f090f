use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ReputationConfig {
    /// Empty means no external reputation service is configured and
    /// the analyzer scores from domain shape alone.
    #[serde(default)]
    pub api_base_url: String,

    #[serde(default = "ConfigHelper::default_reputation_key_env")]
    pub api_key_env: Option<String>,

    #[serde(default = "ConfigHelper::default_reputation_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for ReputationConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            api_key_env: ConfigHelper::default_reputation_key_env(),
            request_timeout_secs: ConfigHelper::default_reputation_timeout_secs(),
        }
    }
}
