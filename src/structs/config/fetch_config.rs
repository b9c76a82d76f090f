use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FetchConfig {
    #[serde(default = "ConfigHelper::default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    #[serde(default = "ConfigHelper::default_user_agent")]
    pub user_agent: String,

    #[serde(default = "ConfigHelper::default_max_links")]
    pub max_links: usize,

    #[serde(default = "ConfigHelper::default_max_text_chars")]
    pub max_text_chars: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: ConfigHelper::default_request_timeout_secs(),
            user_agent: ConfigHelper::default_user_agent(),
            max_links: ConfigHelper::default_max_links(),
            max_text_chars: ConfigHelper::default_max_text_chars(),
        }
    }
}
