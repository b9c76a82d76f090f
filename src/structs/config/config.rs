use serde::{Deserialize, Serialize};
use crate::structs::config::ai_config::AiConfig;
use crate::structs::config::fetch_config::FetchConfig;
use crate::structs::config::fusion_config::FusionConfig;
use crate::structs::config::output_config::OutputConfig;
use crate::structs::config::reputation_config::ReputationConfig;
use crate::structs::config::supervisor_config::SupervisorConfig;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub fusion: FusionConfig,

    #[serde(default)]
    pub supervisor: SupervisorConfig,

    #[serde(default)]
    pub fetch: FetchConfig,

    #[serde(default)]
    pub ai: AiConfig,

    #[serde(default)]
    pub reputation: ReputationConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fusion: FusionConfig::default(),
            supervisor: SupervisorConfig::default(),
            fetch: FetchConfig::default(),
            ai: AiConfig::default(),
            reputation: ReputationConfig::default(),
            output: OutputConfig::default(),
        }
    }
}
