use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct OutputConfig {
    #[serde(default = "ConfigHelper::default_save_reports")]
    pub save_reports: bool,

    /// Defaults to `~/.sitecheck/reports` when unset.
    #[serde(default)]
    pub reports_dir: Option<String>,

    #[serde(default = "ConfigHelper::default_verbose")]
    pub verbose: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            save_reports: ConfigHelper::default_save_reports(),
            reports_dir: None,
            verbose: ConfigHelper::default_verbose(),
        }
    }
}
