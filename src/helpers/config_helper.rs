pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_content_weight() -> f64 {
        0.4
    }

    pub fn default_visual_weight() -> f64 {
        0.3
    }

    pub fn default_reputation_weight() -> f64 {
        0.3
    }

    pub fn default_analyzer_timeout_secs() -> u64 {
        20
    }

    pub fn default_max_attempts() -> u32 {
        3
    }

    pub fn default_initial_backoff_ms() -> u64 {
        500
    }

    pub fn default_pipeline_deadline_secs() -> u64 {
        60
    }

    pub fn default_request_timeout_secs() -> u64 {
        15
    }

    pub fn default_user_agent() -> String {
        "Mozilla/5.0 (compatible; sitecheck/0.2)".to_string()
    }

    pub fn default_max_links() -> usize {
        50
    }

    pub fn default_max_text_chars() -> usize {
        10_000
    }

    pub fn default_ai_base_url() -> String {
        "https://api.anthropic.com/v1".to_string()
    }

    pub fn default_model() -> String {
        "claude-3-5-sonnet-20241022".to_string()
    }

    pub fn default_max_tokens() -> u32 {
        1024
    }

    pub fn default_temperature() -> f32 {
        0.0
    }

    pub fn default_reputation_timeout_secs() -> u64 {
        10
    }

    pub fn default_ai_key_env() -> Option<String> {
        Some("ANTHROPIC_API_KEY".to_string())
    }

    pub fn default_reputation_key_env() -> Option<String> {
        Some("SITECHECK_REPUTATION_API_KEY".to_string())
    }

    pub fn default_save_reports() -> bool {
        true
    }

    pub fn default_verbose() -> bool {
        true
    }
}
