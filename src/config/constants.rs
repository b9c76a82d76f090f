use std::time::Duration;

pub const CONFIG_DIR_NAME: &str = ".sitecheck";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const REPORTS_DIR_NAME: &str = "reports";

pub const ANTHROPIC_API_VERSION: &str = "2023-06-01";

pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Wording that phishing pages lean on to rush the visitor.
pub const SUSPICIOUS_KEYWORDS: &[&str] = &[
    "urgent",
    "verify",
    "suspended",
    "limited time",
    "act now",
    "confirm",
    "update",
    "security alert",
    "locked",
    "expires",
];

/// TLDs that show up in abuse feeds far more often than in
/// legitimate traffic.
pub const SUSPICIOUS_TLDS: &[&str] = &["tk", "ml", "ga", "cf", "gq", "top", "click", "zip", "mov"];

pub fn duration_secs(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}

pub fn duration_millis(milliseconds: u64) -> Duration {
    Duration::from_millis(milliseconds)
}
