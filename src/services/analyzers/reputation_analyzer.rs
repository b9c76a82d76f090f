use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

use crate::config::constants::{duration_secs, SUSPICIOUS_TLDS};
use crate::enums::analyzer_failure::AnalyzerFailure;
use crate::enums::analyzer_kind::AnalyzerKind;
use crate::structs::analyzer_verdict::AnalyzerVerdict;
use crate::structs::config::reputation_config::ReputationConfig;
use crate::structs::fetched_content::FetchedContent;
use crate::structs::reputation_record::ReputationRecord;
use crate::traits::analyzer::Analyzer;

const YOUNG_DOMAIN_DAYS: u32 = 30;

/// Scores the domain itself. With a reputation service configured the
/// verdict comes from its record; otherwise the host name shape is
/// scored locally.
pub struct ReputationAnalyzer {
    config: ReputationConfig,
    api_key: Option<String>,
    client: Client,
}

impl ReputationAnalyzer {
    pub fn new(config: ReputationConfig) -> Self {
        let api_key = config
            .api_key_env
            .as_deref()
            .and_then(|var| std::env::var(var).ok())
            .filter(|key| !key.is_empty());

        Self {
            config,
            api_key,
            client: Client::new(),
        }
    }

    fn service_key(&self) -> Option<&str> {
        if self.config.api_base_url.is_empty() {
            return None;
        }
        self.api_key.as_deref()
    }

    async fn lookup(&self, host: &str, api_key: &str) -> Result<AnalyzerVerdict, AnalyzerFailure> {
        let url = format!(
            "{}/domains/{}",
            self.config.api_base_url.trim_end_matches('/'),
            host
        );

        let response = self
            .client
            .get(&url)
            .header("x-api-key", api_key)
            .timeout(duration_secs(self.config.request_timeout_secs))
            .send()
            .await
            .map_err(|error| AnalyzerFailure::Network(error.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(map_status(status.as_u16(), detail));
        }

        let record = response
            .json::<ReputationRecord>()
            .await
            .map_err(|error| AnalyzerFailure::MalformedResponse(error.to_string()))?;

        Ok(Self::record_verdict(host, &record))
    }

    fn record_verdict(host: &str, record: &ReputationRecord) -> AnalyzerVerdict {
        let mut indicators: Vec<String> = Vec::new();
        let mut legitimate: Vec<String> = Vec::new();

        if record.blocklisted {
            indicators.push(format!("{} is present on a blocklist", host));
        }
        for category in &record.categories {
            indicators.push(format!("Flagged category: {}", category));
        }
        match record.domain_age_days {
            Some(age) if age < YOUNG_DOMAIN_DAYS => {
                indicators.push(format!("Domain registered only {} days ago", age));
            }
            Some(age) => {
                legitimate.push(format!("Domain registered {} days ago", age));
            }
            None => {}
        }
        if indicators.is_empty() {
            legitimate.push("No reputation flags on record".to_string());
        }

        let findings = json!({
            "indicators": indicators,
            "legitimate_indicators": legitimate,
            "brand_impersonation": Value::Null,
            "explanation": format!("Reputation service verdict for {}", host),
        });

        AnalyzerVerdict::new(record.risk_score, record.confidence, findings)
    }

    fn heuristic_verdict(host: &str) -> AnalyzerVerdict {
        let mut indicators: Vec<String> = Vec::new();
        let mut score: f64 = 0.0;

        if host.parse::<std::net::IpAddr>().is_ok() {
            indicators.push("Site served from a raw IP address".to_string());
            score += 3.0;
        } else {
            if host.split('.').any(|label| label.starts_with("xn--")) {
                indicators.push("Punycode label can disguise look-alike characters".to_string());
                score += 1.5;
            }

            let digits = host.chars().filter(|c| c.is_ascii_digit()).count();
            let alphanumerics = host.chars().filter(|c| c.is_ascii_alphanumeric()).count();
            if digits >= 4 && digits as f64 / alphanumerics as f64 > 0.3 {
                indicators.push("Unusually digit-heavy host name".to_string());
                score += 1.5;
            }

            if let Some(tld) = host.rsplit('.').next() {
                if SUSPICIOUS_TLDS.contains(&tld) {
                    indicators.push(format!("TLD .{} is common in abuse feeds", tld));
                    score += 1.5;
                }
            }

            if host.split('.').count() > 4 {
                indicators.push("Deeply nested subdomains".to_string());
                score += 1.5;
            }

            if host.matches('-').count() >= 3 {
                indicators.push("Hyphen-stuffed host name".to_string());
                score += 1.5;
            }
        }

        let legitimate: Vec<String> = if indicators.is_empty() {
            vec!["Domain shape shows no obvious abuse patterns".to_string()]
        } else {
            vec![]
        };

        let findings = json!({
            "indicators": indicators,
            "legitimate_indicators": legitimate,
            "brand_impersonation": Value::Null,
            "explanation": format!("Domain-shape heuristics found {} risk signals", indicators.len()),
        });

        AnalyzerVerdict::new(score.min(10.0), 0.6, findings)
    }
}

#[async_trait]
impl Analyzer for ReputationAnalyzer {
    fn kind(&self) -> AnalyzerKind {
        AnalyzerKind::Reputation
    }

    async fn evaluate(&self, content: &FetchedContent) -> Result<AnalyzerVerdict, AnalyzerFailure> {
        let host = content.domain.host.as_str();

        match self.service_key() {
            Some(api_key) => self.lookup(host, api_key).await,
            None => {
                log::debug!("🔧 No reputation service configured, scoring {} by domain shape", host);
                Ok(Self::heuristic_verdict(host))
            }
        }
    }
}

fn map_status(status: u16, detail: String) -> AnalyzerFailure {
    match status {
        401 | 403 => AnalyzerFailure::Authentication(detail),
        429 => AnalyzerFailure::RateLimited(detail),
        500..=599 => AnalyzerFailure::Network(format!("HTTP {}: {}", status, detail)),
        _ => AnalyzerFailure::MalformedResponse(format!("HTTP {}: {}", status, detail)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_host_scores_zero() {
        let verdict = ReputationAnalyzer::heuristic_verdict("docs.example.com");
        assert_eq!(verdict.sub_score, 0.0);
        assert_eq!(verdict.confidence, 0.6);
        assert_eq!(
            verdict.findings["legitimate_indicators"][0],
            "Domain shape shows no obvious abuse patterns"
        );
    }

    #[test]
    fn test_raw_ip_host_outweighs_single_shape_signals() {
        let verdict = ReputationAnalyzer::heuristic_verdict("203.0.113.7");
        assert_eq!(verdict.sub_score, 3.0);
        assert_eq!(verdict.findings["indicators"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_shape_signals_accumulate() {
        // hyphen stuffing + suspicious TLD
        let verdict = ReputationAnalyzer::heuristic_verdict("secure-login-verify-account.example.tk");
        assert_eq!(verdict.sub_score, 3.0);

        let verdict = ReputationAnalyzer::heuristic_verdict("a1b2c3d4.com");
        assert_eq!(verdict.sub_score, 1.5);
        assert_eq!(verdict.findings["indicators"][0], "Unusually digit-heavy host name");
    }

    #[test]
    fn test_punycode_and_nesting_are_flagged() {
        let verdict = ReputationAnalyzer::heuristic_verdict("xn--paypa1.com");
        assert_eq!(verdict.sub_score, 1.5);
        assert_eq!(
            verdict.findings["indicators"][0],
            "Punycode label can disguise look-alike characters"
        );

        let verdict = ReputationAnalyzer::heuristic_verdict("a.b.c.d.example.com");
        assert_eq!(verdict.sub_score, 1.5);
        assert_eq!(verdict.findings["indicators"][0], "Deeply nested subdomains");
    }

    #[test]
    fn test_record_findings_cover_blocklist_categories_and_age() {
        let record = ReputationRecord {
            risk_score: 9.2,
            confidence: 0.97,
            categories: vec!["phishing".to_string()],
            blocklisted: true,
            domain_age_days: Some(4),
        };

        let verdict = ReputationAnalyzer::record_verdict("evil.example.com", &record);
        assert_eq!(verdict.sub_score, 9.2);
        assert_eq!(verdict.confidence, 0.97);

        let indicators = verdict.findings["indicators"].as_array().unwrap();
        assert_eq!(indicators.len(), 3);
        assert_eq!(indicators[0], "evil.example.com is present on a blocklist");
        assert_eq!(indicators[1], "Flagged category: phishing");
        assert_eq!(indicators[2], "Domain registered only 4 days ago");
    }

    #[test]
    fn test_established_clean_record_reads_as_legitimate() {
        let record = ReputationRecord {
            risk_score: 0.5,
            confidence: 0.9,
            categories: vec![],
            blocklisted: false,
            domain_age_days: Some(4200),
        };

        let verdict = ReputationAnalyzer::record_verdict("example.com", &record);
        let legitimate = verdict.findings["legitimate_indicators"].as_array().unwrap();
        assert_eq!(legitimate[0], "Domain registered 4200 days ago");
        assert!(verdict.findings["indicators"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_service_key_requires_base_url_and_key() {
        let keyless = ReputationAnalyzer {
            config: ReputationConfig {
                api_base_url: "https://reputation.example.com/v1".to_string(),
                ..ReputationConfig::default()
            },
            api_key: None,
            client: Client::new(),
        };
        assert!(keyless.service_key().is_none());

        let unconfigured = ReputationAnalyzer {
            config: ReputationConfig::default(),
            api_key: Some("k".to_string()),
            client: Client::new(),
        };
        assert!(unconfigured.service_key().is_none());

        let keyed = ReputationAnalyzer {
            config: ReputationConfig {
                api_base_url: "https://reputation.example.com/v1".to_string(),
                ..ReputationConfig::default()
            },
            api_key: Some("k".to_string()),
            client: Client::new(),
        };
        assert_eq!(keyed.service_key(), Some("k"));
    }

    #[test]
    fn test_status_mapping_drives_retry_classes() {
        assert!(matches!(map_status(429, "slow down".into()), AnalyzerFailure::RateLimited(_)));
        assert!(matches!(map_status(503, "outage".into()), AnalyzerFailure::Network(_)));
        assert!(matches!(map_status(401, "bad key".into()), AnalyzerFailure::Authentication(_)));
        assert!(matches!(map_status(404, "no record".into()), AnalyzerFailure::MalformedResponse(_)));

        assert!(map_status(429, String::new()).is_transient());
        assert!(!map_status(401, String::new()).is_transient());
    }
}
