use std::time::{Duration, Instant};
use async_trait::async_trait;
use chrono::Utc;
use once_cell::sync::Lazy;
use reqwest::Client;
use crate::config::constants::duration_secs;
use crate::enums::fetch_error::FetchError;
use crate::helpers::html_extractor::HtmlExtractor;
use crate::helpers::url_helper::UrlHelper;
use crate::structs::config::fetch_config::FetchConfig;
use crate::structs::domain_metadata::DomainMetadata;
use crate::structs::fetched_content::FetchedContent;
use crate::traits::content_fetcher::ContentFetcher;

/// Raw HTML kept per page. Everything past this point adds no signal
/// for the analyzers.
const MAX_HTML_BYTES: usize = 262_144;

static FETCH_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .connect_timeout(Duration::from_secs(10))
        .redirect(reqwest::redirect::Policy::limited(5))
        .build()
        .expect("Failed to create fetch HTTP client")
});

pub struct PageFetcher {
    config: FetchConfig,
    screenshot_path: Option<String>,
}

impl PageFetcher {
    pub fn new(config: FetchConfig, screenshot_path: Option<String>) -> Self {
        Self {
            config,
            screenshot_path,
        }
    }

    fn map_request_error(url: &str, timeout_secs: u64, error: reqwest::Error) -> FetchError {
        if error.is_timeout() {
            FetchError::Timeout {
                url: url.to_string(),
                seconds: timeout_secs,
            }
        } else {
            FetchError::Connection {
                url: url.to_string(),
                reason: error.to_string(),
            }
        }
    }
}

#[async_trait]
impl ContentFetcher for PageFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedContent, FetchError> {
        let normalized = UrlHelper::normalize(url);
        let parsed = reqwest::Url::parse(&normalized).map_err(|e| FetchError::InvalidUrl {
            url: normalized.clone(),
            reason: e.to_string(),
        })?;

        if parsed.host_str().is_none() {
            return Err(FetchError::InvalidUrl {
                url: normalized,
                reason: "URL has no host".to_string(),
            });
        }

        log::debug!("🔍 Fetching {}", parsed);
        let started = Instant::now();

        let response = FETCH_CLIENT
            .get(parsed)
            .header("User-Agent", &self.config.user_agent)
            .timeout(duration_secs(self.config.request_timeout_secs))
            .send()
            .await
            .map_err(|e| Self::map_request_error(&normalized, self.config.request_timeout_secs, e))?;

        let response_time_ms = started.elapsed().as_millis() as u64;
        let status = response.status().as_u16();
        if status >= 400 {
            return Err(FetchError::HttpStatus {
                url: normalized,
                status,
            });
        }

        let final_url = response.url().clone();
        let html = response.text().await.map_err(|e| FetchError::Connection {
            url: normalized.clone(),
            reason: e.to_string(),
        })?;
        let html = cap_html(html, MAX_HTML_BYTES);

        let domain = DomainMetadata {
            host: final_url.host_str().unwrap_or_default().to_string(),
            https: final_url.scheme() == "https",
            status_code: status,
            response_time_ms,
        };

        log::debug!(
            "📄 {} answered {} in {}ms ({} bytes)",
            domain.host,
            status,
            response_time_ms,
            html.len()
        );

        Ok(FetchedContent {
            url: final_url.to_string(),
            title: HtmlExtractor::title(&html),
            text: HtmlExtractor::visible_text(&html, self.config.max_text_chars),
            meta_description: HtmlExtractor::meta_description(&html),
            meta_keywords: HtmlExtractor::meta_keywords(&html),
            links: HtmlExtractor::links(&html, self.config.max_links),
            forms: HtmlExtractor::forms(&html),
            screenshot_ref: self.screenshot_path.clone(),
            domain,
            fetched_at: Utc::now(),
            html,
        })
    }
}

fn cap_html(mut html: String, max_bytes: usize) -> String {
    if html.len() <= max_bytes {
        return html;
    }

    let mut cut = max_bytes;
    while !html.is_char_boundary(cut) {
        cut -= 1;
    }
    html.truncate(cut);
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unparsable_url_is_rejected_without_network() {
        let fetcher = PageFetcher::new(FetchConfig::default(), None);
        let result = fetcher.fetch("not a real url").await;
        assert!(matches!(result, Err(FetchError::InvalidUrl { .. })));
    }

    #[test]
    fn test_html_cap_respects_char_boundaries() {
        let html = "é".repeat(10);
        let capped = cap_html(html, 5);
        assert_eq!(capped.chars().count(), 2);
        assert!(capped.len() <= 5);
    }

    #[test]
    fn test_short_html_is_untouched() {
        assert_eq!(cap_html("<p>hi</p>".to_string(), 100), "<p>hi</p>");
    }
}
