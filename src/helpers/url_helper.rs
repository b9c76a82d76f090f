pub struct UrlHelper;

impl UrlHelper {
    /// Users rarely type the scheme; assume https when it is missing.
    pub fn normalize(url: &str) -> String {
        let trimmed = url.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            trimmed.to_string()
        } else {
            format!("https://{}", trimmed)
        }
    }

    pub fn host(url: &str) -> Option<String> {
        reqwest::Url::parse(url)
            .ok()
            .and_then(|u| u.host_str().map(|h| h.to_string()))
    }

    pub fn is_https(url: &str) -> bool {
        url.starts_with("https://")
    }
}
