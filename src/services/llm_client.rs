use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use reqwest::Client;
use crate::config::constants::ANTHROPIC_API_VERSION;
use crate::enums::analyzer_failure::AnalyzerFailure;
use crate::structs::ai::chat_message::ChatMessage;
use crate::structs::ai::chat_request::ChatRequest;
use crate::structs::ai::chat_response::ChatResponse;
use crate::structs::ai::image_source::ImageSource;
use crate::structs::config::ai_config::AiConfig;

pub struct LlmClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl LlmClient {
    /// Builds a client when the configured key variable is set and
    /// non-empty. Callers treat `None` as "run heuristics instead".
    pub fn from_env(config: &AiConfig) -> Option<Self> {
        let key_var = config.api_key_env.as_deref()?;
        let api_key = std::env::var(key_var)
            .ok()
            .filter(|key| !key.trim().is_empty())?;

        Some(Self {
            client: Client::new(),
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        })
    }

    pub async fn complete(&self, system_prompt: &str, user_prompt: &str) -> Result<String, AnalyzerFailure> {
        let messages = vec![ChatMessage::user_text(user_prompt.to_string())];
        self.send_messages(system_prompt, messages).await
    }

    pub async fn complete_with_image(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        image: &[u8],
    ) -> Result<String, AnalyzerFailure> {
        let source = ImageSource::base64(detect_image_mime(image), BASE64.encode(image));
        let messages = vec![ChatMessage::user_image_and_text(source, user_prompt.to_string())];
        self.send_messages(system_prompt, messages).await
    }

    async fn send_messages(
        &self,
        system_prompt: &str,
        messages: Vec<ChatMessage>,
    ) -> Result<String, AnalyzerFailure> {
        let url = format!("{}/messages", self.base_url);
        let request_body = ChatRequest {
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            system: system_prompt.to_string(),
            messages,
        };

        log::debug!("📦 Requesting completion from {}", self.model);

        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_API_VERSION)
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| AnalyzerFailure::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(Self::map_status(status.as_u16(), error_text));
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| AnalyzerFailure::MalformedResponse(e.to_string()))?;

        body.first_text()
            .map(|text| text.to_string())
            .ok_or_else(|| AnalyzerFailure::MalformedResponse("completion contained no text block".to_string()))
    }

    fn map_status(status: u16, detail: String) -> AnalyzerFailure {
        match status {
            401 | 403 => AnalyzerFailure::Authentication(detail),
            429 => AnalyzerFailure::RateLimited(detail),
            500..=599 => AnalyzerFailure::Network(format!("HTTP {}: {}", status, detail)),
            _ => AnalyzerFailure::MalformedResponse(format!("HTTP {}: {}", status, detail)),
        }
    }
}

/// Detect image MIME type from magic bytes.
fn detect_image_mime(data: &[u8]) -> &'static str {
    if data.starts_with(&[0x89, 0x50, 0x4E, 0x47]) {
        "image/png"
    } else if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
        "image/jpeg"
    } else if data.starts_with(b"RIFF") && data.get(8..12) == Some(b"WEBP".as_slice()) {
        "image/webp"
    } else if data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a") {
        "image/gif"
    } else {
        "image/png"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_image_mime() {
        assert_eq!(detect_image_mime(&[0x89, 0x50, 0x4E, 0x47]), "image/png");
        assert_eq!(detect_image_mime(&[0xFF, 0xD8, 0xFF]), "image/jpeg");
        assert_eq!(detect_image_mime(b"GIF89a trailing"), "image/gif");
        assert_eq!(detect_image_mime(b"unknown bytes"), "image/png");
    }

    #[test]
    fn test_no_key_variable_means_no_client() {
        let config = AiConfig {
            api_key_env: None,
            ..AiConfig::default()
        };
        assert!(LlmClient::from_env(&config).is_none());
    }

    #[test]
    fn test_status_mapping_classifies_retryability() {
        assert!(matches!(
            LlmClient::map_status(401, "bad key".to_string()),
            AnalyzerFailure::Authentication(_)
        ));
        assert!(LlmClient::map_status(429, "slow down".to_string()).is_transient());
        assert!(LlmClient::map_status(503, "overloaded".to_string()).is_transient());
        assert!(!LlmClient::map_status(400, "bad request".to_string()).is_transient());
    }
}
