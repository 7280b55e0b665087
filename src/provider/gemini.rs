//! Google Gemini `generateContent` client.

use super::{clean_statement, QuoteProvider};
use crate::error::ProviderError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

const PRIMARY_PROMPT: &str = r#"Write one wisdom quote about life, knowledge, or human nature. For example:
"Real wisdom begins with knowing our limits; real growth begins when we face our fears; and real peace begins when we accept what we cannot change."

Requirements:
- Plain, direct statements about life
- No metaphors or ornate language
- Three connected statements
- Practical wisdom
- Between 25 and 35 words
- Reply with the quote only"#;

const TRANSLATION_PROMPT: &str = r#"Translate the quote below into Modern Standard Arabic (الفصحى), following this example:
English: "Real wisdom begins with knowing our limits; real growth begins when we face our fears; and real peace begins when we accept what we cannot change."
Arabic: "الحكمة الحقيقية تبدأ بمعرفة حدودنا؛ والنمو الحقيقي يبدأ حين نواجه مخاوفنا؛ والسلام الحقيقي يبدأ حين نتقبل ما لا نستطيع تغييره."

Quote to translate:
"{source}"

Requirements:
- Clear Modern Standard Arabic (الفصحى)
- Keep the plain, direct style
- Separate the ideas with the Arabic semicolon (؛)
- Keep the practical meaning
- Reply with the Arabic translation only"#;

const PING_PROMPT: &str = "Hello, please respond with 'API is working' if you receive this message.";

/// Sampling parameters for one kind of request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    pub max_output_tokens: u32,
}

/// High temperature for variety.
pub const PRIMARY_CONFIG: GenerationConfig = GenerationConfig {
    temperature: 0.9,
    top_k: Some(40),
    top_p: Some(0.95),
    max_output_tokens: 150,
};

/// Low temperature to stay close to the source text.
pub const TRANSLATION_CONFIG: GenerationConfig = GenerationConfig {
    temperature: 0.3,
    top_k: Some(40),
    top_p: Some(0.95),
    max_output_tokens: 200,
};

pub const PING_CONFIG: GenerationConfig = GenerationConfig {
    temperature: 0.1,
    top_k: None,
    top_p: None,
    max_output_tokens: 10,
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl GenerateContentRequest {
    fn user_prompt(prompt: &str, config: GenerationConfig) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: config,
        }
    }
}

impl GenerateContentResponse {
    /// Text parts of the first candidate, concatenated.
    fn into_text(self) -> String {
        self.candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| content.parts.into_iter().map(|part| part.text).collect())
            .unwrap_or_default()
    }
}

pub fn translation_prompt(source: &str) -> String {
    TRANSLATION_PROMPT.replace("{source}", source)
}

pub struct GeminiProvider {
    client: reqwest::Client,
    /// `None` means the client was never initialized.
    api_key: Option<String>,
    model: String,
    base_url: String,
}

impl GeminiProvider {
    pub fn new(api_key: Option<String>, model: impl Into<String>, base_url: impl Into<String>) -> Self {
        let api_key = api_key.filter(|key| !key.trim().is_empty());
        if api_key.is_none() {
            log::warn!("Gemini API key not found; every request will use fallback thoughts");
        }
        let base_url: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            api_key,
            model: model.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.api_key.is_some()
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    async fn generate(&self, prompt: &str, config: GenerationConfig) -> Result<String, ProviderError> {
        let api_key = self.api_key.as_deref().ok_or(ProviderError::NotInitialized)?;

        let request = GenerateContentRequest::user_prompt(prompt, config);

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body: GenerateContentResponse = response.json().await?;
        let text = body.into_text();

        if text.trim().is_empty() {
            return Err(ProviderError::EmptyResponse);
        }
        Ok(text)
    }
}

#[async_trait]
impl QuoteProvider for GeminiProvider {
    async fn fetch_primary_statement(&self) -> Result<String, ProviderError> {
        let raw = self.generate(PRIMARY_PROMPT, PRIMARY_CONFIG).await?;
        let thought = clean_statement(&raw)?;
        log::debug!("Generated primary statement: {}", thought);
        Ok(thought)
    }

    async fn fetch_translated_statement(&self, source: &str) -> Result<String, ProviderError> {
        let raw = self.generate(&translation_prompt(source), TRANSLATION_CONFIG).await?;
        clean_statement(&raw)
    }

    async fn ping(&self) -> Result<String, ProviderError> {
        let raw = self.generate(PING_PROMPT, PING_CONFIG).await?;
        Ok(raw.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_body_layout() {
        let request = GenerateContentRequest::user_prompt("Say something wise", PRIMARY_CONFIG);
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "Say something wise");

        let config = &body["generationConfig"];
        assert_eq!(config["topK"], 40);
        assert_eq!(config["maxOutputTokens"], 150);
        assert!((config["temperature"].as_f64().unwrap() - 0.9).abs() < 1e-6);
        assert!((config["topP"].as_f64().unwrap() - 0.95).abs() < 1e-6);
        assert!(config.get("top_k").is_none());
    }

    #[test]
    fn test_ping_config_omits_sampling_limits() {
        let request = GenerateContentRequest::user_prompt(PING_PROMPT, PING_CONFIG);
        let config = serde_json::to_value(&request).unwrap()["generationConfig"].clone();

        assert!(config.get("topK").is_none());
        assert!(config.get("topP").is_none());
        assert_eq!(config["maxOutputTokens"], 10);
    }

    #[test]
    fn test_response_parts_are_joined() {
        let body: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [
                {"content": {"role": "model", "parts": [{"text": "Patience is "}, {"text": "a quiet strength."}]}},
                {"content": {"parts": [{"text": "ignored"}]}}
            ]
        }))
        .unwrap();

        assert_eq!(body.into_text(), "Patience is a quiet strength.");
    }

    #[test]
    fn test_response_without_candidates_is_blank() {
        let body: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(body.into_text(), "");

        let body: GenerateContentResponse =
            serde_json::from_value(json!({"candidates": [{"finishReason": "SAFETY"}]})).unwrap();
        assert_eq!(body.into_text(), "");
    }
}
