//! Google AI Studio (Gemini) provider implementation
//!
//! Talks to the `generateContent` REST endpoint. Response decoding goes
//! through `serde_json::Value` rather than typed structs so that an answer
//! with an unexpected layout yields "no text" instead of a decode error.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error};

use crate::domain::{
    CompletionRequest, CompletionResponse, ContentBlock, LlmError, LlmProvider,
    ProviderCapabilities, ProviderInfo, StopReason,
};
use frigo_core::config::LlmConfig;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Google AI Studio (Gemini) provider
pub struct GoogleAIProvider {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
    timeout_seconds: u64,
}

impl GoogleAIProvider {
    /// Create a new Google AI provider
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        timeout_seconds: u64,
    ) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .map_err(|e| LlmError::Configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            model: model.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds,
        })
    }

    /// Create from application configuration.
    ///
    /// Fails with [`LlmError::Configuration`] when no API key is configured.
    pub fn from_config(config: &LlmConfig) -> Result<Self, LlmError> {
        let api_key = config
            .api_key()
            .ok_or_else(|| LlmError::Configuration("Gemini API key not configured".to_string()))?;

        Ok(Self::new(api_key, &config.default_model, config.timeout_seconds)?
            .with_base_url(&config.google_ai.base_url))
    }

    /// Create with custom base URL (for testing or proxies)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Build the API URL for a model endpoint
    fn build_url(&self, model: &str, endpoint: &str) -> String {
        format!(
            "{}/models/{}:{}?key={}",
            self.base_url, model, endpoint, self.api_key
        )
    }

    /// Convert our request format to Gemini's format
    fn to_gemini_request(&self, request: &CompletionRequest) -> GeminiRequest {
        let parts = request
            .parts
            .iter()
            .map(|block| match block {
                ContentBlock::Text(text) => GeminiPart::Text { text: text.clone() },
                ContentBlock::Image { mime_type, data } => GeminiPart::InlineData {
                    inline_data: GeminiInlineData {
                        mime_type: mime_type.clone(),
                        data: data.clone(),
                    },
                },
            })
            .collect();

        GeminiRequest {
            contents: vec![GeminiContent {
                role: "user",
                parts,
            }],
            generation_config: GeminiGenerationConfig {
                temperature: request.temperature,
                max_output_tokens: request.max_tokens,
                response_mime_type: request.json_mode.then_some("application/json"),
            },
        }
    }
}

/// Finish reasons Gemini reports when its safety filters stopped the answer
const BLOCKED_FINISH_REASONS: [&str; 4] = ["SAFETY", "PROHIBITED_CONTENT", "BLOCKLIST", "SPII"];

/// Convert a Gemini response body to our format.
///
/// An answer without text that Gemini reports as blocked, either through
/// `promptFeedback.blockReason` or a safety finish reason, becomes
/// [`LlmError::ContentFiltered`]. Any other text-less answer is returned
/// as-is and reads as "no text" downstream.
fn parse_gemini_response(body: &Value, model: &str) -> Result<CompletionResponse, LlmError> {
    let content: Vec<ContentBlock> = extract_text_parts(body)
        .into_iter()
        .map(ContentBlock::text)
        .collect();

    let finish_reason = body
        .pointer("/candidates/0/finishReason")
        .and_then(Value::as_str);

    if content.is_empty() {
        let blocked = body
            .pointer("/promptFeedback/blockReason")
            .and_then(Value::as_str)
            .or(finish_reason.filter(|reason| BLOCKED_FINISH_REASONS.contains(reason)));

        if let Some(reason) = blocked {
            return Err(LlmError::ContentFiltered {
                reason: reason.to_string(),
            });
        }
    }

    let stop_reason = match finish_reason {
        Some("STOP") => StopReason::EndTurn,
        Some("MAX_TOKENS") => StopReason::MaxTokens,
        _ => StopReason::Other,
    };

    Ok(CompletionResponse {
        model: model.to_string(),
        content,
        stop_reason,
    })
}

/// Collect the text carried by a Gemini answer.
///
/// Accepts a direct `text` attribute, `candidates[0].content.parts[*].text`,
/// or a bare `parts[*].text` list. Parts without text (inline data, function
/// calls) are skipped; anything else yields an empty list.
pub(crate) fn extract_text_parts(body: &Value) -> Vec<String> {
    if let Some(text) = body.get("text").and_then(Value::as_str) {
        return vec![text.to_string()];
    }

    let parts = body
        .pointer("/candidates/0/content/parts")
        .or_else(|| body.get("parts"))
        .and_then(Value::as_array);

    parts
        .map(|parts| {
            parts
                .iter()
                .filter_map(|part| part.get("text").and_then(Value::as_str))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

#[async_trait]
impl LlmProvider for GoogleAIProvider {
    fn info(&self) -> ProviderInfo {
        ProviderInfo {
            id: "google_ai",
            capabilities: ProviderCapabilities::multimodal(8192),
        }
    }

    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let model = request.model.as_deref().unwrap_or(&self.model);
        let url = self.build_url(model, "generateContent");
        let gemini_request = self.to_gemini_request(&request);

        debug!(
            model = model,
            with_image = request.has_image(),
            "Sending request to Google AI"
        );

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&gemini_request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LlmError::timeout(self.timeout_seconds)
                } else {
                    LlmError::from(e)
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            match status.as_u16() {
                429 => return Err(LlmError::rate_limited(text)),
                401 | 403 => return Err(LlmError::auth(text)),
                404 => return Err(LlmError::ModelNotFound(model.to_string())),
                400 => return Err(LlmError::InvalidRequest(text)),
                code if code >= 500 => return Err(LlmError::ServiceUnavailable(text)),
                _ => {}
            }

            error!(status = %status, "Google AI API error: {}", text);
            return Err(LlmError::InvalidResponse(format!(
                "API error {}: {}",
                status, text
            )));
        }

        let body: Value = response.json().await?;
        parse_gemini_response(&body, model)
    }
}

// === Gemini API Types ===

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    generation_config: GeminiGenerationConfig,
}

#[derive(Debug, Serialize)]
struct GeminiContent {
    role: &'static str,
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum GeminiPart {
    Text { text: String },
    InlineData { inline_data: GeminiInlineData },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiInlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiGenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<&'static str>,
}
