//! Model gateway: the single boundary to the generative model
//!
//! Built once from [`LlmConfig`] and shared read-only. Without an API key the
//! gateway exists but reports itself unavailable; callers check
//! [`ModelGateway::is_available`] before spending a request. Each call is one
//! upstream request. Errors are returned as-is, never retried or swallowed.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::{
    CompletionRequest, CompletionResponse, LlmError, LlmProvider, ProviderCapabilities,
};
use crate::infrastructure::image_input::ImageInput;
use crate::infrastructure::providers::GoogleAIProvider;
use frigo_core::config::LlmConfig;

pub struct ModelGateway {
    provider: Option<Arc<dyn LlmProvider>>,
    text_model: String,
    vision_model: String,
    temperature: f64,
    max_tokens: u32,
}

impl ModelGateway {
    /// Build the gateway for the configured Gemini account.
    ///
    /// A missing key or blank model name yields an unavailable gateway.
    pub fn from_config(config: &LlmConfig) -> Self {
        if config.api_key().is_none() {
            debug!("No Gemini API key configured, model gateway unavailable");
            return Self::unavailable(config);
        }
        if config.default_model.trim().is_empty() {
            warn!("Gemini model name is blank, model gateway unavailable");
            return Self::unavailable(config);
        }

        match GoogleAIProvider::from_config(config) {
            Ok(provider) => Self::with_provider(Arc::new(provider), config),
            Err(e) => {
                warn!(error = %e, "Failed to build Gemini provider, model gateway unavailable");
                Self::unavailable(config)
            }
        }
    }

    /// Gateway backed by an explicit provider
    pub fn with_provider(provider: Arc<dyn LlmProvider>, config: &LlmConfig) -> Self {
        Self {
            provider: Some(provider),
            ..Self::unavailable(config)
        }
    }

    /// Gateway with no provider; every call fails with a configuration error
    pub fn unavailable(config: &LlmConfig) -> Self {
        Self {
            provider: None,
            text_model: config.default_model.clone(),
            vision_model: config.vision_model().to_string(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }

    pub fn is_available(&self) -> bool {
        self.provider.is_some()
    }

    /// Capabilities of the backing provider, `None` when unavailable
    pub fn capabilities(&self) -> Option<ProviderCapabilities> {
        self.provider.as_ref().map(|p| p.info().capabilities)
    }

    pub fn supports_vision(&self) -> bool {
        self.capabilities().is_some_and(|caps| caps.vision)
    }

    /// Text-only completion
    pub async fn call_text(&self, prompt: &str) -> Result<CompletionResponse, LlmError> {
        let provider = self.provider()?;

        let request = self
            .base_request(provider.as_ref(), &self.text_model)
            .with_text(prompt);

        provider.complete(request).await
    }

    /// Prompt plus one inline image
    pub async fn call_vision(
        &self,
        prompt: &str,
        image: &ImageInput,
    ) -> Result<CompletionResponse, LlmError> {
        let provider = self.provider()?;

        if !provider.info().capabilities.vision {
            return Err(LlmError::InvalidRequest(format!(
                "provider '{}' does not accept images",
                provider.info().id
            )));
        }

        let request = self
            .base_request(provider.as_ref(), &self.vision_model)
            .with_text(prompt)
            .with_image(image.mime_type(), image.to_base64());

        provider.complete(request).await
    }

    fn provider(&self) -> Result<&Arc<dyn LlmProvider>, LlmError> {
        self.provider
            .as_ref()
            .ok_or_else(|| LlmError::Configuration("model gateway unavailable".to_string()))
    }

    /// Configured sampling settings, bounded by what the provider supports
    fn base_request(&self, provider: &dyn LlmProvider, model: &str) -> CompletionRequest {
        let caps = provider.info().capabilities;

        CompletionRequest::new()
            .with_model(model)
            .with_temperature(self.temperature)
            .with_max_tokens(self.max_tokens.min(caps.max_output_tokens))
            .with_json_mode(caps.json_mode)
    }
}

impl std::fmt::Debug for ModelGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelGateway")
            .field("provider", &self.provider.as_ref().map(|p| p.info().id))
            .field("text_model", &self.text_model)
            .field("vision_model", &self.vision_model)
            .finish()
    }
}
