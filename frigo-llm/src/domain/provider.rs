//! LLM Provider trait and related types
//!
//! Defines the transport-level abstraction the model gateway dispatches to.

use async_trait::async_trait;

use crate::domain::error::LlmError;
use crate::domain::messages::{CompletionRequest, CompletionResponse};

/// What the gateway may ask of a provider
#[derive(Debug, Clone, Default)]
pub struct ProviderCapabilities {
    /// Accepts inline images; image analysis is skipped otherwise
    pub vision: bool,
    /// Honors [`CompletionRequest::json_mode`]
    pub json_mode: bool,
    /// Upper bound for `max_tokens`, the configured limit is clamped to it
    pub max_output_tokens: u32,
}

impl ProviderCapabilities {
    /// Capabilities for a plain text model
    pub fn text_only(max_output: u32) -> Self {
        Self {
            vision: false,
            json_mode: false,
            max_output_tokens: max_output,
        }
    }

    /// Capabilities for a multimodal model with JSON output
    pub fn multimodal(max_output: u32) -> Self {
        Self {
            vision: true,
            json_mode: true,
            max_output_tokens: max_output,
        }
    }
}

/// Metadata about a provider
#[derive(Debug, Clone)]
pub struct ProviderInfo {
    /// Provider identifier (e.g., "google_ai")
    pub id: &'static str,
    /// Provider capabilities
    pub capabilities: ProviderCapabilities,
}

/// Core trait for LLM providers
///
/// The trait is object-safe and used through `Arc<dyn LlmProvider>`.
///
/// # Example
///
/// ```rust,ignore
/// use frigo_llm::{CompletionRequest, LlmError, LlmProvider};
///
/// async fn ask(provider: &dyn LlmProvider) -> Result<Option<String>, LlmError> {
///     let request = CompletionRequest::new().with_text("Une recette avec des poireaux ?");
///     let response = provider.complete(request).await?;
///     Ok(response.text())
/// }
/// ```
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Get provider metadata
    fn info(&self) -> ProviderInfo;

    /// Generate a completion. Performs exactly one upstream request.
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError>;
}
