//! Common test utilities and mock implementations

use async_trait::async_trait;
use std::io::Cursor;
use std::sync::{Arc, Mutex};

use frigo_core::config::{GoogleAIConfig, LlmConfig};
use frigo_llm::domain::{
    CompletionRequest, CompletionResponse, ContentBlock, LlmError, LlmProvider,
    ProviderCapabilities, ProviderInfo, StopReason,
};
use frigo_llm::infrastructure::ModelGateway;

/// Mock LLM provider for testing
pub struct MockLlmProvider {
    /// Response to return from complete()
    pub response: Option<CompletionResponse>,
    /// Error to return (if any)
    pub error: Option<LlmError>,
    /// Whether the provider advertises image input
    pub vision: bool,
    /// Captured requests for verification
    pub captured_requests: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl MockLlmProvider {
    pub fn new() -> Self {
        Self {
            response: None,
            error: None,
            vision: true,
            captured_requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_response(mut self, response: CompletionResponse) -> Self {
        self.response = Some(response);
        self
    }

    pub fn with_error(mut self, error: LlmError) -> Self {
        self.error = Some(error);
        self
    }

    pub fn text_only(mut self) -> Self {
        self.vision = false;
        self
    }

    pub fn with_text_response(content: &str) -> Self {
        Self::new().with_response(create_completion_response(content))
    }

    /// Handle on the captured requests that outlives the provider
    pub fn requests(&self) -> Arc<Mutex<Vec<CompletionRequest>>> {
        self.captured_requests.clone()
    }
}

#[async_trait]
impl LlmProvider for MockLlmProvider {
    fn info(&self) -> ProviderInfo {
        let capabilities = if self.vision {
            ProviderCapabilities::multimodal(8192)
        } else {
            ProviderCapabilities::text_only(8192)
        };

        ProviderInfo {
            id: "mock",
            capabilities,
        }
    }

    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        self.captured_requests.lock().unwrap().push(request);

        if let Some(error) = &self.error {
            return Err(error.clone());
        }

        self.response
            .clone()
            .ok_or_else(|| LlmError::InvalidResponse("No response configured".to_string()))
    }
}

/// Create a standard LLM response with given content
pub fn create_completion_response(content: &str) -> CompletionResponse {
    CompletionResponse {
        model: "test-model".to_string(),
        content: vec![ContentBlock::text(content)],
        stop_reason: StopReason::EndTurn,
    }
}

/// A response that carries no text at all
pub fn create_empty_response() -> CompletionResponse {
    CompletionResponse {
        content: vec![],
        stop_reason: StopReason::Other,
        ..create_completion_response("")
    }
}

/// Create default test LlmConfig
pub fn create_test_config() -> LlmConfig {
    LlmConfig {
        google_ai: GoogleAIConfig {
            api_key: Some("test-api-key".to_string()),
            base_url: "https://test.api.example.com".to_string(),
        },
        default_model: "test-model".to_string(),
        vision_model: Some("vision-model".to_string()),
        language: "français".to_string(),
        temperature: 0.7,
        max_tokens: 2048,
        timeout_seconds: 30,
    }
}

/// Gateway over a mock provider, plus the provider's request log
pub fn create_gateway(
    provider: MockLlmProvider,
) -> (Arc<ModelGateway>, Arc<Mutex<Vec<CompletionRequest>>>) {
    let requests = provider.requests();
    let gateway = ModelGateway::with_provider(Arc::new(provider), &create_test_config());
    (Arc::new(gateway), requests)
}

pub fn unavailable_gateway() -> Arc<ModelGateway> {
    Arc::new(ModelGateway::unavailable(&create_test_config()))
}

/// A valid recipe answer, wrapped the way Gemini usually wraps it
pub const FENCED_RECIPE: &str = r#"Voici une recette :
```json
{
  "title": "Omelette au saumon",
  "ingredients": ["3 œufs", {"quantity": "100", "unit": "g", "item": "saumon fumé", "preparation": "en lanières"}],
  "instructions": ["Battre les œufs.", "Cuire avec le saumon."],
  "cooking_time": 10,
  "servings": 2,
  "difficulty": "facile"
}
```
Bon appétit !"#;

/// Small encoded image in the given format
pub fn encode_image(format: image::ImageFormat) -> Vec<u8> {
    let img = image::DynamicImage::ImageRgb8(image::RgbImage::from_pixel(
        8,
        8,
        image::Rgb([240, 120, 20]),
    ));
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), format).unwrap();
    buf
}

pub fn png_bytes() -> Vec<u8> {
    encode_image(image::ImageFormat::Png)
}

pub fn ingredients(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
