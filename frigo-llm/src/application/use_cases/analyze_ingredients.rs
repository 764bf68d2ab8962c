use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::{DetectedIngredients, FallbackReason, GenerationOutcome, RecipeError};
use crate::infrastructure::prompts::PromptBuilder;
use crate::infrastructure::{
    FallbackSynthesizer, ImageInput, ModelGateway, ResponseSanitizer, SchemaValidator,
};
use frigo_core::config::LlmConfig;

/// Detect ingredient names in a photo.
///
/// Undecodable bytes are the caller's error and are always reported, even
/// when the gateway is unavailable. Every other failure degrades to the
/// fixed illustrative list.
pub struct AnalyzeIngredientsUseCase {
    gateway: Arc<ModelGateway>,
    config: LlmConfig,
}

impl AnalyzeIngredientsUseCase {
    pub fn new(gateway: Arc<ModelGateway>, config: LlmConfig) -> Self {
        Self { gateway, config }
    }

    pub async fn execute(
        &self,
        image_bytes: &[u8],
    ) -> Result<GenerationOutcome<DetectedIngredients>, RecipeError> {
        let image = ImageInput::decode(image_bytes)?;

        debug!(
            mime_type = image.mime_type(),
            size = image.len(),
            "Decoded uploaded image"
        );

        match self.detect(&image).await {
            Ok(ingredients) => {
                info!(count = ingredients.len(), "Ingredients detected by model");
                Ok(GenerationOutcome::Generated(ingredients))
            }
            Err(reason) => {
                warn!(
                    reason = reason.kind(),
                    error = %reason,
                    "Falling back to default ingredient list"
                );
                Ok(GenerationOutcome::Fallback {
                    value: FallbackSynthesizer::fallback_ingredients(),
                    reason,
                })
            }
        }
    }

    async fn detect(&self, image: &ImageInput) -> Result<DetectedIngredients, FallbackReason> {
        if !self.gateway.supports_vision() {
            return Err(FallbackReason::GatewayUnavailable);
        }

        let prompt = PromptBuilder::build_vision_prompt(&self.config.language);

        let response = self
            .gateway
            .call_vision(&prompt, image)
            .await
            .map_err(FallbackReason::from)?;

        let text = response.text().ok_or(FallbackReason::EmptyResponse)?;
        let candidate = ResponseSanitizer::sanitize(&text);

        let ingredients = SchemaValidator::validate_ingredient_list(&candidate)
            .map_err(FallbackReason::Validation)?;

        if ingredients.is_empty() {
            return Err(FallbackReason::NothingDetected);
        }
        Ok(ingredients)
    }
}
