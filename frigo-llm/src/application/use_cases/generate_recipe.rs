use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::{FallbackReason, GeneratedRecipe, GenerationOutcome, RecipeError};
use crate::infrastructure::prompts::PromptBuilder;
use crate::infrastructure::{FallbackSynthesizer, ModelGateway, ResponseSanitizer, SchemaValidator};
use frigo_core::config::LlmConfig;

/// Generate a recipe from a list of ingredient names.
///
/// Always yields a schema-valid recipe for a non-empty list: any gateway,
/// upstream or validation failure degrades to [`FallbackSynthesizer`].
pub struct GenerateRecipeUseCase {
    gateway: Arc<ModelGateway>,
    config: LlmConfig,
}

impl GenerateRecipeUseCase {
    pub fn new(gateway: Arc<ModelGateway>, config: LlmConfig) -> Self {
        Self { gateway, config }
    }

    pub async fn execute(
        &self,
        ingredients: &[String],
    ) -> Result<GenerationOutcome<GeneratedRecipe>, RecipeError> {
        // Blank names are dropped before they reach the prompt or the fallback
        let ingredients: Vec<String> = ingredients
            .iter()
            .filter(|name| !name.trim().is_empty())
            .cloned()
            .collect();
        if ingredients.is_empty() {
            return Err(RecipeError::EmptyIngredients);
        }

        info!(ingredient_count = ingredients.len(), "Generating recipe");

        match self.generate(&ingredients).await {
            Ok(recipe) => {
                info!(title = %recipe.title, "Recipe generated by model");
                Ok(GenerationOutcome::Generated(recipe))
            }
            Err(reason) => {
                warn!(
                    reason = reason.kind(),
                    error = %reason,
                    ingredient_count = ingredients.len(),
                    "Falling back to offline recipe"
                );
                Ok(GenerationOutcome::Fallback {
                    value: FallbackSynthesizer::fallback_recipe(&ingredients),
                    reason,
                })
            }
        }
    }

    async fn generate(&self, ingredients: &[String]) -> Result<GeneratedRecipe, FallbackReason> {
        if !self.gateway.is_available() {
            return Err(FallbackReason::GatewayUnavailable);
        }

        let prompt = PromptBuilder::build_recipe_prompt(ingredients, &self.config.language);

        let response = self
            .gateway
            .call_text(&prompt)
            .await
            .map_err(FallbackReason::from)?;

        if response.is_truncated() {
            debug!(model = %response.model, "Model answer hit the token limit");
        }

        let text = response.text().ok_or(FallbackReason::EmptyResponse)?;
        let candidate = ResponseSanitizer::sanitize(&text);

        SchemaValidator::validate_recipe(&candidate).map_err(FallbackReason::Validation)
    }
}
