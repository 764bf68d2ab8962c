//! Entry point for the web layer
//!
//! Wraps the use cases behind the two operations callers need. Results are
//! plain values: whether they came from the model or from the fallback is
//! visible in logs only. Use the use cases directly to observe provenance.

use std::sync::Arc;

use crate::application::use_cases::{
    AnalyzeIngredientsUseCase, GenerateFromPhotoUseCase, GenerateRecipeUseCase, PhotoRecipe,
};
use crate::domain::{DetectedIngredients, GeneratedRecipe, RecipeError};
use crate::infrastructure::ModelGateway;
use frigo_core::config::LlmConfig;

pub struct RecipeOrchestrator {
    generate: GenerateRecipeUseCase,
    analyze: AnalyzeIngredientsUseCase,
}

impl RecipeOrchestrator {
    /// Orchestrator over the Gemini account described by `config`
    pub fn from_config(config: &LlmConfig) -> Self {
        Self::new(Arc::new(ModelGateway::from_config(config)), config.clone())
    }

    pub fn new(gateway: Arc<ModelGateway>, config: LlmConfig) -> Self {
        Self {
            generate: GenerateRecipeUseCase::new(gateway.clone(), config.clone()),
            analyze: AnalyzeIngredientsUseCase::new(gateway, config),
        }
    }

    pub async fn generate_recipe(
        &self,
        ingredients: &[String],
    ) -> Result<GeneratedRecipe, RecipeError> {
        Ok(self.generate.execute(ingredients).await?.into_value())
    }

    pub async fn analyze_ingredients_from_image(
        &self,
        image_bytes: &[u8],
    ) -> Result<DetectedIngredients, RecipeError> {
        Ok(self.analyze.execute(image_bytes).await?.into_value())
    }

    /// Detect, then generate, keeping both provenance tags
    pub async fn generate_from_photo(&self, image_bytes: &[u8]) -> Result<PhotoRecipe, RecipeError> {
        GenerateFromPhotoUseCase::new(&self.analyze, &self.generate)
            .execute(image_bytes)
            .await
    }

    pub fn recipe_use_case(&self) -> &GenerateRecipeUseCase {
        &self.generate
    }

    pub fn analyze_use_case(&self) -> &AnalyzeIngredientsUseCase {
        &self.analyze
    }
}
