use tracing::info;

use crate::application::use_cases::{AnalyzeIngredientsUseCase, GenerateRecipeUseCase};
use crate::domain::{DetectedIngredients, GeneratedRecipe, GenerationOutcome, RecipeError};

/// Result of the photo-to-recipe flow
#[derive(Debug, Clone)]
pub struct PhotoRecipe {
    pub detected: GenerationOutcome<DetectedIngredients>,
    pub recipe: GenerationOutcome<GeneratedRecipe>,
}

impl PhotoRecipe {
    /// User-facing summary line
    pub fn message(&self) -> String {
        format!(
            "Recette générée à partir de {} ingrédient(s) détecté(s)",
            self.detected.value().len()
        )
    }
}

/// Detect ingredients in a photo, then generate a recipe from them.
pub struct GenerateFromPhotoUseCase<'a> {
    analyze: &'a AnalyzeIngredientsUseCase,
    generate: &'a GenerateRecipeUseCase,
}

impl<'a> GenerateFromPhotoUseCase<'a> {
    pub fn new(analyze: &'a AnalyzeIngredientsUseCase, generate: &'a GenerateRecipeUseCase) -> Self {
        Self { analyze, generate }
    }

    pub async fn execute(&self, image_bytes: &[u8]) -> Result<PhotoRecipe, RecipeError> {
        let detected = self.analyze.execute(image_bytes).await?;

        info!(
            count = detected.value().len(),
            detected_by_model = !detected.is_fallback(),
            "Generating recipe from photo"
        );

        let recipe = self.generate.execute(detected.value()).await?;

        Ok(PhotoRecipe { detected, recipe })
    }
}
