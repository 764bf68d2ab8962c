//! AI recipe generation pipeline
//!
//! Prompt construction, Gemini calls, response sanitizing, schema validation
//! and a deterministic offline fallback, composed behind
//! [`RecipeOrchestrator`].

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::RecipeOrchestrator;
pub use application::use_cases::{
    AnalyzeIngredientsUseCase, GenerateFromPhotoUseCase, GenerateRecipeUseCase, PhotoRecipe,
};
pub use domain::*;
pub use infrastructure::prompts;
pub use infrastructure::providers::GoogleAIProvider;
pub use infrastructure::{
    FallbackSynthesizer, ImageInput, ModelGateway, ResponseSanitizer, SchemaValidator,
};
