pub mod error;
pub mod messages;
pub mod provider;
pub mod recipe;

pub use error::{LlmError, RecipeError, ValidationError};
pub use messages::{CompletionRequest, CompletionResponse, ContentBlock, StopReason};
pub use provider::{LlmProvider, ProviderCapabilities, ProviderInfo};
pub use recipe::{
    DetectedIngredients, Difficulty, FallbackReason, GeneratedRecipe, GenerationOutcome,
    IngredientEntry, RecipeDraft, StructuredIngredient,
};
