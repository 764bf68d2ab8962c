pub mod analyze_ingredients;
pub mod generate_from_photo;
pub mod generate_recipe;

pub use analyze_ingredients::AnalyzeIngredientsUseCase;
pub use generate_from_photo::{GenerateFromPhotoUseCase, PhotoRecipe};
pub use generate_recipe::GenerateRecipeUseCase;
