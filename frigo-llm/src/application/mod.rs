pub mod orchestrator;
pub mod use_cases;

pub use orchestrator::RecipeOrchestrator;
