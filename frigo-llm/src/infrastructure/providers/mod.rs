pub mod google_ai;

pub use crate::domain::LlmProvider;
pub use google_ai::GoogleAIProvider;
