pub mod fallback;
pub mod gateway;
pub mod image_input;
pub mod prompts;
pub mod providers;
pub mod sanitizer;
pub mod validator;

pub use fallback::FallbackSynthesizer;
pub use gateway::ModelGateway;
pub use image_input::ImageInput;
pub use sanitizer::ResponseSanitizer;
pub use validator::SchemaValidator;
