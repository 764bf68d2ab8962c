//! Configuration management

pub mod validation;

pub use validation::{Validate, ValidationError};

use serde::{Deserialize, Serialize};

/// Environment variable holding the Gemini API key
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";
/// Environment variable overriding the Gemini model identifier
pub const GEMINI_MODEL_ENV: &str = "GEMINI_MODEL";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub llm: LlmConfig,
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive, overridden by `RUST_LOG`
    pub level: String,
    /// Output format: "json" or "pretty"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// Generative model configuration
///
/// Read once at startup and handed to the model gateway; nothing else reads
/// the API key or model name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Google AI (Gemini) configuration
    pub google_ai: GoogleAIConfig,
    /// Model used for text generation
    pub default_model: String,
    /// Model used for image analysis (falls back to `default_model`)
    pub vision_model: Option<String>,
    /// Language the generated recipes are written in
    pub language: String,
    /// Temperature for generation (0.0 to 2.0)
    pub temperature: f64,
    /// Maximum tokens to generate
    pub max_tokens: u32,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            google_ai: GoogleAIConfig::default(),
            default_model: "gemini-2.0-flash".to_string(),
            vision_model: None,
            language: "français".to_string(),
            temperature: 0.7,
            max_tokens: 2048,
            timeout_seconds: 60,
        }
    }
}

impl LlmConfig {
    /// Model to use for image analysis
    pub fn vision_model(&self) -> &str {
        self.vision_model
            .as_deref()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(&self.default_model)
    }

    /// API key, if one is configured and not blank
    pub fn api_key(&self) -> Option<&str> {
        self.google_ai
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }
}

/// Google AI Studio (Gemini) provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GoogleAIConfig {
    /// API Key (can also use GEMINI_API_KEY env var)
    pub api_key: Option<String>,
    /// Base URL for the API
    pub base_url: String,
}

impl Default for GoogleAIConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigLoadError> {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false));

        // Add environment-specific config if ENV is set
        if let Ok(env) = std::env::var("ENV") {
            builder = builder
                .add_source(config::File::with_name(&format!("config/{}", env)).required(false));
        }

        builder = builder
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("FRIGO").separator("__"));

        let mut config: Config = builder.build()?.try_deserialize()?;
        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Apply the conventional `GEMINI_*` variables on top of the layered sources
    fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(key) = lookup(GEMINI_API_KEY_ENV).filter(|k| !k.trim().is_empty()) {
            self.llm.google_ai.api_key = Some(key);
        }
        if let Some(model) = lookup(GEMINI_MODEL_ENV).filter(|m| !m.trim().is_empty()) {
            // Accept "models/<name>"; the REST path adds that prefix itself
            let model = model.trim();
            self.llm.default_model = model.strip_prefix("models/").unwrap_or(model).to_string();
        }
    }
}

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    #[error("Configuration file error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Configuration validation error: {0}")]
    Validation(#[from] ValidationError),
}
