//! Configuration validation module

use crate::config::{Config, GoogleAIConfig, LlmConfig, LoggingConfig};

/// Trait for validating configuration sections
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Configuration validation error
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("LLM configuration error: {message}")]
    Llm { message: String },

    #[error("Logging configuration error: {message}")]
    Logging { message: String },
}

impl ValidationError {
    pub fn llm(message: impl Into<String>) -> Self {
        Self::Llm {
            message: message.into(),
        }
    }

    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging {
            message: message.into(),
        }
    }
}

impl Validate for GoogleAIConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::llm(format!(
                "Google AI base_url must start with http:// or https://, got: {}",
                self.base_url
            )));
        }

        Ok(())
    }
}

impl Validate for LlmConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        self.google_ai.validate()?;

        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ValidationError::llm(format!(
                "Temperature must be between 0.0 and 2.0, got {}",
                self.temperature
            )));
        }

        if self.max_tokens == 0 {
            return Err(ValidationError::llm("max_tokens must be greater than 0"));
        }

        if self.timeout_seconds == 0 {
            return Err(ValidationError::llm(
                "LLM timeout must be greater than 0 seconds",
            ));
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        match self.format.as_str() {
            "json" | "pretty" => Ok(()),
            other => Err(ValidationError::logging(format!(
                "Log format must be \"json\" or \"pretty\", got: {}",
                other
            ))),
        }
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), ValidationError> {
        self.llm.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
