//! Error types for the generation pipeline
//!
//! Three families, distinguished by how the pipeline handles them:
//! - [`LlmError`]: the upstream model call failed. Always routed to a fallback.
//! - [`ValidationError`]: the model answered, but not with what we asked for.
//!   Always routed to a fallback.
//! - [`RecipeError`]: the caller sent bad input. Returned to the caller.

use std::fmt;

/// LLM operation error
#[derive(Debug, Clone)]
pub enum LlmError {
    /// Authentication failed (invalid API key, expired token, etc.)
    Authentication(String),

    /// Rate limited or out of quota
    RateLimited(String),

    /// Request was invalid (bad parameters, unsupported capability, etc.)
    InvalidRequest(String),

    /// The prompt or the answer was blocked by the provider's safety filters
    ContentFiltered {
        /// Block or finish reason reported upstream (e.g. "SAFETY")
        reason: String,
    },

    /// Model not found or not available
    ModelNotFound(String),

    /// Network/connection error
    Network(String),

    /// Request timed out
    Timeout {
        /// Timeout duration in seconds
        seconds: u64,
    },

    /// Service temporarily unavailable
    ServiceUnavailable(String),

    /// Provider returned an unexpected response
    InvalidResponse(String),

    /// Configuration error
    Configuration(String),
}

impl LlmError {
    /// Create a rate limited error
    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::RateLimited(message.into())
    }

    /// Create a timeout error
    pub fn timeout(seconds: u64) -> Self {
        Self::Timeout { seconds }
    }

    /// Create a network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Create an authentication error
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Authentication(message.into())
    }
}

impl fmt::Display for LlmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LlmError::Authentication(msg) => write!(f, "Authentication failed: {}", msg),
            LlmError::RateLimited(msg) => write!(f, "Rate limited: {}", msg),
            LlmError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
            LlmError::ContentFiltered { reason } => write!(f, "Content filtered: {}", reason),
            LlmError::ModelNotFound(model) => write!(f, "Model not found: {}", model),
            LlmError::Network(msg) => write!(f, "Network error: {}", msg),
            LlmError::Timeout { seconds } => write!(f, "Request timed out after {}s", seconds),
            LlmError::ServiceUnavailable(msg) => write!(f, "Service unavailable: {}", msg),
            LlmError::InvalidResponse(msg) => write!(f, "Invalid response: {}", msg),
            LlmError::Configuration(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for LlmError {}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LlmError::Timeout { seconds: 0 }
        } else if err.is_connect() {
            LlmError::Network(format!("Connection failed: {}", err))
        } else if err.is_decode() {
            LlmError::InvalidResponse(format!("Undecodable response body: {}", err))
        } else {
            LlmError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for LlmError {
    fn from(err: serde_json::Error) -> Self {
        LlmError::InvalidResponse(format!("JSON parse error: {}", err))
    }
}

/// The model's answer did not satisfy the expected JSON contract
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("response is not valid JSON: {0}")]
    ParseFailed(String),

    #[error("required field '{0}' is missing")]
    MissingField(&'static str),

    #[error("unexpected shape: {0}")]
    WrongShape(String),
}

impl ValidationError {
    pub(crate) fn wrong_shape(message: impl Into<String>) -> Self {
        Self::WrongShape(message.into())
    }
}

/// Caller-facing errors of the generation use cases.
///
/// Upstream and validation failures never appear here; they degrade to a
/// fallback result instead.
#[derive(Debug, thiserror::Error)]
pub enum RecipeError {
    #[error("at least one ingredient is required")]
    EmptyIngredients,

    #[error("uploaded file is not a decodable image: {0}")]
    InputDecode(String),
}

impl From<image::ImageError> for RecipeError {
    fn from(err: image::ImageError) -> Self {
        RecipeError::InputDecode(err.to_string())
    }
}
