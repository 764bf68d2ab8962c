//! Provider-agnostic request/response types
//!
//! Every call the pipeline makes is a single user turn: one prompt, at most
//! one inline image. Providers translate that into their own wire format.
//! [`CompletionResponse::text`] yields `None` rather than failing when the
//! upstream answer carries no usable text.

/// One part of the user turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentBlock {
    Text(String),

    /// Inline image
    Image {
        /// MIME type of the encoded image (e.g. "image/jpeg")
        mime_type: String,
        /// Base64-encoded image bytes
        data: String,
    },
}

impl ContentBlock {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Inline image block from already base64-encoded data
    pub fn image(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self::Image {
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Image { .. } => None,
        }
    }

    pub fn is_image(&self) -> bool {
        matches!(self, Self::Image { .. })
    }
}

/// Completion request to send to an LLM provider
#[derive(Debug, Clone, Default)]
pub struct CompletionRequest {
    /// Parts of the user turn, in order
    pub parts: Vec<ContentBlock>,

    /// Model to use; the provider's own model when `None`
    pub model: Option<String>,

    pub max_tokens: Option<u32>,

    /// 0.0 to 2.0, lower is more deterministic
    pub temperature: Option<f64>,

    /// Ask the provider for a JSON-only answer
    pub json_mode: bool,
}

impl CompletionRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.parts.push(ContentBlock::text(text));
        self
    }

    pub fn with_image(mut self, mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        self.parts.push(ContentBlock::image(mime_type, data));
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_json_mode(mut self, json_mode: bool) -> Self {
        self.json_mode = json_mode;
        self
    }

    /// Text parts joined together
    pub fn prompt_text(&self) -> String {
        self.parts
            .iter()
            .filter_map(ContentBlock::as_text)
            .collect::<Vec<_>>()
            .join("")
    }

    pub fn has_image(&self) -> bool {
        self.parts.iter().any(ContentBlock::is_image)
    }
}

/// Reason why generation stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    EndTurn,
    /// Hit the token limit; the answer is likely cut short
    MaxTokens,
    Other,
}

/// Completion response from an LLM provider
#[derive(Debug, Clone)]
pub struct CompletionResponse {
    /// Model that generated the response
    pub model: String,
    pub content: Vec<ContentBlock>,
    pub stop_reason: StopReason,
}

impl CompletionResponse {
    /// Text content of the response, `None` when no block carries non-blank text.
    pub fn text(&self) -> Option<String> {
        let text = self
            .content
            .iter()
            .filter_map(ContentBlock::as_text)
            .collect::<Vec<_>>()
            .join("");

        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }

    pub fn is_truncated(&self) -> bool {
        self.stop_reason == StopReason::MaxTokens
    }
}
