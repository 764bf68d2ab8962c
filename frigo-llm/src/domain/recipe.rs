//! Recipe and ingredient types produced by the generation pipeline

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::error::{LlmError, ValidationError};

/// Maximum title length accepted by recipe storage
pub const MAX_TITLE_CHARS: usize = 100;

/// Ingredient names detected in a photo, in detection order
pub type DetectedIngredients = Vec<String>;

/// Recipe difficulty, serialized with its French label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Difficulty {
    Facile,
    #[default]
    Moyen,
    Difficile,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Facile, Difficulty::Moyen, Difficulty::Difficile];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Facile => "Facile",
            Difficulty::Moyen => "Moyen",
            Difficulty::Difficile => "Difficile",
        }
    }

    /// Parse a label as models tend to write it ("facile", "MOYEN", "hard", ...)
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "facile" | "easy" => Some(Difficulty::Facile),
            "moyen" | "moyenne" | "medium" | "intermediate" => Some(Difficulty::Moyen),
            "difficile" | "hard" | "difficult" => Some(Difficulty::Difficile),
            _ => None,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A complete, validated recipe.
///
/// Whether it came from the model or from the offline fallback, the shape is
/// the same; see [`GenerationOutcome`] for the provenance tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedRecipe {
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    /// Minutes, always > 0
    pub cooking_time: u32,
    /// Always > 0
    pub servings: u32,
    #[serde(default)]
    pub difficulty: Difficulty,
}

impl GeneratedRecipe {
    /// Convert into the record handed to recipe storage
    pub fn into_draft(self, is_ai_generated: bool) -> RecipeDraft {
        let title = match self.title.char_indices().nth(MAX_TITLE_CHARS) {
            Some((idx, _)) => self.title[..idx].trim_end().to_string(),
            None => self.title,
        };

        RecipeDraft {
            title,
            ingredients: self.ingredients,
            instructions: self.instructions,
            cooking_time: self.cooking_time,
            servings: self.servings,
            difficulty: self.difficulty,
            image_url: None,
            is_ai_generated,
        }
    }
}

/// A generated recipe ready to be persisted by the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeDraft {
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub cooking_time: u32,
    pub servings: u32,
    pub difficulty: Difficulty,
    pub image_url: Option<String>,
    pub is_ai_generated: bool,
}

/// One entry of a recipe's `ingredients` array as the model returns it.
///
/// Models answer with either plain strings or small objects; both collapse to
/// a single display string via [`IngredientEntry::flatten`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum IngredientEntry {
    PlainText(String),
    Structured(StructuredIngredient),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StructuredIngredient {
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub quantity: Option<String>,
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub unit: Option<String>,
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub item: Option<String>,
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub preparation: Option<String>,
}

impl IngredientEntry {
    /// Single display string: `quantity unit item (preparation)`, absent parts omitted.
    ///
    /// Plain strings are returned untouched.
    pub fn flatten(&self) -> String {
        match self {
            IngredientEntry::PlainText(text) => text.clone(),
            IngredientEntry::Structured(entry) => {
                let preparation = entry
                    .preparation
                    .as_deref()
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .map(|p| format!("({})", p));

                [
                    entry.quantity.as_deref(),
                    entry.unit.as_deref(),
                    entry.item.as_deref(),
                    preparation.as_deref(),
                ]
                .into_iter()
                .flatten()
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .collect::<Vec<_>>()
                .join(" ")
            }
        }
    }
}

/// Accept `"200"`, `200` or `null` for structured ingredient sub-fields
fn scalar_as_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(s)) => Ok(Some(s)),
        Some(serde_json::Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(D::Error::custom(format!(
            "expected a string or number, got {}",
            other
        ))),
    }
}

/// Why a result came from the offline fallback instead of the model
#[derive(Debug, Clone, thiserror::Error)]
pub enum FallbackReason {
    #[error("model gateway unavailable")]
    GatewayUnavailable,

    #[error("upstream call failed: {0}")]
    UpstreamCallFailed(LlmError),

    #[error("blocked by the model's safety filters ({0})")]
    ContentFiltered(String),

    #[error("upstream returned no text")]
    EmptyResponse,

    #[error("response rejected: {0}")]
    Validation(ValidationError),

    #[error("no ingredients detected")]
    NothingDetected,
}

impl FallbackReason {
    /// Short stable label for log fields
    pub fn kind(&self) -> &'static str {
        match self {
            FallbackReason::GatewayUnavailable => "gateway_unavailable",
            FallbackReason::UpstreamCallFailed(_) => "upstream_call_failed",
            FallbackReason::ContentFiltered(_) => "content_filtered",
            FallbackReason::EmptyResponse => "empty_response",
            FallbackReason::Validation(_) => "validation_failed",
            FallbackReason::NothingDetected => "nothing_detected",
        }
    }
}

impl From<LlmError> for FallbackReason {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::ContentFiltered { reason } => FallbackReason::ContentFiltered(reason),
            other => FallbackReason::UpstreamCallFailed(other),
        }
    }
}

/// Result of a generation call together with its provenance
#[derive(Debug, Clone)]
pub enum GenerationOutcome<T> {
    /// Produced by the model and validated
    Generated(T),
    /// Produced offline
    Fallback { value: T, reason: FallbackReason },
}

impl<T> GenerationOutcome<T> {
    pub fn value(&self) -> &T {
        match self {
            GenerationOutcome::Generated(value) => value,
            GenerationOutcome::Fallback { value, .. } => value,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            GenerationOutcome::Generated(value) => value,
            GenerationOutcome::Fallback { value, .. } => value,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, GenerationOutcome::Fallback { .. })
    }

    pub fn fallback_reason(&self) -> Option<&FallbackReason> {
        match self {
            GenerationOutcome::Generated(_) => None,
            GenerationOutcome::Fallback { reason, .. } => Some(reason),
        }
    }
}

impl GenerationOutcome<GeneratedRecipe> {
    /// Storage record; only model-generated recipes are flagged as AI-generated
    pub fn into_draft(self) -> RecipeDraft {
        let is_ai_generated = !self.is_fallback();
        self.into_value().into_draft(is_ai_generated)
    }
}
