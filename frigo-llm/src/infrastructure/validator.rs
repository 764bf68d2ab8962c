//! Schema checks for sanitized model output

use serde_json::{Map, Value};
use tracing::debug;

use crate::domain::{
    DetectedIngredients, Difficulty, GeneratedRecipe, IngredientEntry, ValidationError,
};

/// Keys every recipe answer must carry, checked in this order
pub const REQUIRED_RECIPE_FIELDS: [&str; 5] = [
    "title",
    "ingredients",
    "instructions",
    "cooking_time",
    "servings",
];

/// Turns sanitized model text into typed results, or says why it can't.
pub struct SchemaValidator;

impl SchemaValidator {
    /// Validate a recipe candidate.
    ///
    /// Structured ingredient entries are flattened to display strings and a
    /// missing or unrecognized `difficulty` becomes [`Difficulty::Moyen`].
    pub fn validate_recipe(candidate: &str) -> Result<GeneratedRecipe, ValidationError> {
        let obj = match parse(candidate)? {
            Value::Object(obj) => obj,
            other => {
                return Err(ValidationError::wrong_shape(format!(
                    "expected a recipe object, got {}",
                    type_name(&other)
                )));
            }
        };

        for field in REQUIRED_RECIPE_FIELDS {
            if !obj.contains_key(field) {
                return Err(ValidationError::MissingField(field));
            }
        }

        let title = obj["title"]
            .as_str()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ValidationError::wrong_shape("title must be a non-empty string"))?
            .to_string();

        let ingredients = non_empty_array(&obj, "ingredients")?
            .iter()
            .map(flatten_ingredient)
            .collect::<Result<Vec<_>, _>>()?;

        let instructions = non_empty_array(&obj, "instructions")?
            .iter()
            .map(|step| {
                step.as_str()
                    .map(|s| s.trim().to_string())
                    .ok_or_else(|| ValidationError::wrong_shape("instructions must be strings"))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let cooking_time = positive_integer(&obj, "cooking_time")?;
        let servings = positive_integer(&obj, "servings")?;

        let difficulty = match obj.get("difficulty") {
            None | Some(Value::Null) => Difficulty::default(),
            Some(Value::String(label)) => Difficulty::from_label(label).unwrap_or_else(|| {
                debug!(label = %label, "Unknown difficulty label, using default");
                Difficulty::default()
            }),
            Some(other) => {
                debug!(value = %other, "Non-string difficulty, using default");
                Difficulty::default()
            }
        };

        Ok(GeneratedRecipe {
            title,
            ingredients,
            instructions,
            cooking_time,
            servings,
            difficulty,
        })
    }

    /// Validate an ingredient-detection candidate.
    ///
    /// Accepts `["a", "b"]` or `{"ingredients": ["a", "b"]}`. Names are
    /// trimmed and blank entries dropped; order and duplicates are kept. An
    /// empty list is valid here, the caller decides what it means.
    pub fn validate_ingredient_list(
        candidate: &str,
    ) -> Result<DetectedIngredients, ValidationError> {
        let value = parse(candidate)?;

        let items = match &value {
            Value::Array(items) => items,
            Value::Object(obj) => match obj.get("ingredients") {
                Some(Value::Array(items)) => items,
                Some(other) => {
                    return Err(ValidationError::wrong_shape(format!(
                        "'ingredients' must be an array, got {}",
                        type_name(other)
                    )));
                }
                None => {
                    return Err(ValidationError::wrong_shape(
                        "object without an 'ingredients' array",
                    ));
                }
            },
            other => {
                return Err(ValidationError::wrong_shape(format!(
                    "expected an array of names, got {}",
                    type_name(other)
                )));
            }
        };

        let mut names = Vec::with_capacity(items.len());
        for item in items {
            let Value::String(name) = item else {
                return Err(ValidationError::wrong_shape(format!(
                    "ingredient names must be strings, got {}",
                    type_name(item)
                )));
            };
            let name = name.trim();
            if !name.is_empty() {
                names.push(name.to_string());
            }
        }

        Ok(names)
    }
}

fn parse(candidate: &str) -> Result<Value, ValidationError> {
    serde_json::from_str(candidate).map_err(|e| ValidationError::ParseFailed(e.to_string()))
}

fn non_empty_array<'a>(
    obj: &'a Map<String, Value>,
    field: &str,
) -> Result<&'a Vec<Value>, ValidationError> {
    match &obj[field] {
        Value::Array(items) if !items.is_empty() => Ok(items),
        Value::Array(_) => Err(ValidationError::wrong_shape(format!("{field} is empty"))),
        other => Err(ValidationError::wrong_shape(format!(
            "{field} must be an array, got {}",
            type_name(other)
        ))),
    }
}

fn flatten_ingredient(entry: &Value) -> Result<String, ValidationError> {
    let shape_error = || {
        ValidationError::wrong_shape(format!(
            "ingredient must be a string or an object, got {}",
            type_name(entry)
        ))
    };

    // serde would happily read a positional array into the struct variant
    if !(entry.is_string() || entry.is_object()) {
        return Err(shape_error());
    }
    let parsed: IngredientEntry =
        serde_json::from_value(entry.clone()).map_err(|_| shape_error())?;

    let flat = parsed.flatten();
    if flat.trim().is_empty() {
        return Err(ValidationError::wrong_shape("ingredient entry is empty"));
    }
    Ok(flat)
}

/// Integral JSON number in `1..=u32::MAX`; `30.0` is accepted, `"30"` is not.
fn positive_integer(obj: &Map<String, Value>, field: &str) -> Result<u32, ValidationError> {
    let value = &obj[field];
    let number = value
        .as_u64()
        .or_else(|| {
            value
                .as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f <= u32::MAX as f64)
                .map(|f| f as u64)
        })
        .and_then(|n| u32::try_from(n).ok())
        .filter(|n| *n > 0);

    number.ok_or_else(|| {
        ValidationError::wrong_shape(format!("{field} must be a positive integer, got {value}"))
    })
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
