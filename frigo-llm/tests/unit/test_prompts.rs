//! Unit tests for prompt templates and PromptBuilder

use frigo_llm::Difficulty;
use frigo_llm::infrastructure::prompts::{PromptBuilder, RECIPE_PROMPT, VISION_PROMPT};
use frigo_llm::infrastructure::validator::REQUIRED_RECIPE_FIELDS;

/// The recipe prompt must name every key the validator requires
#[test]
fn test_recipe_prompt_names_required_fields() {
    for field in REQUIRED_RECIPE_FIELDS {
        assert!(
            RECIPE_PROMPT.contains(&format!("\"{field}\"")),
            "missing {field}"
        );
    }
}

/// The difficulty enum is spelled out with the exact accepted labels
#[test]
fn test_recipe_prompt_constrains_difficulty() {
    for difficulty in Difficulty::ALL {
        assert!(RECIPE_PROMPT.contains(&format!("\"{}\"", difficulty.as_str())));
    }
}

#[test]
fn test_prompts_have_placeholders() {
    assert!(RECIPE_PROMPT.contains("{ingredients}"));
    assert!(RECIPE_PROMPT.contains("{language}"));
    assert!(VISION_PROMPT.contains("{language}"));
}

#[test]
fn test_build_recipe_prompt_keeps_duplicates_and_order() {
    let prompt = PromptBuilder::build_recipe_prompt(
        &[
            "tomates".to_string(),
            "oignons".to_string(),
            "tomates".to_string(),
        ],
        "français",
    );

    assert!(prompt.contains("- tomates\n- oignons\n- tomates\n"));
}

#[test]
fn test_build_vision_prompt_asks_for_json_array() {
    let prompt = PromptBuilder::build_vision_prompt("anglais");

    assert!(prompt.contains("en anglais"));
    assert!(prompt.contains("JSON"));
    assert!(prompt.contains("[]"));
}
