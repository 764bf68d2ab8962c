//! Unit tests for RecipeOrchestrator

#[allow(dead_code)]
#[path = "../common/mod.rs"]
mod common;

use std::sync::Arc;

use common::{
    FENCED_RECIPE, MockLlmProvider, create_gateway, create_test_config, ingredients, png_bytes,
    unavailable_gateway,
};
use frigo_core::config::LlmConfig;
use frigo_llm::{
    FallbackReason, FallbackSynthesizer, LlmError, RecipeError, RecipeOrchestrator,
};

#[tokio::test]
async fn test_failing_gateway_never_surfaces_an_error() {
    let (gateway, _) =
        create_gateway(MockLlmProvider::new().with_error(LlmError::auth("revoked key")));
    let orchestrator = RecipeOrchestrator::new(gateway, create_test_config());

    let input = ingredients(&["eggs", "flour"]);
    let recipe = orchestrator.generate_recipe(&input).await.unwrap();

    assert_eq!(recipe, FallbackSynthesizer::fallback_recipe(&input));
}

#[tokio::test]
async fn test_generate_recipe_returns_model_recipe() {
    let (gateway, _) = create_gateway(MockLlmProvider::with_text_response(FENCED_RECIPE));
    let orchestrator = RecipeOrchestrator::new(gateway, create_test_config());

    let recipe = orchestrator
        .generate_recipe(&ingredients(&["œufs", "saumon"]))
        .await
        .unwrap();

    assert_eq!(recipe.title, "Omelette au saumon");
}

#[tokio::test]
async fn test_from_config_without_key_uses_fallbacks() {
    let orchestrator = RecipeOrchestrator::from_config(&LlmConfig::default());

    let recipe = orchestrator
        .generate_recipe(&ingredients(&["saumon", "œufs", "paprika"]))
        .await
        .unwrap();
    assert_eq!(recipe.title, "Papillote de saumon");

    let detected = orchestrator
        .analyze_ingredients_from_image(&png_bytes())
        .await
        .unwrap();
    assert_eq!(detected, FallbackSynthesizer::fallback_ingredients());
}

#[tokio::test]
async fn test_analyze_rejects_undecodable_upload() {
    let orchestrator = RecipeOrchestrator::new(unavailable_gateway(), create_test_config());

    let result = orchestrator
        .analyze_ingredients_from_image(b"GIF89a-but-truncated")
        .await;

    assert!(matches!(result, Err(RecipeError::InputDecode(_))));
}

#[tokio::test]
async fn test_generate_from_photo_chains_detection_into_generation() {
    let (gateway, requests) = create_gateway(MockLlmProvider::with_text_response(
        r#"["poulet", "citron", "thym"]"#,
    ));
    let orchestrator = RecipeOrchestrator::new(gateway, create_test_config());

    let result = orchestrator.generate_from_photo(&png_bytes()).await.unwrap();

    // the mock answers the recipe call with the same array, which fails validation
    assert!(!result.detected.is_fallback());
    assert_eq!(result.detected.value(), &vec!["poulet", "citron", "thym"]);
    assert!(matches!(
        result.recipe.fallback_reason(),
        Some(FallbackReason::Validation(_))
    ));
    assert_eq!(result.recipe.value().title, "Poulet au four et aux herbes");
    assert_eq!(result.recipe.value().ingredients, *result.detected.value());
    assert_eq!(
        result.message(),
        "Recette générée à partir de 3 ingrédient(s) détecté(s)"
    );

    let requests = requests.lock().unwrap();
    assert_eq!(requests.len(), 2);
    assert!(requests[0].has_image());
    assert!(!requests[1].has_image());
}

#[tokio::test]
async fn test_gateway_is_shared_across_concurrent_calls() {
    let (gateway, requests) = create_gateway(MockLlmProvider::with_text_response(FENCED_RECIPE));
    let orchestrator = Arc::new(RecipeOrchestrator::new(gateway, create_test_config()));

    let a = ingredients(&["œufs"]);
    let b = ingredients(&["saumon"]);
    let (first, second) = tokio::join!(
        orchestrator.generate_recipe(&a),
        orchestrator.generate_recipe(&b)
    );

    assert_eq!(first.unwrap(), second.unwrap());
    assert_eq!(requests.lock().unwrap().len(), 2);
}
