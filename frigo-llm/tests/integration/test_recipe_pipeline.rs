//! End-to-end tests: orchestrator -> gateway -> Gemini (wiremock)

#[allow(dead_code)]
#[path = "../common/mod.rs"]
mod common;

use common::{FENCED_RECIPE, create_test_config, ingredients, png_bytes};
use frigo_core::config::LlmConfig;
use frigo_llm::{Difficulty, FallbackSynthesizer, RecipeOrchestrator};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(mock_server: &MockServer) -> LlmConfig {
    let mut config = create_test_config();
    config.google_ai.base_url = mock_server.uri();
    config
}

fn gemini_answer(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }]
    })
}

#[tokio::test]
async fn test_generate_recipe_through_gemini() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/test-model:generateContent"))
        .and(query_param("key", "test-api-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_answer(FENCED_RECIPE)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let orchestrator = RecipeOrchestrator::from_config(&config_for(&mock_server));
    let recipe = orchestrator
        .generate_recipe(&ingredients(&["œufs", "saumon fumé"]))
        .await
        .unwrap();

    assert_eq!(recipe.title, "Omelette au saumon");
    assert_eq!(recipe.servings, 2);
    assert_eq!(recipe.difficulty, Difficulty::Facile);
}

#[tokio::test]
async fn test_analyze_uses_vision_model() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/vision-model:generateContent"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(gemini_answer("```json\n[\"courgettes\", \"feta\"]\n```")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let orchestrator = RecipeOrchestrator::from_config(&config_for(&mock_server));
    let detected = orchestrator
        .analyze_ingredients_from_image(&png_bytes())
        .await
        .unwrap();

    assert_eq!(detected, vec!["courgettes", "feta"]);
}

#[tokio::test]
async fn test_upstream_outage_degrades_to_fallback() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .expect(2)
        .mount(&mock_server)
        .await;

    let orchestrator = RecipeOrchestrator::from_config(&config_for(&mock_server));

    let input = ingredients(&["spaghetti", "ail", "piment"]);
    let recipe = orchestrator.generate_recipe(&input).await.unwrap();
    assert_eq!(recipe, FallbackSynthesizer::fallback_recipe(&input));

    let detected = orchestrator
        .analyze_ingredients_from_image(&png_bytes())
        .await
        .unwrap();
    assert_eq!(detected, FallbackSynthesizer::fallback_ingredients());
}

#[tokio::test]
async fn test_without_api_key_no_request_is_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut config = config_for(&mock_server);
    config.google_ai.api_key = None;

    let orchestrator = RecipeOrchestrator::from_config(&config);
    let recipe = orchestrator
        .generate_recipe(&ingredients(&["saumon", "œufs", "paprika"]))
        .await
        .unwrap();

    assert_eq!(recipe.title, "Papillote de saumon");
    assert_eq!(recipe.ingredients, vec!["saumon", "œufs", "paprika"]);
}
