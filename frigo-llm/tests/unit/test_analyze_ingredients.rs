//! Unit tests for AnalyzeIngredientsUseCase

#[allow(dead_code)]
#[path = "../common/mod.rs"]
mod common;

use common::{
    MockLlmProvider, create_gateway, create_test_config, encode_image, png_bytes,
    unavailable_gateway,
};
use frigo_llm::infrastructure::fallback::FALLBACK_INGREDIENTS;
use frigo_llm::{
    AnalyzeIngredientsUseCase, ContentBlock, FallbackReason, LlmError, RecipeError,
    ValidationError,
};
use rstest::rstest;

#[rstest]
#[case(r#"["tomates", "mozzarella", "basilic", "tomates"]"#)]
#[case("```json\n[\"tomates\", \"mozzarella\", \"basilic\", \"tomates\"]\n```")]
#[case(r#"Je vois : {"ingredients": ["tomates", "mozzarella", "basilic", "tomates"]}"#)]
#[tokio::test]
async fn test_detected_ingredients_are_returned_as_is(#[case] answer: &str) {
    let (gateway, _) = create_gateway(MockLlmProvider::with_text_response(answer));
    let use_case = AnalyzeIngredientsUseCase::new(gateway, create_test_config());

    let outcome = use_case.execute(&png_bytes()).await.unwrap();

    assert!(!outcome.is_fallback());
    assert_eq!(
        outcome.value(),
        &vec!["tomates", "mozzarella", "basilic", "tomates"]
    );
}

#[tokio::test]
async fn test_vision_request_carries_the_image() {
    let (gateway, requests) = create_gateway(MockLlmProvider::with_text_response(r#"["ail"]"#));
    let use_case = AnalyzeIngredientsUseCase::new(gateway, create_test_config());

    use_case
        .execute(&encode_image(image::ImageFormat::Jpeg))
        .await
        .unwrap();

    let requests = requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].model.as_deref(), Some("vision-model"));

    let blocks = &requests[0].parts;
    assert!(blocks[0].as_text().unwrap().contains("tableau JSON"));
    assert!(matches!(
        &blocks[1],
        ContentBlock::Image { mime_type, .. } if mime_type == "image/jpeg"
    ));
}

#[tokio::test]
async fn test_non_image_bytes_are_a_caller_error() {
    let (gateway, requests) = create_gateway(MockLlmProvider::with_text_response(r#"["ail"]"#));
    let use_case = AnalyzeIngredientsUseCase::new(gateway, create_test_config());

    let result = use_case.execute(b"definitely not an image").await;

    assert!(matches!(result, Err(RecipeError::InputDecode(_))));
    assert!(requests.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_non_image_bytes_are_reported_without_gateway() {
    let use_case = AnalyzeIngredientsUseCase::new(unavailable_gateway(), create_test_config());

    let result = use_case.execute(b"%PDF-1.4").await;
    assert!(matches!(result, Err(RecipeError::InputDecode(_))));
}

#[tokio::test]
async fn test_unavailable_gateway_returns_fixed_list() {
    let use_case = AnalyzeIngredientsUseCase::new(unavailable_gateway(), create_test_config());

    let outcome = use_case.execute(&png_bytes()).await.unwrap();

    assert!(matches!(
        outcome.fallback_reason(),
        Some(FallbackReason::GatewayUnavailable)
    ));
    assert_eq!(outcome.value(), &FALLBACK_INGREDIENTS.to_vec());
}

#[tokio::test]
async fn test_text_only_provider_is_treated_as_unavailable() {
    let (gateway, requests) =
        create_gateway(MockLlmProvider::with_text_response(r#"["ail"]"#).text_only());
    let use_case = AnalyzeIngredientsUseCase::new(gateway, create_test_config());

    let outcome = use_case.execute(&png_bytes()).await.unwrap();

    assert!(matches!(
        outcome.fallback_reason(),
        Some(FallbackReason::GatewayUnavailable)
    ));
    assert!(requests.lock().unwrap().is_empty());
}

#[rstest]
#[case(r#"["tomates", 3]"#)]
#[case(r#"{"items": ["tomates"]}"#)]
#[tokio::test]
async fn test_wrong_shape_falls_back(#[case] answer: &str) {
    let (gateway, _) = create_gateway(MockLlmProvider::with_text_response(answer));
    let use_case = AnalyzeIngredientsUseCase::new(gateway, create_test_config());

    let outcome = use_case.execute(&png_bytes()).await.unwrap();

    assert!(matches!(
        outcome.fallback_reason(),
        Some(FallbackReason::Validation(ValidationError::WrongShape(_)))
    ));
    assert_eq!(outcome.value().len(), FALLBACK_INGREDIENTS.len());
}

#[tokio::test]
async fn test_empty_detection_falls_back() {
    let (gateway, _) = create_gateway(MockLlmProvider::with_text_response("[]"));
    let use_case = AnalyzeIngredientsUseCase::new(gateway, create_test_config());

    let outcome = use_case.execute(&png_bytes()).await.unwrap();

    assert!(matches!(
        outcome.fallback_reason(),
        Some(FallbackReason::NothingDetected)
    ));
}

#[tokio::test]
async fn test_upstream_error_falls_back() {
    let (gateway, _) = create_gateway(MockLlmProvider::new().with_error(LlmError::timeout(30)));
    let use_case = AnalyzeIngredientsUseCase::new(gateway, create_test_config());

    let outcome = use_case.execute(&png_bytes()).await.unwrap();

    assert!(matches!(
        outcome.fallback_reason(),
        Some(FallbackReason::UpstreamCallFailed(LlmError::Timeout { seconds: 30 }))
    ));
}

#[tokio::test]
async fn test_safety_block_falls_back_with_its_own_reason() {
    let (gateway, _) = create_gateway(MockLlmProvider::new().with_error(
        LlmError::ContentFiltered {
            reason: "SAFETY".to_string(),
        },
    ));
    let use_case = AnalyzeIngredientsUseCase::new(gateway, create_test_config());

    let outcome = use_case.execute(&png_bytes()).await.unwrap();

    assert!(matches!(
        outcome.fallback_reason(),
        Some(FallbackReason::ContentFiltered(reason)) if reason == "SAFETY"
    ));
    assert_eq!(outcome.value(), &FALLBACK_INGREDIENTS.to_vec());
}
