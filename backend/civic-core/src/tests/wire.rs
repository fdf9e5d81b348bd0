use crate::generator::gemini::wire::{
    GenerateContentRequest, GenerateContentResponse, GenerationConfig, error_message,
    error_message_or,
};

use serde_json::json;

/// **VALUE**: Verifies the request body matches Gemini's camelCase schema.
///
/// **BUG THIS CATCHES**: Would catch a lost `rename_all`, which the API
/// silently ignores (generationConfig would be dropped without an error).
#[test]
fn given_generation_settings_when_serializing_request_then_uses_camel_case() {
    // GIVEN: A request with both optional settings
    let request = GenerateContentRequest::single_turn(
        "hello",
        Some(GenerationConfig {
            temperature: Some(0.4),
            max_output_tokens: Some(512),
        }),
    );

    // WHEN: Serializing
    let body = serde_json::to_value(&request).unwrap();

    // THEN: Shape matches the API
    assert_eq!(body["contents"][0]["role"], "user");
    assert_eq!(body["contents"][0]["parts"][0]["text"], "hello");
    assert_eq!(body["generationConfig"]["maxOutputTokens"], 512);
    assert!(body["generationConfig"]["temperature"].is_number());
}

#[test]
fn given_no_generation_settings_when_serializing_then_field_is_omitted() {
    let request =
        GenerateContentRequest::single_turn("hello", GenerationConfig::default().non_empty());

    let body = serde_json::to_value(&request).unwrap();

    assert!(body.get("generationConfig").is_none());
}

/// **VALUE**: Verifies multi-part candidates are joined in order.
///
/// **WHY THIS MATTERS**: Long answers sometimes arrive split across parts;
/// showing only the first part would truncate the result.
#[test]
fn given_multi_part_candidate_when_extracting_then_parts_are_joined() {
    let response: GenerateContentResponse = serde_json::from_value(json!({
        "candidates": [
            {"content": {"role": "model", "parts": [{"text": "Yes, "}, {"text": "you qualify."}]},
             "finishReason": "STOP"},
            {"content": {"parts": [{"text": "ignored"}]}}
        ]
    }))
    .unwrap();

    assert_eq!(
        response.first_candidate_text().as_deref(),
        Some("Yes, you qualify.")
    );
}

#[test]
fn given_blocked_prompt_when_extracting_then_reason_is_reported() {
    let response: GenerateContentResponse = serde_json::from_value(json!({
        "promptFeedback": {"blockReason": "SAFETY"}
    }))
    .unwrap();

    assert!(response.first_candidate_text().is_none());
    assert_eq!(response.empty_reason(), "prompt blocked: SAFETY");
}

#[test]
fn given_candidate_without_text_when_extracting_then_finish_reason_is_reported() {
    let response: GenerateContentResponse = serde_json::from_value(json!({
        "candidates": [{"finishReason": "MAX_TOKENS"}]
    }))
    .unwrap();

    assert!(response.first_candidate_text().is_none());
    assert!(response.empty_reason().contains("MAX_TOKENS"));
}

#[test]
fn given_google_error_envelope_when_extracting_message_then_status_and_message_shown() {
    let body = r#"{"error":{"code":429,"message":"Resource has been exhausted","status":"RESOURCE_EXHAUSTED"}}"#;

    assert_eq!(
        error_message(body),
        "RESOURCE_EXHAUSTED: Resource has been exhausted"
    );
}

#[test]
fn given_non_json_error_body_when_extracting_message_then_raw_body_returned() {
    assert_eq!(error_message("Bad Gateway"), "Bad Gateway");
}

/// **VALUE**: An unreadable or blank error body falls back to the status reason.
///
/// **BUG THIS CATCHES**: Would catch a read failure being turned into an empty
/// string, which shows the user `HTTP 500 - ` with nothing after it.
#[test]
fn given_missing_or_blank_error_body_when_extracting_message_then_fallback_used() {
    assert_eq!(
        error_message_or(None, "Internal Server Error"),
        "Internal Server Error"
    );
    assert_eq!(
        error_message_or(Some("  \n"), "Service Unavailable"),
        "Service Unavailable"
    );
    assert_eq!(error_message_or(Some("Bad Gateway"), "unused"), "Bad Gateway");
}
