use crate::{ModelResponse, TaskMode};

/// **VALUE**: Verifies response text is exposed byte-for-byte.
///
/// **WHY THIS MATTERS**: The result region renders the model's markdown
/// verbatim; Display is what the terminal writes.
#[test]
fn given_markdown_text_when_displayed_then_output_is_verbatim() {
    let text = "## Eligibility\n\n1. Income below ₹18 lakh\n2. No pucca house\n";
    let response = ModelResponse::new(TaskMode::ExplainScheme, text);

    assert_eq!(response.to_string(), text);
    assert_eq!(response.text(), text);
    assert_eq!(response.mode(), TaskMode::ExplainScheme);
    assert_eq!(response.into_text(), text);
}

#[test]
fn given_response_when_serialized_then_contains_mode_and_text() {
    let response = ModelResponse::new(TaskMode::DraftComplaint, "Subject: Garbage");

    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(json["mode"], "draft_complaint");
    assert_eq!(json["text"], "Subject: Garbage");
}
