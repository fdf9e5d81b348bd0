// Unit tests for pane submission and result-region state

use super::{dispatcher_failing, dispatcher_replying};

use crate::pane::{
    COMPLAINT_PANE, Notice, Pane, PaneOutcome, PaneState, REQUEST_FAILED_MESSAGE, SCHEME_PANE,
    submit,
};

use models::{ModelResponse, TaskMode};

/// **VALUE**: Blank input in either pane shows that pane's warning and sends nothing.
///
/// **WHY THIS MATTERS**: An empty question must never cost an API call.
///
/// **BUG THIS CATCHES**: Would catch the blank check being skipped or done
/// only after the dispatcher is called.
#[tokio::test]
async fn given_blank_input_when_submitting_either_pane_then_warning_and_no_request() {
    for pane in [&SCHEME_PANE, &COMPLAINT_PANE] {
        for input in ["", "   ", "\n\t "] {
            // GIVEN: A dispatcher that would succeed
            let dispatcher = dispatcher_replying("unused");

            // WHEN: Pressing the button with blank input
            let outcome = submit(pane, &dispatcher, input, false).await;

            // THEN: The pane's own warning, and the generator was never called
            assert_eq!(outcome, PaneOutcome::Warning(pane.empty_warning));
            assert!(dispatcher.generator().requests().is_empty());
        }
    }
}

/// **VALUE**: Successful text comes back unchanged, markdown and all.
#[tokio::test]
async fn given_successful_reply_when_submitting_then_rendered_verbatim() {
    let reply = "### Eligibility\n\n- Income below ₹18 lakh\n- No pucca house  \n";
    let dispatcher = dispatcher_replying(reply);

    let outcome = submit(
        &SCHEME_PANE,
        &dispatcher,
        "Am I eligible for PMAY housing scheme?",
        false,
    )
    .await;

    assert_eq!(
        outcome,
        PaneOutcome::Rendered(ModelResponse::new(TaskMode::ExplainScheme, reply))
    );
    assert_eq!(dispatcher.generator().requests().len(), 1);
}

/// **VALUE**: Any failure produces the generic headline followed by the cause.
///
/// **BUG THIS CATCHES**: Would catch a failure being swallowed into an empty
/// result, which would look like the model answered with nothing.
#[tokio::test]
async fn given_failing_generator_when_submitting_then_failed_with_headline() {
    let dispatcher = dispatcher_failing(500);

    let outcome = submit(&COMPLAINT_PANE, &dispatcher, "Streetlight broken", false).await;

    match outcome {
        PaneOutcome::Failed(message) => {
            assert!(message.starts_with(REQUEST_FAILED_MESSAGE));
            assert!(message.contains("500"));
        }
        other => panic!("expected Failed, got {other:?}"),
    }
}

/// **VALUE**: A failure after a success leaves no stale result on screen.
///
/// **WHY THIS MATTERS**: Showing the previous answer under a new error would
/// make the user think the old text answers the new question.
#[test]
fn given_rendered_result_when_failure_applied_then_result_cleared() {
    // GIVEN: A pane showing an earlier answer
    let mut state = PaneState::new(&SCHEME_PANE);
    state.apply(PaneOutcome::Rendered(ModelResponse::new(
        TaskMode::ExplainScheme,
        "old answer",
    )));
    assert!(state.result().is_some());

    // WHEN: The next request fails
    state.apply(PaneOutcome::Failed(String::from("boom")));

    // THEN: Only the error remains
    assert!(state.result().is_none());
    assert_eq!(state.notice(), Some(&Notice::Error(String::from("boom"))));
}

#[test]
fn given_warning_when_success_applied_then_notice_cleared() {
    let mut state = PaneState::new(&COMPLAINT_PANE);
    state.apply(PaneOutcome::Warning(COMPLAINT_PANE.empty_warning));

    state.apply(PaneOutcome::Rendered(ModelResponse::new(
        TaskMode::DraftComplaint,
        "draft",
    )));

    assert!(state.notice().is_none());
    assert_eq!(state.result().map(|r| r.text()), Some("draft"));
}

/// **VALUE**: Each mode maps to the pane carrying its own labels.
#[test]
fn given_mode_when_looking_up_pane_then_labels_match() {
    let scheme = Pane::for_mode(TaskMode::ExplainScheme);
    let complaint = Pane::for_mode(TaskMode::DraftComplaint);

    assert_eq!(scheme.button_label, "Check Scheme Details");
    assert_eq!(scheme.empty_warning, "Please enter a scheme-related question.");
    assert_eq!(complaint.button_label, "Generate Complaint Draft");
    assert_eq!(complaint.empty_warning, "Please describe your civic issue.");
    assert_eq!(scheme.mode, TaskMode::ExplainScheme);
    assert_eq!(complaint.mode, TaskMode::DraftComplaint);
}
