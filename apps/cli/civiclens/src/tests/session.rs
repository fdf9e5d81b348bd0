// Unit tests for the interactive session, driven through in-memory streams

use super::{dispatcher_failing, dispatcher_replying};

use crate::chrome::{APP_TITLE, TAGLINE};
use crate::pane::{COMPLAINT_PANE, Notice, REQUEST_FAILED_MESSAGE, SCHEME_PANE};
use crate::session::{MenuChoice, Session};

use civic_core::prompt::{COMPLAINT_INSTRUCTION, PREAMBLE};
use models::TaskMode;

use std::io::Cursor;

/// **VALUE**: Scheme tab end to end: the answer is printed exactly.
///
/// **WHY THIS MATTERS**: This is the main path of the Government Schemes pane.
#[tokio::test]
async fn given_scheme_question_when_session_runs_then_answer_rendered() {
    // GIVEN: A stubbed answer and a user who opens tab 1, asks, then quits
    let answer = "**PMAY** covers households without a pucca house.";
    let dispatcher = dispatcher_replying(answer);
    let input = Cursor::new("1\nAm I eligible for PMAY housing scheme?\n.\nq\n");

    // WHEN: Running the session
    let mut session = Session::new(input, Vec::new(), &dispatcher);
    session.run().await.unwrap();
    let state_text = session
        .pane_state(TaskMode::ExplainScheme)
        .result()
        .map(|r| r.text().to_string());
    let output = String::from_utf8(session.into_output()).unwrap();

    // THEN: Header, button label and verbatim answer appear; one request was sent
    assert!(output.starts_with(APP_TITLE));
    assert!(output.contains(TAGLINE));
    assert!(output.contains(SCHEME_PANE.placeholder));
    assert!(output.contains("[Check Scheme Details]"));
    assert!(output.contains(answer));
    assert_eq!(state_text.as_deref(), Some(answer));

    let requests = dispatcher.generator().requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0],
        format!("{PREAMBLE}Am I eligible for PMAY housing scheme?")
    );
}

/// **VALUE**: Multi-line complaint text is sent as typed, lines joined by `\n`.
#[tokio::test]
async fn given_multiline_complaint_when_session_runs_then_lines_preserved() {
    let dispatcher = dispatcher_replying("Subject: Garbage collection");
    let input = Cursor::new("2\nGarbage not collected\nfor 10 days in my area\n.\nq\n");

    let mut session = Session::new(input, Vec::new(), &dispatcher);
    session.run().await.unwrap();

    let requests = dispatcher.generator().requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0],
        format!("{PREAMBLE}{COMPLAINT_INSTRUCTION}Garbage not collected\nfor 10 days in my area")
    );
}

/// **VALUE**: A complaint with paragraph breaks is sent whole.
///
/// **WHY THIS MATTERS**: Pasted complaints often have several paragraphs. A
/// later paragraph reading `q` or `2` must stay text, not become a menu choice.
///
/// **BUG THIS CATCHES**: Would catch the text area ending at the first blank
/// line, which truncates the request and feeds the rest to the menu.
#[tokio::test]
async fn given_two_paragraph_complaint_when_session_runs_then_sent_whole() {
    // GIVEN: Two paragraphs separated by blank lines, one of them just "q"
    let dispatcher = dispatcher_replying("Subject: Garbage and drainage");
    let input = Cursor::new(
        "2\nGarbage not collected for 10 days.\n\nq\n\nThe drain is blocked too.\n.\nq\n",
    );

    // WHEN: Running the session
    let mut session = Session::new(input, Vec::new(), &dispatcher);
    session.run().await.unwrap();
    let output = String::from_utf8(session.into_output()).unwrap();

    // THEN: One request carrying every paragraph, and the session ran to the real quit
    let requests = dispatcher.generator().requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0],
        format!(
            "{PREAMBLE}{COMPLAINT_INSTRUCTION}Garbage not collected for 10 days.\n\nq\n\nThe drain is blocked too."
        )
    );
    assert!(output.contains("Subject: Garbage and drainage"));
    assert!(output.trim_end().ends_with("Goodbye."));
}

/// **VALUE**: End of input also closes the text area and the text is still sent.
#[tokio::test]
async fn given_input_ending_inside_text_area_when_session_runs_then_text_sent() {
    let dispatcher = dispatcher_replying("answer");
    let input = Cursor::new("1\nWhat is PM-KISAN?");

    let mut session = Session::new(input, Vec::new(), &dispatcher);
    session.run().await.unwrap();

    let requests = dispatcher.generator().requests();
    assert_eq!(requests, vec![format!("{PREAMBLE}What is PM-KISAN?")]);
}

/// **VALUE**: An empty text area shows the warning and sends nothing.
///
/// **BUG THIS CATCHES**: Would catch the session bypassing the pane's blank check.
#[tokio::test]
async fn given_empty_text_area_when_session_runs_then_warning_and_no_request() {
    let dispatcher = dispatcher_replying("unused");
    let input = Cursor::new("2\n.\nq\n");

    let mut session = Session::new(input, Vec::new(), &dispatcher);
    session.run().await.unwrap();
    let notice = session.pane_state(TaskMode::DraftComplaint).notice().cloned();
    let output = String::from_utf8(session.into_output()).unwrap();

    assert!(dispatcher.generator().requests().is_empty());
    assert_eq!(
        notice,
        Some(Notice::Warning(COMPLAINT_PANE.empty_warning.to_string()))
    );
    assert!(output.contains(COMPLAINT_PANE.empty_warning));
}

/// **VALUE**: A failed request is shown inline and the session keeps going.
///
/// **WHY THIS MATTERS**: Request errors are not fatal; the user can retry.
#[tokio::test]
async fn given_failing_generator_when_session_runs_then_error_shown_and_menu_returns() {
    // GIVEN: A generator that always fails; the user asks twice, then quits
    let dispatcher = dispatcher_failing(429);
    let input = Cursor::new("1\nfirst\n.\n1\nsecond\n.\nq\n");

    // WHEN: Running the session
    let mut session = Session::new(input, Vec::new(), &dispatcher);
    session.run().await.unwrap();
    let output = String::from_utf8(session.into_output()).unwrap();

    // THEN: Both attempts reached the generator and both failures were rendered
    assert_eq!(dispatcher.generator().requests().len(), 2);
    assert_eq!(output.matches(REQUEST_FAILED_MESSAGE).count(), 2);
    assert!(output.trim_end().ends_with("Goodbye."));
}

/// **VALUE**: Each pane keeps its own result region.
#[tokio::test]
async fn given_both_panes_used_when_session_runs_then_results_independent() {
    let dispatcher = dispatcher_replying("same reply");
    let input = Cursor::new("1\nscheme question\n.\n2\n.\nq\n");

    let mut session = Session::new(input, Vec::new(), &dispatcher);
    session.run().await.unwrap();

    let scheme = session.pane_state(TaskMode::ExplainScheme);
    let complaint = session.pane_state(TaskMode::DraftComplaint);
    assert!(scheme.result().is_some());
    assert!(complaint.result().is_none());
    assert!(matches!(complaint.notice(), Some(Notice::Warning(_))));
}

/// **VALUE**: End of input at the menu ends the session cleanly.
#[tokio::test]
async fn given_input_closed_when_session_runs_then_exits_ok() {
    let dispatcher = dispatcher_replying("unused");

    let mut session = Session::new(Cursor::new(""), Vec::new(), &dispatcher);
    let result = session.run().await;

    assert!(result.is_ok());
    assert!(dispatcher.generator().requests().is_empty());
}

#[tokio::test]
async fn given_unknown_choice_when_session_runs_then_reported_and_continues() {
    let dispatcher = dispatcher_replying("unused");
    let input = Cursor::new("7\nquit\n");

    let mut session = Session::new(input, Vec::new(), &dispatcher);
    session.run().await.unwrap();
    let output = String::from_utf8(session.into_output()).unwrap();

    assert!(output.contains("Unknown choice: 7"));
    assert!(output.contains("Goodbye."));
}

#[test]
fn given_menu_lines_when_parsing_then_choices_match() {
    assert_eq!(
        MenuChoice::parse("1\n"),
        MenuChoice::Open(TaskMode::ExplainScheme)
    );
    assert_eq!(
        MenuChoice::parse(" Complaint "),
        MenuChoice::Open(TaskMode::DraftComplaint)
    );
    assert_eq!(MenuChoice::parse("Q"), MenuChoice::Quit);
    assert_eq!(MenuChoice::parse("exit"), MenuChoice::Quit);
    assert_eq!(MenuChoice::parse(""), MenuChoice::Unknown);
}
