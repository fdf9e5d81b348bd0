use crate::TaskMode;

#[test]
fn given_task_modes_when_displayed_then_human_readable() {
    assert_eq!(TaskMode::ExplainScheme.to_string(), "explain scheme");
    assert_eq!(TaskMode::DraftComplaint.to_string(), "draft complaint");
}

/// **VALUE**: Verifies the log identifiers match the serde representation.
///
/// **BUG THIS CATCHES**: Would catch the two drifting apart, which makes log
/// lines and JSON output disagree about the same request.
#[test]
fn given_task_modes_when_serialized_then_match_as_str() {
    for mode in TaskMode::ALL {
        let json = serde_json::to_string(&mode).unwrap();
        assert_eq!(json, format!("\"{}\"", mode.as_str()));
    }
}
