use std::fmt::{Display, Formatter, Result as FormatResult};

use serde::{Deserialize, Serialize};

/// The two supported task variants.
///
/// The mode only decides which instruction sits between the preamble and the
/// user's text; everything else about a request is identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskMode {
    /// Explain a government scheme or answer an eligibility question.
    ExplainScheme,
    /// Turn a described civic issue into a structured complaint.
    DraftComplaint,
}

impl TaskMode {
    pub const ALL: [TaskMode; 2] = [TaskMode::ExplainScheme, TaskMode::DraftComplaint];

    /// Stable identifier used in log lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskMode::ExplainScheme => "explain_scheme",
            TaskMode::DraftComplaint => "draft_complaint",
        }
    }
}

impl Display for TaskMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        match self {
            TaskMode::ExplainScheme => write!(f, "explain scheme"),
            TaskMode::DraftComplaint => write!(f, "draft complaint"),
        }
    }
}
