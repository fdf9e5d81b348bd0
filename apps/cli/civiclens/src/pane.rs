//! The two task panes and what happens when their button is pressed.

use crate::busy::BusyIndicator;

use civic_core::{Dispatcher, TextGenerator};
use models::{ModelResponse, TaskMode};

use log::info;

/// Headline shown above any request failure. Every cause gets the same one.
pub const REQUEST_FAILED_MESSAGE: &str = "Could not get a response from CivicLens AI.";

/// Static description of one pane.
#[derive(Debug, PartialEq, Eq)]
pub struct Pane {
    pub mode: TaskMode,
    pub tab_title: &'static str,
    pub subheading: &'static str,
    pub placeholder: &'static str,
    pub button_label: &'static str,
    pub busy_message: &'static str,
    pub empty_warning: &'static str,
}

pub const SCHEME_PANE: Pane = Pane {
    mode: TaskMode::ExplainScheme,
    tab_title: "📜 Government Schemes",
    subheading: "Ask about a government scheme",
    placeholder: "Example: Am I eligible for PMAY housing scheme?",
    button_label: "Check Scheme Details",
    busy_message: "Analyzing scheme details...",
    empty_warning: "Please enter a scheme-related question.",
};

pub const COMPLAINT_PANE: Pane = Pane {
    mode: TaskMode::DraftComplaint,
    tab_title: "🛠 Civic Complaints",
    subheading: "Describe your civic issue",
    placeholder: "Example: Garbage not collected for 10 days in my area",
    button_label: "Generate Complaint Draft",
    busy_message: "Drafting complaint...",
    empty_warning: "Please describe your civic issue.",
};

impl Pane {
    pub fn for_mode(mode: TaskMode) -> &'static Pane {
        match mode {
            TaskMode::ExplainScheme => &SCHEME_PANE,
            TaskMode::DraftComplaint => &COMPLAINT_PANE,
        }
    }
}

/// Result of pressing a pane's button once.
#[derive(Debug, PartialEq, Eq)]
pub enum PaneOutcome {
    /// Input was blank; nothing was sent
    Warning(&'static str),
    /// Model text, to be rendered verbatim
    Rendered(ModelResponse),
    /// The request failed; carries the full user-facing message
    Failed(String),
}

/// Press the pane's button with `input`.
///
/// Blank input is answered with the pane's warning without touching the
/// dispatcher. Otherwise the busy indicator runs for exactly as long as the
/// single outstanding call.
pub async fn submit<G: TextGenerator>(
    pane: &Pane,
    dispatcher: &Dispatcher<G>,
    input: &str,
    show_busy: bool,
) -> PaneOutcome {
    if input.trim().is_empty() {
        info!("Blank input in {} pane, not dispatching", pane.mode.as_str());
        return PaneOutcome::Warning(pane.empty_warning);
    }

    let busy = BusyIndicator::start(pane.busy_message, show_busy);
    let result = dispatcher.dispatch(pane.mode, input).await;
    busy.finish();

    match result {
        Ok(response) => PaneOutcome::Rendered(response),
        Err(e) => PaneOutcome::Failed(format!("{REQUEST_FAILED_MESSAGE}\n{e}")),
    }
}

/// Inline notice shown in a pane's result region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Warning(String),
    Error(String),
}

/// What a pane's result region currently shows.
///
/// A region holds either the latest successful text or a notice, never both:
/// a warning or failure clears any earlier result.
#[derive(Debug)]
pub struct PaneState {
    pane: &'static Pane,
    result: Option<ModelResponse>,
    notice: Option<Notice>,
}

impl PaneState {
    pub fn new(pane: &'static Pane) -> Self {
        Self {
            pane,
            result: None,
            notice: None,
        }
    }

    pub fn pane(&self) -> &'static Pane {
        self.pane
    }

    pub fn result(&self) -> Option<&ModelResponse> {
        self.result.as_ref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn apply(&mut self, outcome: PaneOutcome) {
        match outcome {
            PaneOutcome::Rendered(response) => {
                self.result = Some(response);
                self.notice = None;
            }
            PaneOutcome::Warning(message) => {
                self.result = None;
                self.notice = Some(Notice::Warning(message.to_string()));
            }
            PaneOutcome::Failed(message) => {
                self.result = None;
                self.notice = Some(Notice::Error(message));
            }
        }
    }
}
