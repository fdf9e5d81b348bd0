//! Drive a single pane once from the command line.
//!
//! The response goes to stdout untouched so it can be piped; warnings and
//! failures go to stderr.

use crate::cli::Command;
use crate::error::CivicLensError;
use crate::pane::{self, Pane, PaneOutcome};

use civic_core::{Dispatcher, TextGenerator};
use common::ErrorLocation;

use std::io::Write;

/// Returns `Ok(true)` when a response was printed.
pub async fn run<G, W, E>(
    dispatcher: &Dispatcher<G>,
    command: &Command,
    output: &mut W,
    errors: &mut E,
    show_busy: bool,
) -> Result<bool, CivicLensError>
where
    G: TextGenerator,
    W: Write,
    E: Write,
{
    let pane = Pane::for_mode(command.mode());

    match pane::submit(pane, dispatcher, command.text(), show_busy).await {
        PaneOutcome::Rendered(response) => {
            if command.json() {
                let json = serde_json::to_string_pretty(&response).map_err(|e| {
                    CivicLensError::Io {
                        message: format!("Failed to encode response: {e}"),
                        location: ErrorLocation::caller(),
                    }
                })?;
                writeln!(output, "{json}")?;
            } else {
                let text = response.text();
                write!(output, "{text}")?;
                if !text.ends_with('\n') {
                    writeln!(output)?;
                }
            }
            output.flush()?;
            Ok(true)
        }
        PaneOutcome::Warning(message) => {
            writeln!(errors, "⚠ {message}")?;
            Ok(false)
        }
        PaneOutcome::Failed(message) => {
            writeln!(errors, "✖ {message}")?;
            Ok(false)
        }
    }
}
