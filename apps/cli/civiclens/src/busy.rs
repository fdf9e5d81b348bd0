//! Indeterminate "working" indicator shown while a request is outstanding.
//!
//! Only draws when stderr is a terminal, so piped output and test runs stay
//! clean. The indicator is cosmetic: nothing about the request depends on it
//! drawing.

use std::io::{IsTerminal, stderr};
use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};
use log::debug;

const TICK_INTERVAL: Duration = Duration::from_millis(80);
const SPINNER_TEMPLATE: &str = "{spinner} {msg}";
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// The spinner is uncolored, so `NO_COLOR` has no bearing on it.
pub fn should_draw(requested: bool, stderr_is_terminal: bool) -> bool {
    requested && stderr_is_terminal
}

pub struct BusyIndicator {
    spinner: Option<ProgressBar>,
    message: String,
    start_time: Instant,
}

impl BusyIndicator {
    /// Start the indicator. With `requested == false` nothing is drawn but
    /// timing is still recorded.
    pub fn start(message: &str, requested: bool) -> Self {
        let enabled = should_draw(requested, stderr().is_terminal());

        let spinner = enabled.then(|| {
            let pb = ProgressBar::new_spinner();
            if let Ok(style) = ProgressStyle::default_spinner()
                .tick_strings(SPINNER_FRAMES)
                .template(SPINNER_TEMPLATE)
            {
                pb.set_style(style);
            }
            pb.set_message(message.to_string());
            pb.enable_steady_tick(TICK_INTERVAL);
            pb
        });

        Self {
            spinner,
            message: message.to_string(),
            start_time: Instant::now(),
        }
    }

    pub fn is_drawing(&self) -> bool {
        self.spinner.is_some()
    }

    /// Clear the indicator and return how long it was shown.
    pub fn finish(mut self) -> Duration {
        self.clear();
        let elapsed = self.start_time.elapsed();
        debug!("'{}' finished after {:?}", self.message, elapsed);
        elapsed
    }

    fn clear(&mut self) {
        if let Some(pb) = self.spinner.take() {
            pb.finish_and_clear();
        }
    }
}

impl Drop for BusyIndicator {
    fn drop(&mut self) {
        self.clear();
    }
}
