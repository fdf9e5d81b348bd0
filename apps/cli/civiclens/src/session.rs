//! Interactive terminal session: the header, the tab menu and both panes.

use crate::chrome::{ABOUT_HEADING, ABOUT_TEXT, APP_TITLE, TAGLINE};
use crate::error::CivicLensError;
use crate::pane::{self, COMPLAINT_PANE, Notice, Pane, PaneState, SCHEME_PANE};

use civic_core::{Dispatcher, TextGenerator};
use models::TaskMode;

use std::io::{BufRead, Write};

use log::debug;
use owo_colors::OwoColorize;

const TEXT_AREA_END: &str = ".";
const TEXT_AREA_HINT: &str = "(type your text, finish with a line containing only '.')";
const MENU_PROMPT: &str = "Choose a tab [1/2] or q to quit: ";
const GOODBYE_MESSAGE: &str = "Goodbye.";

/// A line typed at the tab menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Open(TaskMode),
    Quit,
    Unknown,
}

impl MenuChoice {
    pub fn parse(line: &str) -> Self {
        match line.trim().to_lowercase().as_str() {
            "1" | "scheme" | "schemes" => MenuChoice::Open(TaskMode::ExplainScheme),
            "2" | "complaint" | "complaints" => MenuChoice::Open(TaskMode::DraftComplaint),
            "q" | "quit" | "exit" => MenuChoice::Quit,
            _ => MenuChoice::Unknown,
        }
    }
}

pub struct Session<'d, R, W, G> {
    input: R,
    output: W,
    dispatcher: &'d Dispatcher<G>,
    panes: [PaneState; 2],
    styled: bool,
    show_busy: bool,
}

impl<'d, R: BufRead, W: Write, G: TextGenerator> Session<'d, R, W, G> {
    /// Plain output, no spinner. Use the `with_*` methods for a real terminal.
    pub fn new(input: R, output: W, dispatcher: &'d Dispatcher<G>) -> Self {
        Self {
            input,
            output,
            dispatcher,
            panes: [PaneState::new(&SCHEME_PANE), PaneState::new(&COMPLAINT_PANE)],
            styled: false,
            show_busy: false,
        }
    }

    pub fn with_style(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    pub fn with_busy_indicator(mut self, show_busy: bool) -> Self {
        self.show_busy = show_busy;
        self
    }

    pub fn pane_state(&self, mode: TaskMode) -> &PaneState {
        &self.panes[slot(mode)]
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until the user quits or input ends.
    ///
    /// Request failures are rendered and the menu comes back; only terminal
    /// I/O errors end the session early.
    pub async fn run(&mut self) -> Result<(), CivicLensError> {
        self.print_header()?;

        loop {
            self.print_menu()?;

            let Some(line) = self.read_line()? else {
                debug!("Input closed at menu");
                break;
            };

            match MenuChoice::parse(&line) {
                MenuChoice::Open(mode) => self.open_pane(mode).await?,
                MenuChoice::Quit => break,
                MenuChoice::Unknown => {
                    writeln!(self.output, "Unknown choice: {}", line.trim())?;
                }
            }
        }

        writeln!(self.output, "{GOODBYE_MESSAGE}")?;
        self.output.flush()?;
        Ok(())
    }

    async fn open_pane(&mut self, mode: TaskMode) -> Result<(), CivicLensError> {
        let pane = Pane::for_mode(mode);
        debug!("Opened {} pane", mode.as_str());

        writeln!(self.output)?;
        let subheading = self.heading(pane.subheading);
        writeln!(self.output, "{subheading}")?;
        writeln!(self.output, "{}", pane.placeholder)?;
        writeln!(self.output, "{TEXT_AREA_HINT}")?;
        self.output.flush()?;

        let text = self.read_text_area()?;

        writeln!(self.output, "[{}]", pane.button_label)?;
        self.output.flush()?;

        let outcome = pane::submit(pane, self.dispatcher, &text, self.show_busy).await;

        let state = &mut self.panes[slot(mode)];
        state.apply(outcome);
        render_region(&mut self.output, state, self.styled)?;
        Ok(())
    }

    fn print_header(&mut self) -> Result<(), CivicLensError> {
        let title = self.heading(APP_TITLE);
        let about = self.heading(ABOUT_HEADING);
        writeln!(self.output, "{title}")?;
        writeln!(self.output, "{TAGLINE}")?;
        writeln!(self.output)?;
        writeln!(self.output, "{about}")?;
        writeln!(self.output, "{ABOUT_TEXT}")?;
        Ok(())
    }

    fn print_menu(&mut self) -> Result<(), CivicLensError> {
        writeln!(self.output)?;
        for (index, state) in self.panes.iter().enumerate() {
            writeln!(self.output, "  [{}] {}", index + 1, state.pane().tab_title)?;
        }
        writeln!(self.output, "  [q] Quit")?;
        write!(self.output, "{MENU_PROMPT}")?;
        self.output.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>, CivicLensError> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 { Ok(None) } else { Ok(Some(line)) }
    }

    /// Lines up to a lone `.` or end of input, joined with `\n`.
    ///
    /// Blank lines inside the text are kept, so pasted paragraphs arrive whole.
    fn read_text_area(&mut self) -> Result<String, CivicLensError> {
        let mut lines = Vec::new();

        while let Some(line) = self.read_line()? {
            let content = line.trim_end_matches(['\r', '\n']);
            if content.trim() == TEXT_AREA_END {
                break;
            }
            lines.push(content.to_string());
        }

        Ok(lines.join("\n"))
    }

    fn heading(&self, text: &str) -> String {
        if self.styled {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }
}

fn slot(mode: TaskMode) -> usize {
    match mode {
        TaskMode::ExplainScheme => 0,
        TaskMode::DraftComplaint => 1,
    }
}

/// Write a pane's result region: the model text verbatim, or its notice.
pub fn render_region<W: Write>(
    output: &mut W,
    state: &PaneState,
    styled: bool,
) -> Result<(), CivicLensError> {
    if let Some(response) = state.result() {
        let text = response.text();
        write!(output, "{text}")?;
        if !text.ends_with('\n') {
            writeln!(output)?;
        }
    }

    match state.notice() {
        Some(Notice::Warning(message)) if styled => {
            writeln!(output, "{}", format!("⚠ {message}").yellow())?
        }
        Some(Notice::Warning(message)) => writeln!(output, "⚠ {message}")?,
        Some(Notice::Error(message)) if styled => {
            writeln!(output, "{}", format!("✖ {message}").red())?
        }
        Some(Notice::Error(message)) => writeln!(output, "✖ {message}")?,
        None => {}
    }

    output.flush()?;
    Ok(())
}
