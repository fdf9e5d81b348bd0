pub mod builder;

use crate::TaskMode;

use std::fmt::{Display, Formatter, Result as FormatResult};

/// A fully composed request string, ready to send.
///
/// Only [`builder::PromptBuilder`] can create one, so every `Prompt` in the
/// system starts with a non-empty preamble and ends with non-blank user text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub(crate) mode: TaskMode,
    pub(crate) text: String,
}

impl Prompt {
    pub fn mode(&self) -> TaskMode {
        self.mode
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl Display for Prompt {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        f.write_str(&self.text)
    }
}
