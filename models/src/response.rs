use crate::TaskMode;

use std::fmt::{Display, Formatter, Result as FormatResult};

use serde::Serialize;

/// Text returned by the model for one prompt.
///
/// Opaque: no structure is imposed and nothing is stripped. The text is
/// expected to be markdown and is rendered exactly as received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelResponse {
    mode: TaskMode,
    text: String,
}

impl ModelResponse {
    pub fn new(mode: TaskMode, text: impl Into<String>) -> Self {
        Self {
            mode,
            text: text.into(),
        }
    }

    pub fn mode(&self) -> TaskMode {
        self.mode
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

impl Display for ModelResponse {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        f.write_str(&self.text)
    }
}
