use crate::error::model_error::ModelError;
use crate::{ErrorLocation, Prompt, TaskMode};

use std::panic::Location;

/// Builder for composing validated [`Prompt`] instances.
///
/// The final text is `preamble + instruction + user_text`, concatenated with
/// no separators of its own. The instruction is optional and defaults to
/// empty; the user text is kept exactly as typed.
#[derive(Debug, Default)]
pub struct PromptBuilder {
    mode: Option<TaskMode>,
    preamble: Option<String>,
    instruction: Option<String>,
    user_text: Option<String>,
}

impl PromptBuilder {
    pub fn with_mode(mut self, mode: TaskMode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn with_preamble(mut self, preamble: impl Into<String>) -> Self {
        self.preamble = Some(preamble.into());
        self
    }

    pub fn with_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.instruction = Some(instruction.into());
        self
    }

    pub fn with_user_text(mut self, user_text: impl Into<String>) -> Self {
        self.user_text = Some(user_text.into());
        self
    }

    /// Build the Prompt with validation.
    #[track_caller]
    pub fn build(self) -> Result<Prompt, ModelError> {
        let mode = self.mode.ok_or_else(|| ModelError::Validation {
            message: String::from("Task mode is required"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let preamble = self.preamble.ok_or_else(|| ModelError::Validation {
            message: String::from("Preamble is required"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        if preamble.trim().is_empty() {
            return Err(ModelError::Validation {
                message: String::from("Preamble cannot be empty"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let user_text = self.user_text.ok_or_else(|| ModelError::Validation {
            message: String::from("User text is required"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        if user_text.trim().is_empty() {
            return Err(ModelError::Validation {
                message: String::from("User text cannot be blank"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let instruction = self.instruction.unwrap_or_default();

        let mut text = String::with_capacity(preamble.len() + instruction.len() + user_text.len());
        text.push_str(&preamble);
        text.push_str(&instruction);
        text.push_str(&user_text);

        Ok(Prompt { mode, text })
    }
}
