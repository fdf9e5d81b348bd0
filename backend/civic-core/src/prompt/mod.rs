pub mod templates;

pub use templates::{COMPLAINT_INSTRUCTION, PREAMBLE, SCHEME_INSTRUCTION};

use models::{ModelError, Prompt, PromptBuilder, TaskMode};

/// Instruction inserted between the preamble and the user's text.
pub fn task_instruction(mode: TaskMode) -> &'static str {
    match mode {
        TaskMode::ExplainScheme => SCHEME_INSTRUCTION,
        TaskMode::DraftComplaint => COMPLAINT_INSTRUCTION,
    }
}

/// Compose `PREAMBLE + task_instruction(mode) + user_text`.
///
/// # Errors
///
/// Returns [`ModelError::Validation`] if `user_text` is blank.
#[track_caller]
pub fn compose_prompt(mode: TaskMode, user_text: &str) -> Result<Prompt, ModelError> {
    PromptBuilder::default()
        .with_mode(mode)
        .with_preamble(PREAMBLE)
        .with_instruction(task_instruction(mode))
        .with_user_text(user_text)
        .build()
}
