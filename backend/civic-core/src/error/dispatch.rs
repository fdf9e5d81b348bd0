use crate::error::GenerateError;

use models::ModelError;

use thiserror::Error as ThisError;

/// Failure of one dispatched request.
///
/// Both variants are request errors: shown inline, never fatal.
#[derive(Debug, ThisError)]
pub enum DispatchError {
    #[error("Prompt Error: {0}")]
    Prompt(#[from] ModelError),

    #[error("Generation Error: {0}")]
    Generate(#[from] GenerateError),
}

impl DispatchError {
    pub fn error_category(&self) -> &'static str {
        match self {
            DispatchError::Prompt(_) => "prompt",
            DispatchError::Generate(e) => e.error_category(),
        }
    }
}
