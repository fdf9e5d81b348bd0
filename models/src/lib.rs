//! Domain models for CivicLens.
//!
//! Pure data passed between the dispatcher and the terminal front end. Models
//! have no I/O; the only logic here is the validation performed by
//! [`PromptBuilder::build`].

pub mod error;
pub mod prompt;
pub mod response;
pub mod task_mode;

#[cfg(test)]
mod tests;

pub use common::ErrorLocation;
pub use error::model_error::ModelError;
pub use prompt::Prompt;
pub use prompt::builder::PromptBuilder;
pub use response::ModelResponse;
pub use task_mode::TaskMode;
