//! Core of CivicLens: prompt composition, the Gemini client and the dispatcher.
//!
//! The front end hands a [`models::TaskMode`] and the user's text to
//! [`dispatcher::Dispatcher::dispatch`] and gets back either the model's text
//! or a [`error::DispatchError`]. Everything that talks to the network sits
//! behind [`generator::TextGenerator`].

pub mod config;
pub mod dispatcher;
pub mod error;
pub mod generator;
pub mod prompt;
pub mod secrets;

#[cfg(test)]
mod tests;

pub use config::GeneratorConfig;
pub use dispatcher::Dispatcher;
pub use error::{CoreError, DispatchError, GenerateError};
pub use generator::TextGenerator;
pub use generator::gemini::GeminiClient;

pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
pub const GEMINI_API_HOSTNAME: &str = "generativelanguage.googleapis.com";
pub const GEMINI_API_BASE_URL: &str =
    const_format::concatcp!("https://", GEMINI_API_HOSTNAME, "/v1beta/");
pub const DEFAULT_SECRETS_FILE: &str = ".streamlit/secrets.toml";
