//! Prompt Dispatcher: compose, send, return the top candidate's text.

use crate::error::DispatchError;
use crate::generator::TextGenerator;
use crate::prompt::compose_prompt;

use models::{ModelResponse, TaskMode};

use log::{debug, info, warn};

/// Composes a request for a [`TaskMode`] and sends it through a [`TextGenerator`].
///
/// Holds no per-request state. One dispatcher is built at startup and every
/// pane borrows it; each `dispatch` issues exactly one call and never retries.
#[derive(Debug)]
pub struct Dispatcher<G> {
    generator: G,
}

impl<G: TextGenerator> Dispatcher<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Send `user_text` for `mode` and return the model's text verbatim.
    ///
    /// Callers are expected to reject blank input before calling; if they
    /// don't, composition fails and nothing is sent.
    ///
    /// # Errors
    ///
    /// * [`DispatchError::Prompt`] - `user_text` is blank
    /// * [`DispatchError::Generate`] - the outbound call failed for any reason
    pub async fn dispatch(
        &self,
        mode: TaskMode,
        user_text: &str,
    ) -> Result<ModelResponse, DispatchError> {
        let prompt = compose_prompt(mode, user_text)?;

        debug!(
            "Dispatching {} request ({} chars composed)",
            mode.as_str(),
            prompt.len()
        );

        match self.generator.generate(prompt.as_str()).await {
            Ok(text) => {
                info!("{} request completed ({} chars)", mode.as_str(), text.len());
                Ok(ModelResponse::new(mode, text))
            }
            Err(e) => {
                warn!(
                    "{} request failed [{}]: {}",
                    mode.as_str(),
                    e.error_category(),
                    e
                );
                Err(DispatchError::Generate(e))
            }
        }
    }
}
