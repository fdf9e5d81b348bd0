mod pane;
mod session;

use civic_core::error::GenerateError;
use civic_core::{Dispatcher, TextGenerator};

use std::sync::Mutex;

/// Generator stub that answers every request from a fixed script.
pub(crate) struct ScriptedGenerator {
    reply: Result<String, u16>,
    requests: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    pub(crate) fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn failing(status: u16) -> Self {
        Self {
            reply: Err(status),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, request: &str) -> Result<String, GenerateError> {
        self.requests.lock().unwrap().push(request.to_string());
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(status) => Err(GenerateError::from_http_response(*status, "scripted failure")),
        }
    }
}

pub(crate) fn dispatcher_replying(text: &str) -> Dispatcher<ScriptedGenerator> {
    Dispatcher::new(ScriptedGenerator::replying(text))
}

pub(crate) fn dispatcher_failing(status: u16) -> Dispatcher<ScriptedGenerator> {
    Dispatcher::new(ScriptedGenerator::failing(status))
}
