//! Everything that must succeed before a pane is shown.

use crate::cli::Cli;
use crate::error::CivicLensError;

use civic_core::config::{AppConfig, default_config_dir};
use civic_core::secrets::load_api_key;
use civic_core::{Dispatcher, GeminiClient};

use std::path::PathBuf;

use log::{error, info};

/// Inputs to [`prepare`], taken from the command line.
#[derive(Debug, Clone)]
pub struct StartupOptions {
    pub config_dir: Option<PathBuf>,
    pub secrets_file: PathBuf,
}

impl From<&Cli> for StartupOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            config_dir: cli.config_dir.clone(),
            secrets_file: cli.secrets_file.clone(),
        }
    }
}

/// State built once at startup and borrowed by every pane.
#[derive(Debug)]
pub struct AppContext {
    pub dispatcher: Dispatcher<GeminiClient>,
}

/// Load config and credential, then build the Gemini client.
///
/// # Errors
///
/// Every failure comes back as [`CivicLensError::Startup`]: the caller prints
/// it and exits without rendering anything else.
pub fn prepare(options: &StartupOptions) -> Result<AppContext, CivicLensError> {
    let config_dir = match &options.config_dir {
        Some(dir) => dir.clone(),
        None => default_config_dir().map_err(|e| startup_error(e.to_string()))?,
    };

    let config = AppConfig::load(&config_dir).map_err(|e| startup_error(e.to_string()))?;

    let loaded = load_api_key(&options.secrets_file).map_err(|e| startup_error(e.to_string()))?;

    let client = GeminiClient::new(&config.generator, loaded.key)
        .map_err(|e| startup_error(format!("Failed to build Gemini client: {e}")))?;

    info!(
        "Startup complete: model={}, endpoint={}, key from {}",
        client.model(),
        client.endpoint(),
        loaded.source
    );

    Ok(AppContext {
        dispatcher: Dispatcher::new(client),
    })
}

#[track_caller]
fn startup_error(message: String) -> CivicLensError {
    error!("Startup failed: {message}");
    CivicLensError::startup(message)
}
