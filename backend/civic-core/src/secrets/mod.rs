//! Credential loading.
//!
//! The Gemini key is looked up once at startup:
//! 1. `GEMINI_API_KEY` in the process environment, after loading `.env` from
//!    the working directory or the executable's directory
//! 2. `GEMINI_API_KEY` at the top level of the secrets TOML file
//!    (`.streamlit/secrets.toml` unless overridden)
//!
//! Empty values count as absent. A key that is found is validated before it
//! is wrapped; an invalid key is as fatal as a missing one.

pub mod validation;

use crate::GEMINI_API_KEY_ENV;
use crate::error::SecretsError;

use validation::KeyValidator;

use common::{ErrorLocation, RedactedApiKey};

use std::env;
use std::fmt::{Display, Formatter, Result as FormatResult};
use std::panic::Location;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

/// Where the credential came from (safe to log).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeySource {
    Environment,
    SecretsFile(PathBuf),
}

impl Display for KeySource {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        match self {
            KeySource::Environment => write!(f, "environment"),
            KeySource::SecretsFile(path) => write!(f, "{}", path.display()),
        }
    }
}

/// A validated credential and its origin.
#[derive(Debug)]
pub struct LoadedKey {
    pub key: RedactedApiKey,
    pub source: KeySource,
}

/// Result of attempting to load .env file.
#[derive(Debug)]
pub struct EnvLoadResult {
    pub path: Option<PathBuf>,
    pub loaded: bool,
}

/// Load and validate the Gemini key.
///
/// # Errors
///
/// * [`SecretsError::Missing`] - not in the environment nor in `secrets_file`
/// * [`SecretsError::Read`] / [`SecretsError::Parse`] - secrets file is broken
/// * [`SecretsError::KeyValidation`] - the value found is not a usable key
/// * [`SecretsError::EnvLoad`] - the env var is not valid unicode
pub fn load_api_key(secrets_file: &Path) -> Result<LoadedKey, SecretsError> {
    let env_result = try_load_dotenv();
    if !env_result.loaded {
        debug!("No .env file found - checking existing environment variables");
    }

    let (value, source) = match read_env_key()? {
        Some(value) => (value, KeySource::Environment),
        None => match read_secrets_file(secrets_file)? {
            Some(value) => (value, KeySource::SecretsFile(secrets_file.to_path_buf())),
            None => {
                warn!("{GEMINI_API_KEY_ENV} not found");
                return Err(SecretsError::missing(GEMINI_API_KEY_ENV, secrets_file));
            }
        },
    };

    let key = KeyValidator::gemini().validate_and_wrap(value).inspect_err(|e| {
        warn!("Rejected {GEMINI_API_KEY_ENV} from {source}: {e}");
    })?;

    info!("Loaded {GEMINI_API_KEY_ENV} from {source} ({})", key.masked());

    Ok(LoadedKey { key, source })
}

/// Non-empty `GEMINI_API_KEY` from the environment, if any.
fn read_env_key() -> Result<Option<String>, SecretsError> {
    match env::var(GEMINI_API_KEY_ENV) {
        Ok(value) if value.trim().is_empty() => {
            debug!("{GEMINI_API_KEY_ENV} is set but empty, ignoring");
            Ok(None)
        }
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(SecretsError::env_load(format!(
            "{GEMINI_API_KEY_ENV} contains invalid unicode"
        ))),
    }
}

/// Non-empty `GEMINI_API_KEY` from a secrets TOML file.
///
/// A missing file is not an error; it just yields `None`.
pub fn read_secrets_file(path: &Path) -> Result<Option<String>, SecretsError> {
    if !path.exists() {
        debug!("Secrets file not found at {}", path.display());
        return Ok(None);
    }

    let contents = std::fs::read_to_string(path).map_err(|e| SecretsError::Read {
        path: path.to_path_buf(),
        source: e,
        location: ErrorLocation::from(Location::caller()),
    })?;

    let table: toml::Table = toml::from_str(&contents).map_err(|e| SecretsError::Parse {
        path: path.to_path_buf(),
        reason: e.to_string(),
        location: ErrorLocation::from(Location::caller()),
    })?;

    match table.get(GEMINI_API_KEY_ENV) {
        None => Ok(None),
        Some(toml::Value::String(value)) if value.trim().is_empty() => Ok(None),
        Some(toml::Value::String(value)) => Ok(Some(value.clone())),
        Some(other) => Err(SecretsError::Parse {
            path: path.to_path_buf(),
            reason: format!(
                "{GEMINI_API_KEY_ENV} must be a string, found {}",
                other.type_str()
            ),
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}

/// Attempts to load .env from known locations.
fn try_load_dotenv() -> EnvLoadResult {
    if let Ok(path) = dotenvy::dotenv() {
        info!("Loaded .env from: {:?}", path);
        return EnvLoadResult {
            path: Some(path),
            loaded: true,
        };
    }

    if let Ok(exe_path) = env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let env_path = exe_dir.join(".env");
            if env_path.exists() {
                match dotenvy::from_path(&env_path) {
                    Ok(_) => {
                        info!("Loaded .env from: {:?}", env_path);
                        return EnvLoadResult {
                            path: Some(env_path),
                            loaded: true,
                        };
                    }
                    Err(e) => {
                        warn!("Failed to parse .env at {:?}: {}", env_path, e);
                    }
                }
            }
        }
    }

    EnvLoadResult {
        path: None,
        loaded: false,
    }
}
