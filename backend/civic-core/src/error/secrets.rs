//! Error types for credential loading.
//!
//! Every variant here is a startup configuration error: the caller is
//! expected to print it and stop before any pane is shown.

use common::ErrorLocation;

use std::path::PathBuf;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum SecretsError {
    #[error("Missing Credential Error: {name} not found in the environment or {secrets_file} {location}")]
    Missing {
        name: &'static str,
        secrets_file: PathBuf,
        location: ErrorLocation,
    },

    #[error("Environment load failed: {message} {location}")]
    EnvLoad {
        message: String,
        location: ErrorLocation,
    },

    #[error("Secrets Read Error: {path}: {source} {location}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Secrets Parse Error: {path}: {reason} {location}")]
    Parse {
        path: PathBuf,
        reason: String,
        location: ErrorLocation,
    },

    #[error("Key validation failed for {name}: {reason} {location}")]
    KeyValidation {
        name: &'static str,
        reason: KeyValidationFailure,
        location: ErrorLocation,
    },
}

/// Specific reasons for key validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyValidationFailure {
    Empty,
    TooShort { min: usize, actual: usize },
    TooLong { max: usize, actual: usize },
    InvalidPrefix { expected: &'static str, actual: String },
    PlaceholderDetected { pattern: &'static str },
    InvalidCharacters,
}

impl std::fmt::Display for KeyValidationFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "key is empty"),
            Self::TooShort { min, actual } => {
                write!(f, "key too short ({} chars, minimum {})", actual, min)
            }
            Self::TooLong { max, actual } => {
                write!(f, "key too long ({} chars, maximum {})", actual, max)
            }
            Self::InvalidPrefix { expected, actual } => {
                write!(f, "expected prefix '{}', got '{}'", expected, actual)
            }
            Self::PlaceholderDetected { pattern } => {
                write!(f, "detected placeholder pattern '{}'", pattern)
            }
            Self::InvalidCharacters => write!(f, "contains invalid characters"),
        }
    }
}

impl SecretsError {
    #[track_caller]
    pub fn missing(name: &'static str, secrets_file: impl Into<PathBuf>) -> Self {
        SecretsError::Missing {
            name,
            secrets_file: secrets_file.into(),
            location: ErrorLocation::caller(),
        }
    }

    #[track_caller]
    pub fn env_load(message: impl Into<String>) -> Self {
        SecretsError::EnvLoad {
            message: message.into(),
            location: ErrorLocation::caller(),
        }
    }

    #[track_caller]
    pub fn key_validation(name: &'static str, reason: KeyValidationFailure) -> Self {
        SecretsError::KeyValidation {
            name,
            reason,
            location: ErrorLocation::caller(),
        }
    }

    /// True when no credential was found at all, as opposed to one that was
    /// found but unusable.
    pub fn is_missing(&self) -> bool {
        matches!(self, SecretsError::Missing { .. })
    }
}
