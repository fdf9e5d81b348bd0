use common::ErrorLocation;

use thiserror::Error;

/// Errors raised by the terminal front end.
///
/// Request failures never show up here; they are rendered inline by the pane
/// that issued them. What remains is startup and terminal I/O.
#[derive(Debug, Error)]
pub enum CivicLensError {
    /// Credential, config or client setup failed; nothing can be shown
    #[error("Configuration Error: {message} {location}")]
    Startup {
        message: String,
        location: ErrorLocation,
    },

    /// Log file or dispatcher could not be set up
    #[error("Logger Error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    /// Reading input or writing output failed
    #[error("Terminal I/O Error: {message} {location}")]
    Io {
        message: String,
        location: ErrorLocation,
    },
}

impl CivicLensError {
    #[track_caller]
    pub fn startup(message: impl Into<String>) -> Self {
        CivicLensError::Startup {
            message: message.into(),
            location: ErrorLocation::caller(),
        }
    }

    pub fn is_startup(&self) -> bool {
        matches!(self, CivicLensError::Startup { .. })
    }
}

impl From<std::io::Error> for CivicLensError {
    #[track_caller]
    fn from(error: std::io::Error) -> Self {
        CivicLensError::Io {
            message: error.to_string(),
            location: ErrorLocation::caller(),
        }
    }
}
