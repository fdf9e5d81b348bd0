//! Error types for the outbound generation call.
//!
//! - HTTP status codes stored directly (not parsed from strings)
//! - `error_category()` feeds log lines only; users see one generic message
//! - `#[track_caller]` for automatic location capture

use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum GenerateError {
    #[error("API Error: HTTP {status_code} - {message} {location}")]
    Api {
        status_code: HttpStatusCode,
        message: String,
        location: ErrorLocation,
    },

    #[error("Network Error: {message} {location}")]
    Network {
        message: String,
        is_timeout: bool,
        is_connection: bool,
        location: ErrorLocation,
    },

    #[error("JSON Error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
    },

    #[error("URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },

    #[error("Empty Response Error: {message} {location}")]
    EmptyResponse {
        message: String,
        location: ErrorLocation,
    },
}

impl GenerateError {
    #[track_caller]
    pub fn empty_response(message: impl Into<String>) -> Self {
        GenerateError::EmptyResponse {
            message: message.into(),
            location: ErrorLocation::caller(),
        }
    }

    /// Create from an HTTP response with explicit status code.
    #[track_caller]
    pub fn from_http_response(status_code: u16, message: impl Into<String>) -> Self {
        GenerateError::Api {
            status_code: HttpStatusCode(status_code),
            message: message.into(),
            location: ErrorLocation::caller(),
        }
    }

    /// Short label for log lines.
    pub fn error_category(&self) -> &'static str {
        match self {
            GenerateError::Api { status_code, .. } if status_code.is_auth_error() => "auth",
            GenerateError::Api { status_code, .. } if status_code.is_rate_limited() => "quota",
            GenerateError::Api { status_code, .. } if status_code.is_client_error() => {
                "client_error"
            }
            GenerateError::Api { status_code, .. } if status_code.is_server_error() => {
                "server_error"
            }
            GenerateError::Api { .. } => "api",
            GenerateError::Network { is_timeout: true, .. } => "timeout",
            GenerateError::Network { is_connection: true, .. } => "connection",
            GenerateError::Network { .. } => "network",
            GenerateError::Json { .. } => "json",
            GenerateError::UrlParse { .. } => "url",
            GenerateError::EmptyResponse { .. } => "empty_response",
        }
    }

    /// Get HTTP status code if applicable.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            GenerateError::Api { status_code, .. } => Some(status_code.0),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for GenerateError {
    /// Categorise before converting to string; reqwest's Display loses the kind.
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        if let Some(status) = error.status() {
            return GenerateError::Api {
                status_code: HttpStatusCode(status.as_u16()),
                message: error.to_string(),
                location: ErrorLocation::from(Location::caller()),
            };
        }

        if error.is_decode() {
            return GenerateError::Json {
                message: error.to_string(),
                location: ErrorLocation::from(Location::caller()),
            };
        }

        GenerateError::Network {
            message: error.to_string(),
            is_timeout: error.is_timeout(),
            is_connection: error.is_connect(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<url::ParseError> for GenerateError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        GenerateError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for GenerateError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        GenerateError::Json {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
