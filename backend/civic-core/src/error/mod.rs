pub mod config;
pub mod dispatch;
pub mod generate;
pub mod secrets;

pub use config::ConfigError;
pub use dispatch::DispatchError;
pub use generate::GenerateError;
pub use secrets::{KeyValidationFailure, SecretsError};

use thiserror::Error;

/// Umbrella error for callers that only need to report a core failure.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Secrets(#[from] SecretsError),

    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}
