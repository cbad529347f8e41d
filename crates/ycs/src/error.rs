//! CLI error types.

use ycs_client::{ClientError, ParseValueError};
use ycs_config::ConfigError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Client(#[from] ClientError),

    #[error("{0}")]
    Parse(#[from] ParseValueError),

    #[error("{0}")]
    Validation(String),
}
