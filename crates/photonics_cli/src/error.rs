//! CLI error types

use crate::config::ConfigError;
use photonics_core::types::OpticsError;
use photonics_neff::NeffError;
use thiserror::Error;

/// Errors surfaced by CLI commands
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Neff(#[from] NeffError),

    #[error(transparent)]
    Optics(#[from] OpticsError),

    #[error("Failed to write output: {0}")]
    Output(String),
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Output(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Output(e.to_string())
    }
}

impl From<csv::Error> for CliError {
    fn from(e: csv::Error) -> Self {
        CliError::Output(e.to_string())
    }
}

/// Result alias for CLI commands
pub type Result<T> = std::result::Result<T, CliError>;
