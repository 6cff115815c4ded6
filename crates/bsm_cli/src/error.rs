//! CLI error types.

use bsm_core::types::DistributionError;
use bsm_models::instruments::InstrumentError;
use bsm_models::profile::ProfileError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced to the command line.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Contract terms or spot were rejected.
    #[error("Instrument error: {0}")]
    Instrument(#[from] InstrumentError),

    /// Quantile requested outside (0, 1).
    #[error("Distribution error: {0}")]
    Distribution(#[from] DistributionError),

    /// Spot ladder parameters were rejected.
    #[error("Profile error: {0}")]
    Profile(#[from] ProfileError),

    /// Output could not be serialised.
    #[error("Serialisation error: {0}")]
    Serialisation(#[from] serde_json::Error),

    /// Command-line arguments are inconsistent.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
