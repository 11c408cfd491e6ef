use std::path::PathBuf;

use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Config file not found: {path}")]
    MissingConfig { path: PathBuf },

    #[error("Failed to initialise logging: {0}")]
    Logging(String),

    #[error(transparent)]
    Favicrop(#[from] favicrop::Error),
}
