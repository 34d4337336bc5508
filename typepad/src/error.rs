use std::path::PathBuf;

use derive_more::From;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, From, Error)]
pub enum AppError {
    #[error("{0}")]
    Config(ConfigError),

    #[error("Terminal error: {0}")]
    Io(std::io::Error),

    #[error("Failed to open log file '{path}': {error}")]
    #[from(skip)]
    LogFile {
        path: PathBuf,
        error: std::io::Error,
    },

    #[error("Failed to initialize logging: {0}")]
    Logging(Box<dyn std::error::Error + Send + Sync>),

    #[error("Failed to render settings: {0}")]
    Serialize(toml::ser::Error),
}
