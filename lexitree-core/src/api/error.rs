//! Error types for the API

use crate::application::ParseError;
use crate::domain::ConfigError;
use thiserror::Error;

/// Error type for API operations
#[derive(Debug, Error)]
pub enum Error {
    /// Language configuration could not be loaded, compiled or validated
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigError),

    /// Unknown language name or code
    #[error("Invalid language: {0}")]
    InvalidLanguage(String),

    /// Parsing aborted
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
}

impl Error {
    pub(crate) fn invalid_config(message: impl Into<String>) -> Self {
        Error::Configuration(ConfigError::Invalid(message.into()))
    }
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, Error>;
