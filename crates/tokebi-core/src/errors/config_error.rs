//! Configuration errors.

use super::error_code::{self, TokebiErrorCode};

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("no API key set: configure `api_key` (plugin parameter `apiKey`) with a real key")]
    MissingApiKey,

    #[error("API key is the sample placeholder {key:?}: configure a real key")]
    PlaceholderApiKey { key: String },

    #[error("Config file not found: {path}")]
    FileNotFound { path: String },

    #[error("Config parse error in {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Config validation failed for {field}: {message}")]
    ValidationFailed { field: String, message: String },
}

impl TokebiErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingApiKey | Self::PlaceholderApiKey { .. } => error_code::MISSING_API_KEY,
            _ => error_code::CONFIG_ERROR,
        }
    }
}
