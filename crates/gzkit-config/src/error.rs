//! Error types for configuration management

use gzkit_types::Error as GzkitError;
use std::path::PathBuf;
use thiserror::Error;

/// Configuration error type
#[derive(Error, Debug)]
pub enum ConfigError {
    /// I/O error when reading or writing a configuration file
    #[error("I/O error on config file '{path}': {source}")]
    Io {
        /// Path to the configuration file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Configuration sources could not be merged or deserialized
    #[error("Failed to load configuration: {message}")]
    Parse {
        /// Error message
        message: String,
    },

    /// Configuration validation error
    #[error("Configuration validation failed: {message}")]
    Validation {
        /// Validation error message
        message: String,
    },

    /// Serialization error
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error message
        message: String,
    },
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(error: serde_yaml::Error) -> Self {
        Self::Serialization {
            message: error.to_string(),
        }
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(error: toml::ser::Error) -> Self {
        Self::Serialization {
            message: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: error.to_string(),
        }
    }
}

impl From<config::ConfigError> for ConfigError {
    fn from(error: config::ConfigError) -> Self {
        Self::Parse {
            message: error.to_string(),
        }
    }
}

impl From<ConfigError> for GzkitError {
    fn from(error: ConfigError) -> Self {
        GzkitError::config(error.to_string())
    }
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

impl ConfigError {
    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gzkit_types::ErrorKind;

    #[test]
    fn test_converts_to_config_error_kind() {
        let error: GzkitError = ConfigError::validation("bad level").into();
        assert_eq!(error.kind(), ErrorKind::Config);
        assert!(error.to_string().contains("bad level"));
    }
}
