//! Configuration management for gzkit
//!
//! Settings are layered, later sources overriding earlier ones:
//!
//! 1. Built-in defaults
//! 2. A configuration file (YAML, TOML or JSON, chosen by extension)
//! 3. Environment variables prefixed with `GZKIT`, nested with `__`
//!    (for example `GZKIT__CODEC__BUFFER_SIZE=65536`)
//!
//! # Examples
//!
//! ```rust
//! use gzkit_config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new()
//!     .build()
//!     .expect("Failed to load configuration");
//!
//! assert_eq!(config.codec.buffer_size.get(), 16 * 1024);
//! assert_eq!(config.logging.level, "warn");
//! ```

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

use gzkit_types::BufferSize;
use serde::{Deserialize, Serialize};

pub mod builder;
pub mod error;
pub mod loader;

pub use builder::ConfigBuilder;
pub use error::{ConfigError, ConfigResult};
pub use loader::{ConfigFormat, ConfigLoader};

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "GZKIT";

/// Main configuration structure for gzkit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Codec configuration
    #[serde(default)]
    pub codec: CodecConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Codec configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Block size used when moving bytes through the codec
    #[serde(default)]
    pub buffer_size: BufferSize,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Emit log lines as JSON
    #[serde(default)]
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json_format: false,
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.codec.buffer_size, BufferSize::default());
        assert_eq!(config.logging.level, "warn");
        assert!(!config.logging.json_format);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config: Config = serde_yaml::from_str("logging:\n  json_format: true\n").unwrap();
        assert!(config.logging.json_format);
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.codec, CodecConfig::default());
    }
}
