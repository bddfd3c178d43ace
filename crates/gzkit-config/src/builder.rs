//! Configuration builder for flexible configuration loading

use crate::{Config, ConfigError, ConfigFormat, ConfigResult};
use config::{ConfigBuilder as ConfigBuilderInner, Environment, File, FileFormat};
use gzkit_types::BufferSize;
use std::path::{Path, PathBuf};

/// Log levels accepted by `logging.level`
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Separator between nested keys in environment variable names
pub const ENV_SEPARATOR: &str = "__";

/// Configuration builder for loading configuration from multiple sources
///
/// Built-in defaults are always the lowest layer; sources added later override
/// earlier ones.
#[derive(Debug)]
pub struct ConfigBuilder {
    inner: ConfigBuilderInner<config::builder::DefaultState>,
    sources: Vec<ConfigSource>,
}

#[derive(Debug, Clone)]
enum ConfigSource {
    File { path: PathBuf, format: FileFormat },
    Environment { prefix: String },
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self {
            inner: config::Config::builder(),
            sources: Vec::new(),
        }
    }

    /// Add a configuration file source
    ///
    /// A file that does not exist is skipped.
    pub fn add_source_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let format = Self::detect_format(&path);
        self.sources.push(ConfigSource::File { path, format });
        self
    }

    /// Add environment variable source with prefix
    pub fn add_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.sources.push(ConfigSource::Environment {
            prefix: prefix.into(),
        });
        self
    }

    /// Build the configuration
    pub fn build(mut self) -> ConfigResult<Config> {
        // Defaults are always the base layer
        let defaults = config::Config::try_from(&Config::default())?;
        self.inner = self.inner.add_source(defaults);

        for source in &self.sources {
            match source {
                ConfigSource::File { path, format } => {
                    if path.exists() {
                        self.inner = self
                            .inner
                            .add_source(File::from(path.clone()).format(*format));
                    }
                }
                ConfigSource::Environment { prefix } => {
                    self.inner = self.inner.add_source(
                        Environment::with_prefix(prefix)
                            .separator(ENV_SEPARATOR)
                            .try_parsing(true),
                    );
                }
            }
        }

        let config = self.inner.build()?;
        let result: Config = config.try_deserialize()?;

        Self::validate(&result)?;

        Ok(result)
    }

    /// Detect file format from extension
    fn detect_format(path: &Path) -> FileFormat {
        match ConfigFormat::from_path(path) {
            ConfigFormat::Yaml => FileFormat::Yaml,
            ConfigFormat::Toml => FileFormat::Toml,
            ConfigFormat::Json => FileFormat::Json,
        }
    }

    /// Validate the configuration
    fn validate(config: &Config) -> ConfigResult<()> {
        BufferSize::new(config.codec.buffer_size.get())
            .map_err(|error| ConfigError::validation(error.to_string()))?;

        if !LOG_LEVELS.contains(&config.logging.level.as_str()) {
            return Err(ConfigError::validation(format!(
                "Log level must be one of: {}",
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
