//! Configuration loader utilities

use crate::{Config, ConfigBuilder, ConfigError, ConfigResult, ENV_PREFIX};
use std::path::{Path, PathBuf};

/// Text formats a configuration can be written in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConfigFormat {
    /// YAML
    #[default]
    Yaml,
    /// TOML
    Toml,
    /// JSON
    Json,
}

impl ConfigFormat {
    /// Format matching a file extension, YAML when unrecognized
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::Toml,
            Some("json") => Self::Json,
            _ => Self::Yaml,
        }
    }
}

/// Configuration loader with common loading patterns
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from default locations
    pub fn load_default() -> ConfigResult<Config> {
        let mut builder = ConfigBuilder::new();

        if let Some(path) = Self::config_exists() {
            builder = builder.add_source_file(path);
        }

        builder.add_env_prefix(ENV_PREFIX).build()
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Config> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source: std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "Configuration file not found",
                ),
            });
        }

        ConfigBuilder::new()
            .add_source_file(path)
            .add_env_prefix(ENV_PREFIX)
            .build()
    }

    /// Render configuration as text in the given format
    pub fn render(config: &Config, format: ConfigFormat) -> ConfigResult<String> {
        let content = match format {
            ConfigFormat::Yaml => serde_yaml::to_string(config)?,
            ConfigFormat::Toml => toml::to_string_pretty(config)?,
            ConfigFormat::Json => serde_json::to_string_pretty(config)?,
        };
        Ok(content)
    }

    /// Save configuration to a file
    ///
    /// The format follows the file extension, YAML when it is not recognized.
    pub fn save_to_file<P: AsRef<Path>>(config: &Config, path: P) -> ConfigResult<()> {
        let path = path.as_ref();
        let content = Self::render(config, ConfigFormat::from_path(path))?;

        std::fs::write(path, content).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(())
    }

    /// Generate a default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> ConfigResult<()> {
        Self::save_to_file(&Config::default(), path)
    }

    /// Get default configuration file paths in order of preference
    fn get_default_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            PathBuf::from("gzkit.yaml"),
            PathBuf::from("gzkit.yml"),
            PathBuf::from("gzkit.toml"),
            PathBuf::from(".gzkit.yaml"),
            PathBuf::from(".gzkit.toml"),
        ];

        if let Some(config_dir) = dirs::config_dir() {
            let gzkit_dir = config_dir.join("gzkit");
            paths.push(gzkit_dir.join("config.yaml"));
            paths.push(gzkit_dir.join("config.toml"));
        }

        paths
    }

    /// First configuration file found in the default locations
    pub fn config_exists() -> Option<PathBuf> {
        Self::get_default_config_paths()
            .into_iter()
            .find(|path| path.exists())
    }
}

mod dirs {
    use std::path::PathBuf;

    pub fn config_dir() -> Option<PathBuf> {
        #[cfg(target_os = "windows")]
        {
            std::env::var("APPDATA").ok().map(PathBuf::from)
        }
        #[cfg(target_os = "macos")]
        {
            std::env::var("HOME").ok().map(|home| {
                PathBuf::from(home)
                    .join("Library")
                    .join("Application Support")
            })
        }
        #[cfg(target_os = "linux")]
        {
            std::env::var("XDG_CONFIG_HOME")
                .ok()
                .map(PathBuf::from)
                .or_else(|| {
                    std::env::var("HOME")
                        .ok()
                        .map(|home| PathBuf::from(home).join(".config"))
                })
        }
        #[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
        {
            None
        }
    }
}
