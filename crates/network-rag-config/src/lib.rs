//! Configuration system for Network RAG.
//!
//! Network RAG uses TOML configuration files named `.nrag.toml`. Configuration is resolved by
//! walking up the directory tree from the current working directory, collecting any
//! `.nrag.toml` files found, then loading `~/.nrag.toml` as the global config with lowest
//! precedence.

#![warn(missing_docs)]

mod discovery;
mod error;
mod level;
mod merge;
mod parse;
mod templates;
#[cfg(test)]
mod test_support;
mod validate;

use std::path::{Path, PathBuf};

pub use discovery::{
    CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config,
    require_global_config_path,
};
pub use error::{ConfigError, ParseLogLevelError};
pub use level::LogLevel;
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{
    RawConfig, RawLogSettings, RawOutputSettings, parse_config_file, parse_config_str,
};
use serde::{Deserialize, Serialize};
pub use templates::{TemplateScope, template};
use tracing::debug;
pub use validate::ConfigWarning;
use validate::validate_config;

/// Top-level merged configuration.
///
/// This represents the fully resolved configuration after merging all discovered `.nrag.toml`
/// files according to precedence rules.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Logging settings.
    pub log: LogSettings,
    /// Terminal output settings.
    pub output: OutputSettings,
    /// Directory containing the most specific config file.
    pub config_root: Option<PathBuf>,
    /// The parsed files that produced this config, highest precedence first.
    pub layers: Vec<ParsedConfig>,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.nrag.toml` files.
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence first.
    ///
    /// Returns `Ok(Config::default())` if the list is empty.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        let parsed = files
            .iter()
            .map(|path| {
                debug!(path = %path.display(), "parsing config file");
                let config = parse_config_file(path)?;
                Ok(ParsedConfig {
                    path: path.clone(),
                    config,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        Ok(merge_configs(&parsed))
    }

    /// Validates the configuration and returns any warnings.
    ///
    /// This checks for:
    /// - `root = true` in the global config, where it does nothing
    /// - Settings overridden by a higher-precedence config file
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Serializes the effective settings to TOML format.
    ///
    /// The output has the same shape as a `.nrag.toml` file.
    pub fn settings_to_toml(&self) -> Result<String, ConfigError> {
        let serializable = SerializableSettings {
            log: &self.log,
            output: &self.output,
        };
        Ok(toml::to_string_pretty(&serializable)?)
    }
}

/// Logging settings.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct LogSettings {
    /// Log verbosity when neither `RUST_LOG` nor `-v` says otherwise.
    pub level: LogLevel,
}

/// Terminal output settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Whether to style output with ANSI colors.
    pub color: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Internal struct for TOML serialization of settings.
#[derive(Serialize)]
struct SerializableSettings<'a> {
    /// Logging settings.
    log: &'a LogSettings,
    /// Terminal output settings.
    output: &'a OutputSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.log.level, LogLevel::Warn);
        assert!(config.output.color);
        assert!(config.config_root.is_none());
        assert!(config.layers.is_empty());
    }

    #[test]
    fn test_load_from_no_files() {
        let config = Config::load_from_files(&[]).unwrap();
        assert!(config.layers.is_empty());
    }

    #[test]
    fn test_settings_to_toml() {
        let toml = Config::default().settings_to_toml().unwrap();

        assert!(toml.contains("[log]"));
        assert!(toml.contains("[output]"));
        assert!(toml.contains("level = \"warn\""));
        assert!(toml.contains("color = true"));

        let reparsed = parse_config_str(&toml, Path::new("effective.toml")).unwrap();
        assert_eq!(reparsed.log.unwrap().level, Some(LogLevel::Warn));
        assert_eq!(reparsed.output.unwrap().color, Some(true));
    }
}
