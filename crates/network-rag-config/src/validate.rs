//! Configuration validation.
//!
//! Validates a loaded configuration and reports warnings for potential issues.

use std::{fmt, path::PathBuf};

use crate::{Config, discovery::is_global_config};

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// `root = true` in the global config, where it has no effect.
    RootInGlobalConfig {
        /// Path to the global config file.
        path: PathBuf,
    },
    /// A setting that is overridden by a higher-precedence config file.
    ShadowedSetting {
        /// Dotted setting name, e.g. `log.level`.
        key: &'static str,
        /// File whose value is ignored.
        path: PathBuf,
        /// File whose value wins.
        by: PathBuf,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RootInGlobalConfig { path } => {
                write!(f, "'root = true' has no effect in global config {}", path.display())
            }
            Self::ShadowedSetting { key, path, by } => {
                write!(
                    f,
                    "'{key}' in {} is overridden by {}",
                    path.display(),
                    by.display()
                )
            }
        }
    }
}

/// Validates the configuration and returns any warnings.
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    for layer in &config.layers {
        if layer.config.root == Some(true) && is_global_config(&layer.path) {
            warnings.push(ConfigWarning::RootInGlobalConfig {
                path: layer.path.clone(),
            });
        }
    }

    // Layers are in precedence order, so the first definition of a key wins.
    let mut winners: Vec<(&'static str, &PathBuf)> = Vec::new();
    for layer in &config.layers {
        for key in layer.config.defined_keys() {
            match winners.iter().find(|(k, _)| *k == key) {
                Some((_, by)) => warnings.push(ConfigWarning::ShadowedSetting {
                    key,
                    path: layer.path.clone(),
                    by: (*by).clone(),
                }),
                None => winners.push((key, &layer.path)),
            }
        }
    }

    warnings
}
