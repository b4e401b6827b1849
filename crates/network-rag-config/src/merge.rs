//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`, applying precedence rules.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{
    Config, LogSettings, OutputSettings,
    parse::{RawConfig, RawLogSettings, RawOutputSettings},
};

/// A parsed config file with its source path.
#[derive(Debug, Clone)]
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence first (closest to CWD),
/// lowest precedence last (global config). For every setting the first defined value wins.
pub fn merge_configs(configs: &[ParsedConfig]) -> Config {
    if configs.is_empty() {
        return Config::default();
    }

    let mut log = LogSettings::default();
    let mut output = OutputSettings::default();

    // Lowest precedence first so higher precedence overwrites
    for parsed in configs.iter().rev() {
        if let Some(ref raw) = parsed.config.log {
            apply_raw_log(&mut log, raw);
        }
        if let Some(ref raw) = parsed.config.output {
            apply_raw_output(&mut output, raw);
        }
    }

    let config_root = configs
        .first()
        .and_then(|c| c.path.parent())
        .map(Path::to_path_buf);

    debug!(
        layers = configs.len(),
        level = %log.level,
        color = output.color,
        "merged configuration"
    );

    Config {
        log,
        output,
        config_root,
        layers: configs.to_vec(),
    }
}

/// Applies raw logging settings to result, overwriting any present values.
fn apply_raw_log(result: &mut LogSettings, raw: &RawLogSettings) {
    if let Some(v) = raw.level {
        result.level = v;
    }
}

/// Applies raw output settings to result, overwriting any present values.
fn apply_raw_output(result: &mut OutputSettings, raw: &RawOutputSettings) {
    if let Some(v) = raw.color {
        result.color = v;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LogLevel, parse::parse_config_str};

    fn parsed(path: &str, toml: &str) -> ParsedConfig {
        ParsedConfig {
            path: PathBuf::from(path),
            config: parse_config_str(toml, Path::new(path)).unwrap(),
        }
    }

    #[test]
    fn test_merge_empty_configs() {
        let result = merge_configs(&[]);
        assert_eq!(result.log.level, LogLevel::Warn);
        assert!(result.output.color);
        assert!(result.config_root.is_none());
        assert!(result.layers.is_empty());
    }

    #[test]
    fn test_merge_single_config() {
        let result = merge_configs(&[parsed(
            "/project/.nrag.toml",
            "[log]\nlevel = \"info\"\n[output]\ncolor = false\n",
        )]);
        assert_eq!(result.log.level, LogLevel::Info);
        assert!(!result.output.color);
        assert_eq!(result.config_root, Some(PathBuf::from("/project")));
        assert_eq!(result.layers.len(), 1);
    }

    #[test]
    fn test_merge_scalar_override() {
        let high = parsed("/project/.nrag.toml", "[log]\nlevel = \"trace\"\n");
        let low = parsed(
            "/home/user/.nrag.toml",
            "[log]\nlevel = \"error\"\n[output]\ncolor = false\n",
        );

        let result = merge_configs(&[high, low]);

        assert_eq!(result.log.level, LogLevel::Trace);
        // Only the low-precedence file sets color, so it still applies.
        assert!(!result.output.color);
        assert_eq!(result.config_root, Some(PathBuf::from("/project")));
    }

    #[test]
    fn test_merge_empty_high_precedence_file_keeps_lower_values() {
        let high = parsed("/project/sub/.nrag.toml", "");
        let low = parsed("/project/.nrag.toml", "[log]\nlevel = \"debug\"\n");

        let result = merge_configs(&[high, low]);

        assert_eq!(result.log.level, LogLevel::Debug);
        assert_eq!(result.config_root, Some(PathBuf::from("/project/sub")));
    }

    #[test]
    fn test_merge_preserves_layer_order() {
        let result = merge_configs(&[parsed("/a/.nrag.toml", ""), parsed("/.nrag.toml", "")]);
        let paths: Vec<_> = result.layers.iter().map(|l| l.path.clone()).collect();
        assert_eq!(
            paths,
            vec![PathBuf::from("/a/.nrag.toml"), PathBuf::from("/.nrag.toml")]
        );
    }
}
