//! Starter configuration files written by `nrag init`.
//!
//! The shipped templates are valid configs; what `init` writes has every setting disabled so a
//! fresh file changes nothing until the user opts in.

/// Project template, written to `./.nrag.toml`.
const LOCAL_TEMPLATE: &str = include_str!("../templates/config.toml");

/// Global template, written to `~/.nrag.toml`.
const GLOBAL_TEMPLATE: &str = include_str!("../templates/config-global.toml");

/// Which configuration file a template is written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateScope {
    /// A project `.nrag.toml`.
    Local,
    /// The user's `~/.nrag.toml`.
    Global,
}

impl TemplateScope {
    /// Human-readable scope name.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Global => "global",
        }
    }

    /// The enabled template for this scope.
    const fn source(self) -> &'static str {
        match self {
            Self::Local => LOCAL_TEMPLATE,
            Self::Global => GLOBAL_TEMPLATE,
        }
    }
}

/// Returns the starter config for `scope`, with every setting disabled.
pub fn template(scope: TemplateScope) -> String {
    let source = scope.source();
    let mut out = format!(
        "# Generated by `nrag init` ({} configuration).\n\
         # Uncomment a setting to enable it.\n\n",
        scope.label()
    );
    out.reserve(source.len() + source.lines().count() * 2);
    for line in source.lines() {
        out.push_str(&disable_line(line));
        out.push('\n');
    }
    out
}

/// Comments out a TOML line unless it is blank or already a comment.
fn disable_line(line: &str) -> String {
    if line.trim().is_empty() || line.trim_start().starts_with('#') {
        line.to_string()
    } else {
        format!("# {line}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LogLevel, parse::parse_config};

    #[test]
    fn enabled_templates_are_valid_configs() {
        let local = parse_config(LOCAL_TEMPLATE).unwrap();
        assert_eq!(local.root, Some(true));
        assert_eq!(local.log.unwrap().level, Some(LogLevel::Warn));

        let global = parse_config(GLOBAL_TEMPLATE).unwrap();
        // root = true would be meaningless in the global file
        assert!(global.root.is_none());
        assert_eq!(global.output.unwrap().color, Some(true));
    }

    #[test]
    fn written_templates_set_nothing() {
        for scope in [TemplateScope::Local, TemplateScope::Global] {
            let config = parse_config(&template(scope)).unwrap();
            assert!(config.root.is_none());
            assert!(config.defined_keys().is_empty());
        }
    }

    #[test]
    fn header_names_scope() {
        assert!(template(TemplateScope::Local).starts_with("# Generated by `nrag init` (local"));
        assert!(template(TemplateScope::Global).starts_with("# Generated by `nrag init` (global"));
    }

    #[test]
    fn local_template_offers_root() {
        assert!(template(TemplateScope::Local).contains("\n# root = true\n"));
        assert!(!template(TemplateScope::Global).contains("root = true"));
    }

    #[test]
    fn disable_line_keeps_comments_and_blanks() {
        assert_eq!(disable_line("# note"), "# note");
        assert_eq!(disable_line("  # indented"), "  # indented");
        assert_eq!(disable_line(""), "");
        assert_eq!(disable_line("[log]"), "# [log]");
        assert_eq!(disable_line("level = \"warn\""), "# level = \"warn\"");
    }
}
