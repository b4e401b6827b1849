//! Implementation of `nrag info`.

use std::process::ExitCode;

use comfy_table::{Table, presets::UTF8_FULL_CONDENSED};
use network_rag::VERSION;
use serde::Serialize;

use crate::cli::{
    PACKAGE_NAME, TAGLINE, args::InfoCommand, context::CommandContext, output::print_json,
};

/// Package description, shared by every crate in the workspace.
const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Package facts reported by `nrag info`.
#[derive(Serialize)]
struct PackageInfo {
    /// Package name.
    name: &'static str,
    /// Package version.
    version: &'static str,
    /// What the package is.
    description: &'static str,
    /// One-line summary.
    tagline: &'static str,
    /// Config files in effect, highest precedence first.
    config_files: Vec<String>,
}

/// Shows package metadata and the config files in effect.
pub fn run(ctx: &CommandContext, cmd: &InfoCommand) -> ExitCode {
    let info = PackageInfo {
        name: PACKAGE_NAME,
        version: VERSION,
        description: DESCRIPTION,
        tagline: TAGLINE,
        config_files: ctx
            .config
            .layers
            .iter()
            .map(|l| l.path.display().to_string())
            .collect(),
    };

    if cmd.json {
        return print_json(&info);
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Field", "Value"]);
    table.add_row(vec!["Name", info.name]);
    table.add_row(vec!["Version", info.version]);
    table.add_row(vec!["Description", info.description]);
    table.add_row(vec!["Tagline", info.tagline]);
    let config_files = if info.config_files.is_empty() {
        String::from("(none)")
    } else {
        info.config_files.join("\n")
    };
    table.add_row(vec!["Config files", config_files.as_str()]);

    println!("{}", ctx.style.header(PACKAGE_NAME));
    println!("{table}");

    ExitCode::SUCCESS
}
