//! Implementation of `nrag status`.

use std::process::ExitCode;

use network_rag_config::{ConfigWarning, is_global_config};

use crate::cli::{context::CommandContext, output::Style};

/// Shows configuration files, effective settings and validation warnings.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let style = ctx.style;
    let config = &ctx.config;

    if config.layers.is_empty() {
        println!("{}", style.dim("No configuration files found."));
        println!();
        println!(
            "Run {} to create a configuration file.",
            style.subheader("nrag init")
        );
        return ExitCode::SUCCESS;
    }

    println!("{}", style.subheader("Config files:"));
    for layer in &config.layers {
        let scope = if is_global_config(&layer.path) {
            "global"
        } else {
            "local"
        };
        println!(
            "   {} {}",
            layer.path.display(),
            style.dim(&format!("({scope})"))
        );
    }
    println!();

    println!("{}", style.subheader("Settings:"));
    println!("   log.level    = {}", config.log.level);
    println!("   output.color = {}", config.output.color);
    println!();

    let warnings = config.validate();
    if warnings.is_empty() {
        println!("No issues found.");
        return ExitCode::SUCCESS;
    }

    println!(
        "{}",
        style.subheader(&format!("Warnings ({}):", warnings.len()))
    );
    for w in &warnings {
        println!("   {}", style.warning(&w.to_string()));
    }
    println!();

    print_hints(style, &warnings);

    ExitCode::FAILURE
}

/// Prints hints for resolving common warnings.
fn print_hints(style: Style, warnings: &[ConfigWarning]) {
    let mut hints: Vec<&str> = warnings
        .iter()
        .map(|w| match w {
            ConfigWarning::RootInGlobalConfig { .. } => {
                "Hint: remove 'root = true' from ~/.nrag.toml; it only applies to project configs"
            }
            ConfigWarning::ShadowedSetting { .. } => {
                "Hint: remove the overridden setting, or set 'root = true' in the closer config"
            }
        })
        .collect();
    hints.sort_unstable();
    hints.dedup();

    for hint in hints {
        println!("{}", style.dim(hint));
    }
}
