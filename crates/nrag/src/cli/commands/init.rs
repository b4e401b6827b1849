//! Implementation of `nrag init`.

use std::{fs, process::ExitCode};

use network_rag_config::{
    CONFIG_FILENAME, TemplateScope, global_config_path, require_global_config_path, template,
};
use tracing::info;

use crate::cli::{args::InitCommand, context::CommandContext};

/// Initializes a `.nrag.toml` configuration file.
pub fn run(ctx: &CommandContext, cmd: &InitCommand) -> ExitCode {
    let cwd = &ctx.cwd;

    let is_home_dir = global_config_path()
        .and_then(|p| p.parent().map(|h| h == cwd))
        .unwrap_or(false);

    let use_global = cmd.global || is_home_dir;

    let config_path = if use_global {
        match require_global_config_path() {
            Ok(path) => path,
            Err(e) => {
                eprintln!("error: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        cwd.join(CONFIG_FILENAME)
    };

    if config_path.exists() && !cmd.force {
        eprintln!(
            "error: configuration file already exists: {}",
            config_path.display()
        );
        eprintln!("use --force to overwrite");
        return ExitCode::FAILURE;
    }

    let scope = if use_global {
        TemplateScope::Global
    } else {
        TemplateScope::Local
    };
    let contents = template(scope);

    if let Err(e) = fs::write(&config_path, &contents) {
        eprintln!("error: failed to write {}: {e}", config_path.display());
        return ExitCode::FAILURE;
    }
    info!(path = %config_path.display(), scope = scope.label(), "wrote config template");

    println!("Created {}", config_path.display());
    println!();
    println!("{}", ctx.style.subheader("Configuration written:"));
    for line in contents.lines() {
        println!("   {}", ctx.style.dim(line));
    }

    ExitCode::SUCCESS
}
