//! Command-line interface for Network RAG.

use std::process::ExitCode;

use nrag::cli::{CommandContext, args::parse_cli, commands, logging};

fn main() -> ExitCode {
    let cli = parse_cli();
    let logs = logging::init(cli.global.verbose, !cli.global.no_color);

    let loaded = if cli.command.needs_config() {
        CommandContext::load(cli.global.no_color)
    } else {
        CommandContext::load_cwd_only(cli.global.no_color)
    };
    let ctx = match loaded {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };

    logs.apply_config(&ctx.config, ctx.style.enabled());
    commands::run(&cli.command, &ctx)
}
