//! Command implementations and dispatch.

pub mod config;
pub mod info;
pub mod init;
pub mod status;
pub mod version;

use std::process::ExitCode;

use super::{args::Commands, context::CommandContext};

/// Dispatches to the selected subcommand.
pub fn run(command: &Commands, ctx: &CommandContext) -> ExitCode {
    match command {
        Commands::Version(cmd) => version::run(cmd),
        Commands::Info(cmd) => info::run(ctx, cmd),
        Commands::Init(cmd) => init::run(ctx, cmd),
        Commands::Config => config::run(ctx),
        Commands::Status => status::run(ctx),
    }
}
