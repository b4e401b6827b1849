//! Clap argument definitions for the `nrag` CLI.

use clap::{Args, Parser, Subcommand};
use network_rag::VERSION;

/// Top-level CLI options.
#[derive(Parser, Debug)]
#[command(name = "nrag", version = VERSION)]
#[command(about = "Network RAG - precise retrieval with broad context")]
pub struct Cli {
    /// Options accepted by every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Flags shared by all subcommands.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Raise log verbosity one level per use (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable ANSI colors in output
    #[arg(long, global = true)]
    pub no_color: bool,
}

/// Arguments for `nrag version`.
#[derive(Args, Debug, Clone, Default)]
pub struct VersionCommand {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `nrag info`.
#[derive(Args, Debug, Clone, Default)]
pub struct InfoCommand {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `nrag init`.
#[derive(Args, Debug, Clone, Default)]
pub struct InitCommand {
    /// Create global ~/.nrag.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Supported `nrag` subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the package version
    Version(VersionCommand),

    /// Show package name, version and description
    Info(InfoCommand),

    /// Initialize nrag configuration in current directory
    Init(InitCommand),

    /// Show effective configuration settings
    Config,

    /// Show configuration files and validate them
    Status,
}

impl Commands {
    /// Whether the command reads `.nrag.toml` files before running.
    ///
    /// `init` must work even when an existing config is broken, and `version` never depends
    /// on configuration.
    pub const fn needs_config(&self) -> bool {
        !matches!(self, Self::Init(_) | Self::Version(_))
    }
}

/// Parses CLI arguments, exiting with usage on error.
pub fn parse_cli() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn version_flag_reports_package_version() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_version(), Some(VERSION));
    }

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["nrag", "status", "-vv", "--no-color"]).unwrap();
        assert_eq!(cli.global.verbose, 2);
        assert!(cli.global.no_color);
        assert!(matches!(cli.command, Commands::Status));
    }

    #[test]
    fn parses_init_flags() {
        let cli = Cli::try_parse_from(["nrag", "init", "--global", "--force"]).unwrap();
        let Commands::Init(init) = cli.command else {
            panic!("expected init command");
        };
        assert!(init.global);
        assert!(init.force);
    }

    #[test]
    fn parses_json_flags() {
        let cli = Cli::try_parse_from(["nrag", "version", "--json"]).unwrap();
        assert!(matches!(cli.command, Commands::Version(VersionCommand { json: true })));

        let cli = Cli::try_parse_from(["nrag", "info", "--json"]).unwrap();
        assert!(matches!(cli.command, Commands::Info(InfoCommand { json: true })));
    }

    #[test]
    fn requires_a_subcommand() {
        assert!(Cli::try_parse_from(["nrag"]).is_err());
    }

    #[test]
    fn only_init_and_version_skip_config() {
        assert!(!Commands::Init(InitCommand::default()).needs_config());
        assert!(!Commands::Version(VersionCommand::default()).needs_config());
        assert!(Commands::Info(InfoCommand::default()).needs_config());
        assert!(Commands::Config.needs_config());
        assert!(Commands::Status.needs_config());
    }
}
