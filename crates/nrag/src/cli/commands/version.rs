//! Implementation of `nrag version`.

use std::process::ExitCode;

use network_rag::VERSION;
use semver::Version;
use serde::Serialize;

use crate::cli::{PACKAGE_NAME, args::VersionCommand, output::print_json};

/// JSON output for `nrag version --json`.
#[derive(Serialize)]
struct VersionOutput {
    /// Package name.
    name: &'static str,
    /// Full version string.
    version: &'static str,
    /// Major component.
    major: u64,
    /// Minor component.
    minor: u64,
    /// Patch component.
    patch: u64,
    /// Pre-release identifier, empty for releases.
    pre: String,
}

/// Prints the package version.
pub fn run(cmd: &VersionCommand) -> ExitCode {
    if !cmd.json {
        println!("{PACKAGE_NAME} {VERSION}");
        return ExitCode::SUCCESS;
    }

    match version_output(VERSION) {
        Ok(output) => print_json(&output),
        Err(e) => {
            eprintln!("error: invalid package version '{VERSION}': {e}");
            ExitCode::FAILURE
        }
    }
}

/// Splits a version string into its semantic-version components.
fn version_output(version: &'static str) -> Result<VersionOutput, semver::Error> {
    let parsed = Version::parse(version)?;
    Ok(VersionOutput {
        name: PACKAGE_NAME,
        version,
        major: parsed.major,
        minor: parsed.minor,
        patch: parsed.patch,
        pre: parsed.pre.to_string(),
    })
}
