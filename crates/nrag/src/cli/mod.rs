//! CLI support for the `nrag` binary.

pub mod args;
pub mod commands;
pub mod context;
pub mod logging;
pub mod output;

pub use context::CommandContext;

/// Name the package is published and reported under.
pub const PACKAGE_NAME: &str = "network-rag";

/// One-line summary of what Network RAG is for.
pub const TAGLINE: &str = "Precise retrieval with broad context.";
