//! nrag: the Network RAG command-line tool.
//!
//! Reports the package version and manages `.nrag.toml` configuration. Retrieval commands will
//! be added alongside the engine they drive.

#![warn(missing_docs)]

pub mod cli;
