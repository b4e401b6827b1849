//! Network RAG: network-based Retrieval-Augmented Generation.
//!
//! Precise retrieval with broad context.
//!
//! Network RAG is intended to combine vector search with explicit network relationships, so
//! that retrieval is precise while the assembled context stays broad. The graph is meant to be
//! defined in code, deployed over whatever database a project already runs, and queried through
//! NXQL, a composable query language for hybrid retrieval.
//!
//! None of that exists yet. This crate is the package root and exports only [`VERSION`]; the
//! graph model, NXQL, the retrieval engine and the storage adapters will land as their own
//! modules once they are designed.

#![warn(missing_docs)]

/// The Network RAG package version (for example, `0.0.1`).
///
/// Taken from the package manifest at compile time. Prefer this constant over repeating
/// `env!("CARGO_PKG_VERSION")` elsewhere.
///
/// ```
/// assert_eq!(network_rag::VERSION.split('.').count(), 3);
/// ```
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
