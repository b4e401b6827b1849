//! Diagnostic logging for the `nrag` binary.
//!
//! Logs go to stderr through `tracing-subscriber`. `RUST_LOG` wins when set; otherwise the
//! level starts at the default, is swapped for `log.level` from `.nrag.toml` once that has
//! been loaded, and is raised one step per `-v`. Colouring is settled the same way: the
//! `--no-color` flag applies from the start, `output.color` once configuration is known.

use std::{env, io};

use network_rag_config::{Config, LogLevel};
use tracing::debug;
use tracing_subscriber::{
    EnvFilter, Registry, fmt,
    fmt::format::{DefaultFields, Format},
    layer::{Layered, SubscriberExt},
    reload,
    util::SubscriberInitExt,
};

/// The registry with the reloadable level filter applied.
type FilteredRegistry = Layered<reload::Layer<EnvFilter, Registry>, Registry>;

/// Formatting layer writing events to stderr.
type StderrLayer = fmt::Layer<FilteredRegistry, DefaultFields, Format, fn() -> io::Stderr>;

/// Handles for adjusting the installed subscriber after configuration is known.
pub struct LogHandle {
    /// Reload handle for the active filter.
    filter: reload::Handle<EnvFilter, Registry>,
    /// Reload handle for the stderr formatter.
    output: reload::Handle<StderrLayer, FilteredRegistry>,
    /// Whether the filter came from `RUST_LOG`.
    from_env: bool,
    /// Number of `-v` flags given.
    verbose: u8,
}

/// Installs the global subscriber.
///
/// Until [`LogHandle::apply_config`] runs, events are filtered at the default level raised by
/// `verbose`, so configuration discovery can be traced with `-vv`.
pub fn init(verbose: u8, ansi: bool) -> LogHandle {
    let (filter, from_env) = match EnvFilter::try_from_default_env() {
        Ok(filter) => (filter, true),
        Err(e) => {
            if env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
                eprintln!("warning: ignoring invalid {}: {e}", EnvFilter::DEFAULT_ENV);
            }
            (level_filter(LogLevel::default().raised(verbose)), false)
        }
    };
    let (filter_layer, filter) = reload::Layer::new(filter);
    let (output_layer, output) = reload::Layer::new(stderr_layer(ansi));

    if let Err(e) = tracing_subscriber::registry()
        .with(filter_layer)
        .with(output_layer)
        .try_init()
    {
        eprintln!("warning: could not install logger: {e}");
    }

    LogHandle {
        filter,
        output,
        from_env,
        verbose,
    }
}

impl LogHandle {
    /// Applies `output.color` and, unless `RUST_LOG` is in charge, the configured level.
    ///
    /// `ansi` is the final colour decision for this invocation (`--no-color` and
    /// `output.color` combined).
    pub fn apply_config(&self, config: &Config, ansi: bool) {
        if let Err(e) = self.output.modify(|layer| *layer = stderr_layer(ansi)) {
            eprintln!("warning: could not change log colors: {e}");
        }
        if self.from_env {
            return;
        }
        let level = effective_level(config, self.verbose);
        if let Err(e) = self.filter.reload(level_filter(level)) {
            eprintln!("warning: could not change log level: {e}");
            return;
        }
        debug!(%level, "log level set from configuration");
    }
}

/// Builds the stderr formatter, with or without ANSI escapes.
fn stderr_layer(ansi: bool) -> StderrLayer {
    fmt::layer()
        .with_writer(io::stderr as fn() -> io::Stderr)
        .with_ansi(ansi)
        .with_target(false)
}

/// The configured level raised by the `-v` count.
pub fn effective_level(config: &Config, verbose: u8) -> LogLevel {
    config.log.level.raised(verbose)
}

/// Builds a filter passing events at `level` and above from every target.
fn level_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::new(level.as_str())
}
