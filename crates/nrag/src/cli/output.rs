//! Terminal styling and JSON serialization for CLI output.

use std::process::ExitCode;

use serde::Serialize;

/// ANSI color codes for terminal output.
pub mod colors {
    /// Bold text.
    pub const BOLD: &str = "\x1b[1m";
    /// Cyan text (for headers).
    pub const CYAN: &str = "\x1b[36m";
    /// Yellow text (for warnings).
    pub const YELLOW: &str = "\x1b[33m";
    /// Dim/gray text (for less important info).
    pub const DIM: &str = "\x1b[2m";
    /// Reset all formatting.
    pub const RESET: &str = "\x1b[0m";
}

/// Applies ANSI styling when enabled and passes text through untouched otherwise.
#[derive(Debug, Clone, Copy)]
pub struct Style {
    /// Whether escape codes are emitted.
    enabled: bool,
}

impl Style {
    /// Creates a style that emits escape codes only if `enabled`.
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Whether escape codes are emitted.
    pub const fn enabled(self) -> bool {
        self.enabled
    }

    /// Formats a header with bold cyan styling.
    pub fn header(self, text: &str) -> String {
        self.paint(&[colors::BOLD, colors::CYAN], text)
    }

    /// Formats text as a subheader (bold).
    pub fn subheader(self, text: &str) -> String {
        self.paint(&[colors::BOLD], text)
    }

    /// Formats text as dimmed/less important.
    pub fn dim(self, text: &str) -> String {
        self.paint(&[colors::DIM], text)
    }

    /// Formats text as a warning (yellow).
    pub fn warning(self, text: &str) -> String {
        self.paint(&[colors::YELLOW], text)
    }

    /// Wraps `text` in the given codes followed by a reset.
    fn paint(self, codes: &[&str], text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        format!("{}{text}{}", codes.concat(), colors::RESET)
    }
}

/// Pretty-prints `value` as JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}
