//! Log verbosity levels.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::ParseLogLevelError;

/// Log verbosity, ordered from quietest to noisiest.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize,
)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only.
    Error,
    /// Errors and warnings.
    #[default]
    Warn,
    /// Progress information.
    Info,
    /// Diagnostic detail.
    Debug,
    /// Everything.
    Trace,
}

impl LogLevel {
    /// All levels in increasing verbosity.
    pub const ALL: [Self; 5] = [
        Self::Error,
        Self::Warn,
        Self::Info,
        Self::Debug,
        Self::Trace,
    ];

    /// Returns the lowercase level name, as written in `.nrag.toml`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }

    /// Returns the level `steps` notches noisier, saturating at [`LogLevel::Trace`].
    pub fn raised(self, steps: u8) -> Self {
        let index = (self as usize)
            .saturating_add(usize::from(steps))
            .min(Self::ALL.len() - 1);
        Self::ALL[index]
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = ParseLogLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseLogLevelError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_warn() {
        assert_eq!(LogLevel::default(), LogLevel::Warn);
    }

    #[test]
    fn levels_are_ordered_by_verbosity() {
        assert!(LogLevel::Error < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Info);
        assert!(LogLevel::Debug < LogLevel::Trace);
    }

    #[test]
    fn raised_steps_up() {
        assert_eq!(LogLevel::Warn.raised(0), LogLevel::Warn);
        assert_eq!(LogLevel::Warn.raised(1), LogLevel::Info);
        assert_eq!(LogLevel::Warn.raised(2), LogLevel::Debug);
    }

    #[test]
    fn raised_saturates_at_trace() {
        assert_eq!(LogLevel::Info.raised(10), LogLevel::Trace);
        assert_eq!(LogLevel::Trace.raised(u8::MAX), LogLevel::Trace);
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("debug".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert_eq!("WARN".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert_eq!(" info ".parse::<LogLevel>().unwrap(), LogLevel::Info);
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "verbose".parse::<LogLevel>().unwrap_err();
        assert_eq!(err, ParseLogLevelError("verbose".into()));
        assert!(err.to_string().contains("verbose"));
    }

    #[test]
    fn display_matches_as_str() {
        for level in LogLevel::ALL {
            assert_eq!(level.to_string(), level.as_str());
        }
    }
}
