//! Mapping from `-v` counts to diagnostic levels.

use std::fmt;

/// Most verbose diagnostic level that is emitted.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum LogLevel {
    /// Warnings and errors only.
    #[default]
    Warn,
    /// Adds the copy summary.
    Info,
    /// Adds window and filter-chain construction events.
    Debug,
    /// Adds per-block and per-sequence events.
    Trace,
}

impl LogLevel {
    /// Directive understood by `tracing-subscriber`'s `EnvFilter`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verbosity selected on the command line.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct VerbosityConfig {
    verbose: u8,
    level: LogLevel,
}

impl VerbosityConfig {
    /// Creates a configuration from the number of `-v` flags.
    ///
    /// | count | level |
    /// |-------|-------|
    /// | 0     | warn  |
    /// | 1     | info  |
    /// | 2     | debug |
    /// | 3+    | trace |
    #[must_use]
    pub const fn from_verbose_level(verbose: u8) -> Self {
        let level = match verbose {
            0 => LogLevel::Warn,
            1 => LogLevel::Info,
            2 => LogLevel::Debug,
            _ => LogLevel::Trace,
        };
        Self { verbose, level }
    }

    /// Number of `-v` flags this configuration was built from.
    #[must_use]
    pub const fn verbose(&self) -> u8 {
        self.verbose
    }

    /// Most verbose level emitted.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Reports whether events at `level` are emitted.
    #[must_use]
    pub fn enables(&self, level: LogLevel) -> bool {
        level <= self.level
    }
}
