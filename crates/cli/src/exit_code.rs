//! Process exit codes, one per phase of a run.
//!
//! # Examples
//!
//! ```
//! use cli::ExitCode;
//!
//! let code = ExitCode::Reader;
//! assert_eq!(code.as_i32(), 2);
//! assert_eq!(code.description(), "can not create reader");
//! ```

use std::fmt;

/// Exit status reported by `ddconv`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ExitCode {
    /// The copy completed.
    Ok = 0,

    /// Flags could not be parsed or describe an invalid configuration.
    Arguments = 1,

    /// The source could not be opened or the offset could not be skipped.
    Reader = 2,

    /// The sink already exists or could not be created.
    Writer = 3,

    /// Reading through the filter chain or writing to the sink failed.
    Copy = 4,
}

impl ExitCode {
    /// Numeric process status.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    /// Phase description used as the prefix of diagnostics.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Ok => "success",
            Self::Arguments => "can not parse flags",
            Self::Reader => "can not create reader",
            Self::Writer => "can not create writer",
            Self::Copy => "error while copying",
        }
    }

    /// Maps a numeric status back to its variant.
    #[must_use]
    pub const fn from_i32(value: i32) -> Option<Self> {
        match value {
            0 => Some(Self::Ok),
            1 => Some(Self::Arguments),
            2 => Some(Self::Reader),
            3 => Some(Self::Writer),
            4 => Some(Self::Copy),
            _ => None,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code.as_i32()
    }
}
