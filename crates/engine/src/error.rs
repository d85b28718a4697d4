//! Error type shared by every engine operation.

use std::io;
use std::path::PathBuf;

use filters::ConfigError;
use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors produced while configuring, opening, or running a copy.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The transform list was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A block size of zero was requested.
    #[error("block size must be greater than zero")]
    InvalidBlockSize,

    /// The source file could not be opened.
    #[error("failed to open source '{}': {source}", path.display())]
    SourceUnavailable {
        /// Path that was opened.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The source ended before the requested prefix was skipped.
    #[error("source ended after {skipped} of {requested} bytes while skipping")]
    IncompleteSkip {
        /// Bytes the caller asked to skip.
        requested: u64,
        /// Bytes actually discarded before end-of-stream.
        skipped: u64,
    },

    /// The sink path already exists.
    #[error("sink '{}' already exists", path.display())]
    SinkConflict {
        /// Existing path.
        path: PathBuf,
    },

    /// The sink file could not be created.
    #[error("failed to create sink '{}': {source}", path.display())]
    SinkUnavailable {
        /// Path that was created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Reading from the source or a filter failed.
    #[error("read failed: {0}")]
    Read(#[source] io::Error),

    /// Writing to the sink failed.
    #[error("write failed: {0}")]
    Write(#[source] io::Error),
}

impl EngineError {
    /// Returns the underlying I/O error, if this variant wraps one.
    #[must_use]
    pub fn io_error(&self) -> Option<&io::Error> {
        match self {
            Self::SourceUnavailable { source, .. } | Self::SinkUnavailable { source, .. } => {
                Some(source)
            }
            Self::Read(error) | Self::Write(error) => Some(error),
            Self::Config(_)
            | Self::InvalidBlockSize
            | Self::IncompleteSkip { .. }
            | Self::SinkConflict { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn incomplete_skip_message() {
        let error = EngineError::IncompleteSkip {
            requested: 10,
            skipped: 3,
        };
        assert_eq!(
            error.to_string(),
            "source ended after 3 of 10 bytes while skipping"
        );
    }

    #[test]
    fn config_error_is_transparent() {
        let error = EngineError::from(ConfigError::ConflictingCase);
        assert_eq!(
            error.to_string(),
            "lower_case and upper_case cannot be combined"
        );
    }

    #[test]
    fn sink_conflict_names_path() {
        let error = EngineError::SinkConflict {
            path: PathBuf::from("out.txt"),
        };
        assert_eq!(error.to_string(), "sink 'out.txt' already exists");
        assert!(error.io_error().is_none());
    }

    #[test]
    fn source_unavailable_exposes_io_source() {
        let error = EngineError::SourceUnavailable {
            path: PathBuf::from("missing"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert!(error.source().is_some());
        assert_eq!(
            error.io_error().map(io::Error::kind),
            Some(io::ErrorKind::NotFound)
        );
        assert!(error.to_string().starts_with("failed to open source 'missing'"));
    }

    #[test]
    fn write_error_keeps_kind() {
        let error = EngineError::Write(io::Error::from(io::ErrorKind::BrokenPipe));
        assert_eq!(
            error.io_error().map(io::Error::kind),
            Some(io::ErrorKind::BrokenPipe)
        );
    }
}
