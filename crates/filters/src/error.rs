use thiserror::Error;

/// Error produced when a transform list cannot be accepted.
///
/// Both variants are raised while the configuration is assembled, before any
/// byte has been read from the source.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ConfigError {
    /// A transform name outside the supported set was requested.
    #[error("unknown transform '{0}' (expected lower_case, upper_case, or trim_spaces)")]
    UnknownTransform(String),
    /// Both `lower_case` and `upper_case` were requested.
    #[error("lower_case and upper_case cannot be combined")]
    ConflictingCase,
}
