//! Validated copy configuration and its builder.
//!
//! [`CopyConfigBuilder`] collects the values supplied on the command line and
//! validates them once in [`CopyConfigBuilder::build`]. The resulting
//! [`CopyConfig`] is immutable.
//!
//! # Example
//!
//! ```rust
//! use engine::CopyConfig;
//!
//! let config = CopyConfig::builder()
//!     .source("input.txt")
//!     .skip(2)
//!     .limit(3)
//!     .transform_names(["upper_case"])
//!     .build()
//!     .expect("valid config");
//!
//! assert_eq!(config.block_size(), engine::DEFAULT_BLOCK_SIZE);
//! assert_eq!(config.transforms().to_string(), "upper_case");
//! ```

use std::path::{Path, PathBuf};

use filters::TransformList;

use crate::error::{EngineError, EngineResult};

/// Block size used when none is configured.
pub const DEFAULT_BLOCK_SIZE: usize = 1024;

/// Everything needed to run one copy.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CopyConfig {
    source: Option<PathBuf>,
    sink: Option<PathBuf>,
    skip: u64,
    limit: u64,
    block_size: usize,
    transforms: TransformList,
}

impl CopyConfig {
    /// Starts a builder with default values.
    #[must_use]
    pub fn builder() -> CopyConfigBuilder {
        CopyConfigBuilder::default()
    }

    /// Source path, or `None` for standard input.
    #[must_use]
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Sink path, or `None` for standard output.
    #[must_use]
    pub fn sink(&self) -> Option<&Path> {
        self.sink.as_deref()
    }

    /// Bytes discarded from the start of the source.
    #[must_use]
    pub const fn skip(&self) -> u64 {
        self.skip
    }

    /// Maximum bytes read from the source after the skip.
    #[must_use]
    pub const fn limit(&self) -> u64 {
        self.limit
    }

    /// Size of each read issued by the copy loop. Always positive.
    #[must_use]
    pub const fn block_size(&self) -> usize {
        self.block_size
    }

    /// Ordered transforms applied between window and sink.
    #[must_use]
    pub fn transforms(&self) -> &TransformList {
        &self.transforms
    }
}

/// Builder for [`CopyConfig`].
#[derive(Clone, Debug)]
pub struct CopyConfigBuilder {
    source: Option<PathBuf>,
    sink: Option<PathBuf>,
    skip: u64,
    limit: u64,
    block_size: usize,
    transforms: TransformList,
    names: Vec<String>,
}

impl Default for CopyConfigBuilder {
    fn default() -> Self {
        Self {
            source: None,
            sink: None,
            skip: 0,
            limit: u64::MAX,
            block_size: DEFAULT_BLOCK_SIZE,
            transforms: TransformList::new(),
            names: Vec::new(),
        }
    }
}

impl CopyConfigBuilder {
    /// Reads from `path` instead of standard input.
    #[must_use]
    pub fn source(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = Some(path.into());
        self
    }

    /// Writes to `path` instead of standard output.
    #[must_use]
    pub fn sink(mut self, path: impl Into<PathBuf>) -> Self {
        self.sink = Some(path.into());
        self
    }

    /// Sets the number of leading bytes to discard.
    #[must_use]
    pub const fn skip(mut self, skip: u64) -> Self {
        self.skip = skip;
        self
    }

    /// Sets the maximum number of bytes read after the skip.
    #[must_use]
    pub const fn limit(mut self, limit: u64) -> Self {
        self.limit = limit;
        self
    }

    /// Sets the copy block size. Zero is rejected by [`build`](Self::build).
    #[must_use]
    pub const fn block_size(mut self, block_size: usize) -> Self {
        self.block_size = block_size;
        self
    }

    /// Uses an already validated transform list.
    #[must_use]
    pub fn transforms(mut self, transforms: TransformList) -> Self {
        self.transforms = transforms;
        self
    }

    /// Appends transform names, validated by [`build`](Self::build).
    ///
    /// Names land after any list given to [`transforms`](Self::transforms).
    #[must_use]
    pub fn transform_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names.extend(names.into_iter().map(Into::into));
        self
    }

    /// Validates the collected values.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Config`] for unknown or conflicting transform
    /// names and [`EngineError::InvalidBlockSize`] for a zero block size.
    pub fn build(self) -> EngineResult<CopyConfig> {
        let transforms = if self.names.is_empty() {
            self.transforms
        } else {
            let named = TransformList::parse_names(&self.names)?;
            TransformList::from_transforms(self.transforms.iter().chain(named.iter()).copied())?
        };

        if self.block_size == 0 {
            return Err(EngineError::InvalidBlockSize);
        }

        Ok(CopyConfig {
            source: self.source,
            sink: self.sink,
            skip: self.skip,
            limit: self.limit,
            block_size: self.block_size,
            transforms,
        })
    }
}
