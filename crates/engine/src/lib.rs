#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `engine` drives a single `ddconv` copy: it opens the source, discards the
//! configured prefix, caps the bytes exposed downstream, routes them through
//! the [`filters`] chain, and writes fixed-size blocks to the sink.
//!
//! # Design
//!
//! - [`CopyConfig`] is the validated, immutable description of one run,
//!   produced by [`CopyConfigBuilder::build`].
//! - [`BoundedWindow`] is the skip/limit [`std::io::Read`] adapter that feeds
//!   the first filter stage.
//! - [`open_reader`], [`open_writer`] and [`copy_blocks`] are the three
//!   phases of a copy. They are exposed separately so the command line can
//!   report which phase failed; [`run_copy`] chains them.
//!
//! # Invariants
//!
//! - The skip happens while the reader is constructed, so a short source is
//!   reported before the sink exists.
//! - A sink path is opened with create-new semantics and is never
//!   overwritten.
//! - The copy loop issues reads of exactly the configured block size and
//!   forwards every non-empty result to the sink unchanged.
//!
//! # Errors
//!
//! Every fallible operation returns [`EngineError`]. Reader and sink errors
//! keep their [`std::io::Error`] as the error source.
//!
//! # Examples
//!
//! ```
//! use engine::{CopyConfig, run_copy};
//!
//! let config = CopyConfig::builder()
//!     .skip(2)
//!     .limit(3)
//!     .transform_names(["upper_case"])
//!     .build()
//!     .unwrap();
//!
//! let mut output = Vec::new();
//! run_copy(&config, &b"abcdef"[..], &mut output).unwrap();
//! assert_eq!(output, b"CDE");
//! ```
//!
//! # See also
//!
//! - [`filters::build_chain`] for the transform stages between window and
//!   sink.

mod config;
mod copy;
mod endpoint;
mod error;
mod pipeline;
mod trace;
mod window;

pub use config::{CopyConfig, CopyConfigBuilder, DEFAULT_BLOCK_SIZE};
pub use copy::{CopySummary, copy_blocks};
pub use endpoint::{open_sink, open_source};
pub use error::{EngineError, EngineResult};
pub use pipeline::{open_reader, open_writer, run_copy};
pub use window::BoundedWindow;
