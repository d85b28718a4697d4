#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `filters` provides the streaming text conversions applied by `ddconv`
//! between the bounded source window and the sink. Each filter is an
//! [`std::io::Read`] adapter that decodes its upstream as UTF-8, transforms
//! complete characters, and hands transformed bytes to the caller in whatever
//! amounts the caller asks for.
//!
//! # Design
//!
//! - [`TextFilter`] owns the buffering shared by every filter: a carry buffer
//!   for raw bytes that end inside a character, and a pending-output buffer
//!   for transformed bytes not yet delivered. Per-character behaviour is
//!   supplied through the [`CharTransform`] trait.
//! - [`CaseFold`] maps characters to upper or lower case; [`TrimSpaces`]
//!   drops leading and trailing whitespace and collapses internal runs to the
//!   run's first character.
//! - [`Transform`] and [`TransformList`] parse and validate the
//!   user-facing names (`lower_case`, `upper_case`, `trim_spaces`).
//!   [`build_chain`] turns a validated list into nested readers.
//!
//! # Invariants
//!
//! - After every fill cycle the carry buffer holds only an incomplete UTF-8
//!   tail, never a decodable prefix.
//! - Pending output only shrinks from the front; a read never reports more
//!   bytes than it wrote.
//! - Output is independent of the caller's read sizes and of how the
//!   upstream reader chunks its data.
//! - Upstream errors propagate unchanged; end-of-stream is reported only after
//!   pending output has been drained.
//!
//! # Errors
//!
//! [`TransformList`] construction reports [`ConfigError`] for unknown names
//! or for requesting both case directions. Filters themselves only surface
//! [`std::io::Error`] values produced by their upstream reader.
//!
//! # Examples
//!
//! ```
//! use filters::{TransformList, build_chain};
//! use std::io::Read;
//!
//! let transforms: TransformList = "trim_spaces,upper_case".parse().unwrap();
//! let mut chain = build_chain(&b"  hello   world  "[..], &transforms);
//!
//! let mut output = String::new();
//! chain.read_to_string(&mut output).unwrap();
//! assert_eq!(output, "HELLO WORLD");
//! ```
//!
//! # See also
//!
//! - `engine::BoundedWindow` for the skip/limit window the first stage reads
//!   from.

mod case;
mod chain;
mod error;
mod pending;
mod text;
mod trace;
mod transform;
mod trim;
mod utf8;

pub use case::{CaseDirection, CaseFold, CaseMapper};
pub use chain::{build_chain, build_chain_from_names};
pub use error::ConfigError;
pub use text::{CharTransform, TextFilter};
pub use transform::{Transform, TransformList};
pub use trim::{SpaceCollapser, TrimSpaces};
