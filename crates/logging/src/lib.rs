#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` turns the number of `-v` flags given to `ddconv` into a
//! diagnostic level and, with the `tracing` feature, installs the global
//! `tracing` subscriber that prints events to standard error.
//!
//! # Design
//!
//! - [`VerbosityConfig`] is always available so argument parsing can record
//!   verbosity without pulling in a subscriber.
//! - The `tracing` feature adds `init_tracing`, which combines a fmt layer
//!   with an `EnvFilter`. The `DDCONV_LOG` variable, when set, replaces the
//!   level chosen by `-v`.
//!
//! # Invariants
//!
//! - Level 0 only shows warnings, so a quiet run writes nothing to standard
//!   error on success.
//! - Installing a subscriber twice reports an error instead of panicking.
//!
//! # Examples
//!
//! ```
//! use logging::{LogLevel, VerbosityConfig};
//!
//! let config = VerbosityConfig::from_verbose_level(2);
//! assert_eq!(config.level(), LogLevel::Debug);
//! assert!(config.enables(LogLevel::Info));
//! ```

mod config;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use config::{LogLevel, VerbosityConfig};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{
    LOG_ENV_VAR, TracingInitError, build_filter, init_tracing, init_tracing_with_filter,
    subscriber,
};
