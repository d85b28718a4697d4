//! Installation of the `tracing` subscriber used by the command line.
//!
//! Events are formatted by a `tracing-subscriber` fmt layer and filtered by an
//! [`EnvFilter`]. The filter comes from the `DDCONV_LOG` environment variable
//! when it is set, otherwise from the [`VerbosityConfig`] level.
//!
//! # Usage
//!
//! ```rust,ignore
//! use logging::{VerbosityConfig, init_tracing};
//!
//! init_tracing(VerbosityConfig::from_verbose_level(1))?;
//! tracing::info!(target: "ddconv::copy", bytes = 42, "copy_complete");
//! ```

use std::io;

use thiserror::Error;
use tracing::Subscriber;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::EnvFilter;

use super::config::VerbosityConfig;

/// Environment variable holding `EnvFilter` directives that override `-v`.
pub const LOG_ENV_VAR: &str = "DDCONV_LOG";

/// Errors raised while installing the subscriber.
#[derive(Debug, Error)]
pub enum TracingInitError {
    /// `DDCONV_LOG` could not be parsed.
    #[error("invalid DDCONV_LOG directive '{value}': {source}")]
    InvalidDirective {
        /// Raw variable contents.
        value: String,
        /// Parser error.
        #[source]
        source: ParseError,
    },
    /// Another global subscriber was installed first.
    #[error("a global tracing subscriber is already installed")]
    AlreadyInstalled(#[source] TryInitError),
}

/// Builds the event filter.
///
/// Non-blank `directives` take precedence over the configured level.
pub fn build_filter(
    config: VerbosityConfig,
    directives: Option<&str>,
) -> Result<EnvFilter, TracingInitError> {
    match directives.map(str::trim).filter(|value| !value.is_empty()) {
        Some(value) => {
            EnvFilter::try_new(value).map_err(|source| TracingInitError::InvalidDirective {
                value: value.to_owned(),
                source,
            })
        }
        None => Ok(EnvFilter::new(config.level().as_str())),
    }
}

/// Builds a subscriber writing formatted events to `writer`.
pub fn subscriber<W>(filter: EnvFilter, writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::registry().with(filter).with(
        fmt::layer()
            .with_writer(writer)
            .with_target(true)
            .with_ansi(false)
            .without_time(),
    )
}

/// Installs the global subscriber, writing to standard error.
///
/// `DDCONV_LOG` is read from the environment; see [`build_filter`].
pub fn init_tracing(config: VerbosityConfig) -> Result<(), TracingInitError> {
    let directives = std::env::var(LOG_ENV_VAR).ok();
    init_tracing_with_filter(build_filter(config, directives.as_deref())?)
}

/// Installs the global subscriber with an explicit filter, writing to
/// standard error.
pub fn init_tracing_with_filter(filter: EnvFilter) -> Result<(), TracingInitError> {
    subscriber(filter, io::stderr)
        .try_init()
        .map_err(TracingInitError::AlreadyInstalled)
}
