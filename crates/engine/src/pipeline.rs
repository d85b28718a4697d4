//! Assembling the read and write sides of a configured copy.

use std::io::{Read, Write};

use filters::build_chain;

use crate::config::CopyConfig;
use crate::copy::{CopySummary, copy_blocks};
use crate::endpoint::{open_sink, open_source};
use crate::error::EngineResult;
use crate::window::BoundedWindow;

/// Opens the source, applies the skip/limit window, and wraps it in the
/// configured filter chain.
///
/// `stdin` is used when the configuration names no source path.
///
/// # Errors
///
/// Returns [`EngineError::SourceUnavailable`](crate::EngineError::SourceUnavailable)
/// when the source cannot be opened and the errors of [`BoundedWindow::new`]
/// when the skip fails.
pub fn open_reader<'a, R>(config: &CopyConfig, stdin: R) -> EngineResult<Box<dyn Read + 'a>>
where
    R: Read + 'a,
{
    let source = open_source(config.source(), stdin)?;
    let window = BoundedWindow::new(source, config.skip(), config.limit())?;
    Ok(build_chain(window, config.transforms()))
}

/// Opens the configured sink, or `stdout` when no sink path is set.
///
/// # Errors
///
/// See [`open_sink`].
pub fn open_writer<'a, W>(config: &CopyConfig, stdout: W) -> EngineResult<Box<dyn Write + 'a>>
where
    W: Write + 'a,
{
    open_sink(config.sink(), stdout)
}

/// Runs a whole copy: reader, writer, then the block loop.
///
/// Callers that need to tell the phases apart call [`open_reader`],
/// [`open_writer`] and [`copy_blocks`] themselves.
///
/// # Errors
///
/// Any error from the three phases, in that order.
pub fn run_copy<R, W>(config: &CopyConfig, stdin: R, stdout: W) -> EngineResult<CopySummary>
where
    R: Read,
    W: Write,
{
    let reader = open_reader(config, stdin)?;
    let writer = open_writer(config, stdout)?;
    copy_blocks(reader, writer, config.block_size())
}
