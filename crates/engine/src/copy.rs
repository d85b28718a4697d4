//! Block copy loop between the filter chain and the sink.

use std::io::{self, Read, Write};

use crate::error::{EngineError, EngineResult};
use crate::trace::{trace_block, trace_copy_summary};

/// Totals reported after a successful copy.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct CopySummary {
    bytes: u64,
    blocks: u64,
}

impl CopySummary {
    /// Bytes handed to the sink.
    #[must_use]
    pub const fn bytes(&self) -> u64 {
        self.bytes
    }

    /// Non-empty reads forwarded to the sink.
    #[must_use]
    pub const fn blocks(&self) -> u64 {
        self.blocks
    }
}

/// Pulls `reader` to end-of-stream in reads of at most `block_size` bytes and
/// writes every block to `writer`, then flushes it.
///
/// Partial writes already made are not rolled back on failure.
///
/// # Errors
///
/// - [`EngineError::InvalidBlockSize`] when `block_size` is zero.
/// - [`EngineError::Read`] when `reader` fails. `Interrupted` reads are retried.
/// - [`EngineError::Write`] when writing or flushing fails.
pub fn copy_blocks<R, W>(mut reader: R, mut writer: W, block_size: usize) -> EngineResult<CopySummary>
where
    R: Read,
    W: Write,
{
    if block_size == 0 {
        return Err(EngineError::InvalidBlockSize);
    }

    let mut block = vec![0u8; block_size];
    let mut summary = CopySummary::default();

    loop {
        let count = match reader.read(&mut block) {
            Ok(count) => count,
            Err(error) if error.kind() == io::ErrorKind::Interrupted => continue,
            Err(error) => return Err(EngineError::Read(error)),
        };
        if count == 0 {
            break;
        }
        writer
            .write_all(&block[..count])
            .map_err(EngineError::Write)?;
        trace_block(summary.blocks, count);
        summary.blocks += 1;
        summary.bytes += count as u64;
    }

    writer.flush().map_err(EngineError::Write)?;
    trace_copy_summary(summary.bytes, summary.blocks, block_size);
    Ok(summary)
}
