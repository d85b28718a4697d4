//! Feature-gated tracing hooks for the window and copy loop.
//! All functions compile to no-ops without the `tracing` feature.

#[cfg(feature = "tracing")]
const WINDOW_TARGET: &str = "ddconv::window";

#[cfg(feature = "tracing")]
const COPY_TARGET: &str = "ddconv::copy";

/// Traces completion of the skip phase.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_skip_complete(skipped: u64, limit: u64) {
    tracing::debug!(
        target: WINDOW_TARGET,
        skipped = skipped,
        limit = limit,
        "window_skip_complete"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_skip_complete(_skipped: u64, _limit: u64) {}

/// Traces the window reporting end-of-stream.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_window_exhausted(delivered: u64, limit_reached: bool) {
    tracing::debug!(
        target: WINDOW_TARGET,
        delivered = delivered,
        limit_reached = limit_reached,
        "window_exhausted"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_window_exhausted(_delivered: u64, _limit_reached: bool) {}

/// Traces one block handed to the sink.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_block(index: u64, len: usize) {
    tracing::trace!(target: COPY_TARGET, index = index, len = len, "block_written");
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_block(_index: u64, _len: usize) {}

/// Traces the summary of a finished copy.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_copy_summary(bytes: u64, blocks: u64, block_size: usize) {
    tracing::info!(
        target: COPY_TARGET,
        bytes = bytes,
        blocks = blocks,
        block_size = block_size,
        "copy_complete"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_copy_summary(_bytes: u64, _blocks: u64, _block_size: usize) {}
