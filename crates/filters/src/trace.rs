//! Feature-gated tracing hooks for filter construction and end-of-stream
//! handling. All functions compile to no-ops without the `tracing` feature.

use crate::Transform;

/// Target name for tracing events emitted by this crate.
#[cfg(feature = "tracing")]
const FILTER_TARGET: &str = "ddconv::filter";

/// Traces a filter stage being appended to a chain.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_stage_added(index: usize, transform: Transform) {
    tracing::debug!(
        target: FILTER_TARGET,
        index = index,
        transform = %transform,
        "filter_stage_added"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_stage_added(_index: usize, _transform: Transform) {}

/// Traces the undecodable tail left in a carry buffer when upstream ends.
///
/// `kept` records whether the filter emitted the tail or discarded it.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_tail_at_eof(filter: &'static str, len: usize, kept: bool) {
    if len == 0 {
        return;
    }
    tracing::debug!(
        target: FILTER_TARGET,
        filter = filter,
        len = len,
        kept = kept,
        "incomplete_sequence_at_eof"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_tail_at_eof(_filter: &'static str, _len: usize, _kept: bool) {}

/// Traces an invalid byte sequence encountered mid-stream.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_invalid_sequence(filter: &'static str, len: usize) {
    tracing::trace!(
        target: FILTER_TARGET,
        filter = filter,
        len = len,
        "invalid_sequence_passed_through"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_invalid_sequence(_filter: &'static str, _len: usize) {}
