use std::fmt;
use std::io::{self, Read};
use std::mem;

use crate::pending::PendingOutput;
use crate::trace::trace_invalid_sequence;
use crate::utf8::{Decoded, decode_next};

/// Per-character behaviour plugged into a [`TextFilter`].
///
/// The filter owns all buffering; implementors only see complete characters,
/// invalid byte runs, and the final undecodable tail, and append their output
/// to `out`.
pub trait CharTransform {
    /// Short name used in diagnostics.
    const NAME: &'static str;

    /// Handles one complete character whose encoded form is `raw`.
    fn push_char(&mut self, ch: char, raw: &[u8], out: &mut Vec<u8>);

    /// Handles bytes that can never decode as UTF-8.
    fn push_invalid(&mut self, raw: &[u8], out: &mut Vec<u8>);

    /// Called exactly once when upstream reports end-of-stream. `tail` holds
    /// the bytes of an unfinished character, possibly empty.
    fn finish(&mut self, tail: &[u8], out: &mut Vec<u8>);
}

/// Stateful UTF-8 stream filter.
///
/// The filter reads raw chunks from `upstream` into a carry buffer, decodes
/// every complete character into a pending-output buffer through its
/// [`CharTransform`], and serves reads from pending output. A character split
/// across two upstream reads stays in the carry until its remaining bytes
/// arrive.
///
/// After each fill cycle the carry holds only an incomplete trailing
/// sequence (at most three bytes), and bytes in pending output are final.
pub struct TextFilter<R, T> {
    upstream: R,
    transform: T,
    carry: Vec<u8>,
    pending: PendingOutput,
    scratch: Vec<u8>,
    finished: bool,
}

impl<R, T> TextFilter<R, T> {
    /// Wraps `upstream` with the given per-character transform.
    pub fn with_transform(upstream: R, transform: T) -> Self {
        Self {
            upstream,
            transform,
            carry: Vec::new(),
            pending: PendingOutput::default(),
            scratch: Vec::new(),
            finished: false,
        }
    }

    /// Returns a reference to the upstream reader.
    pub fn get_ref(&self) -> &R {
        &self.upstream
    }

    /// Returns the transform state.
    pub fn transform(&self) -> &T {
        &self.transform
    }

    /// Number of raw bytes held back because they end inside a character.
    pub fn carried_len(&self) -> usize {
        self.carry.len()
    }

    /// Number of transformed bytes ready for delivery.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Consumes the filter and returns the upstream reader, discarding any
    /// buffered bytes.
    pub fn into_inner(self) -> R {
        self.upstream
    }
}

impl<R: Read, T: CharTransform> TextFilter<R, T> {
    /// Performs one upstream read sized to `request` and decodes what it can.
    fn fill(&mut self, request: usize) -> io::Result<()> {
        self.scratch.resize(request, 0);
        let read = self.upstream.read(&mut self.scratch)?;

        if read == 0 {
            self.finished = true;
            let tail = mem::take(&mut self.carry);
            self.transform.finish(&tail, self.pending.sink());
            return Ok(());
        }

        self.carry.extend_from_slice(&self.scratch[..read]);
        self.decode_carry();
        Ok(())
    }

    fn decode_carry(&mut self) {
        let out = self.pending.sink();
        let mut cursor = 0;

        while cursor < self.carry.len() {
            let rest = &self.carry[cursor..];
            match decode_next(rest) {
                Decoded::Char { ch, len } => {
                    self.transform.push_char(ch, &rest[..len], out);
                    cursor += len;
                }
                Decoded::Invalid { len } => {
                    trace_invalid_sequence(T::NAME, len);
                    self.transform.push_invalid(&rest[..len], out);
                    cursor += len;
                }
                Decoded::Incomplete => break,
            }
        }

        self.carry.drain(..cursor);
    }
}

impl<R: Read, T: CharTransform> Read for TextFilter<R, T> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }

        // Every pass either consumes at least one upstream byte or observes
        // end-of-stream, so the loop terminates with the input.
        loop {
            if !self.pending.is_empty() {
                return Ok(self.pending.deliver(buf));
            }
            if self.finished {
                return Ok(0);
            }
            self.fill(buf.len())?;
        }
    }
}

impl<R, T: fmt::Debug> fmt::Debug for TextFilter<R, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextFilter")
            .field("transform", &self.transform)
            .field("carried", &self.carry.len())
            .field("pending", &self.pending.len())
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}
