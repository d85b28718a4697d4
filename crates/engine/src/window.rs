//! Skip/limit window over a raw byte source.

use std::io::{self, Read, Take};

use crate::error::{EngineError, EngineResult};
use crate::trace::{trace_skip_complete, trace_window_exhausted};

/// Scratch size used while discarding the skipped prefix.
const SKIP_CHUNK: usize = 8 * 1024;

/// Reader exposing at most `limit` bytes of a source after discarding its
/// first `skip` bytes.
///
/// The skip happens eagerly in [`BoundedWindow::new`] so that a short source
/// is reported before any sink is opened. Afterwards the window never reads
/// past the limit, even if the source holds more data.
///
/// # Examples
///
/// ```
/// use engine::BoundedWindow;
/// use std::io::Read;
///
/// let mut window = BoundedWindow::new(&b"abcdef"[..], 2, 3).unwrap();
/// let mut output = String::new();
/// window.read_to_string(&mut output).unwrap();
/// assert_eq!(output, "cde");
/// ```
#[derive(Debug)]
pub struct BoundedWindow<R> {
    inner: Take<R>,
    skipped: u64,
    limit: u64,
    exhausted: bool,
}

impl<R: Read> BoundedWindow<R> {
    /// Discards `skip` bytes from `source` and caps later reads at `limit`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::IncompleteSkip`] when `source` ends after fewer
    /// than `skip` bytes, and [`EngineError::Read`] when reading it fails.
    /// Skipping exactly the whole source succeeds with an empty window.
    pub fn new(mut source: R, skip: u64, limit: u64) -> EngineResult<Self> {
        let skipped = discard_prefix(&mut source, skip)?;
        trace_skip_complete(skipped, limit);
        Ok(Self {
            inner: source.take(limit),
            skipped,
            limit,
            exhausted: false,
        })
    }
}

impl<R> BoundedWindow<R> {
    /// Bytes the window may still deliver.
    #[must_use]
    pub fn remaining(&self) -> u64 {
        self.inner.limit()
    }

    /// Bytes discarded before the window started.
    #[must_use]
    pub const fn skipped(&self) -> u64 {
        self.skipped
    }

    /// Bytes delivered so far.
    #[must_use]
    pub fn delivered(&self) -> u64 {
        self.limit - self.inner.limit()
    }

    /// Returns the source, positioned after the last delivered byte.
    pub fn into_inner(self) -> R {
        self.inner.into_inner()
    }
}

impl<R: Read> Read for BoundedWindow<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        let count = self.inner.read(buf)?;
        if count == 0 && !self.exhausted {
            self.exhausted = true;
            trace_window_exhausted(self.delivered(), self.inner.limit() == 0);
        }
        Ok(count)
    }
}

fn discard_prefix<R: Read>(source: &mut R, skip: u64) -> EngineResult<u64> {
    let mut scratch = [0u8; SKIP_CHUNK];
    let mut skipped = 0u64;

    while skipped < skip {
        let want = usize::try_from(skip - skipped).map_or(SKIP_CHUNK, |left| left.min(SKIP_CHUNK));
        match source.read(&mut scratch[..want]) {
            Ok(0) => {
                return Err(EngineError::IncompleteSkip {
                    requested: skip,
                    skipped,
                });
            }
            Ok(count) => skipped += count as u64,
            Err(error) if error.kind() == io::ErrorKind::Interrupted => {}
            Err(error) => return Err(EngineError::Read(error)),
        }
    }

    Ok(skipped)
}
