use std::io::{self, Read};

use crate::text::{CharTransform, TextFilter};
use crate::trace::trace_tail_at_eof;

/// [`CharTransform`] that trims and collapses whitespace.
///
/// Whitespace is classified with Unicode `White_Space`
/// ([`char::is_whitespace`]). A run of whitespace is held back as a single
/// representative (its first character) until the next non-whitespace
/// character proves it is internal; runs before the first and after the last
/// non-whitespace character are therefore never emitted.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SpaceCollapser {
    seen_text: bool,
    separator: Option<char>,
}

impl SpaceCollapser {
    /// Creates a collapser that has not seen any text yet.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            seen_text: false,
            separator: None,
        }
    }

    /// Reports whether a non-whitespace character has been emitted.
    #[must_use]
    pub const fn seen_text(&self) -> bool {
        self.seen_text
    }

    fn push_text(&mut self, raw: &[u8], out: &mut Vec<u8>) {
        if let Some(separator) = self.separator.take() {
            let mut encoded = [0u8; 4];
            out.extend_from_slice(separator.encode_utf8(&mut encoded).as_bytes());
        }
        self.seen_text = true;
        out.extend_from_slice(raw);
    }
}

impl CharTransform for SpaceCollapser {
    const NAME: &'static str = "trim_spaces";

    fn push_char(&mut self, ch: char, raw: &[u8], out: &mut Vec<u8>) {
        if !ch.is_whitespace() {
            self.push_text(raw, out);
        } else if self.seen_text && self.separator.is_none() {
            self.separator = Some(ch);
        }
    }

    fn push_invalid(&mut self, raw: &[u8], out: &mut Vec<u8>) {
        self.push_text(raw, out);
    }

    fn finish(&mut self, tail: &[u8], _out: &mut Vec<u8>) {
        trace_tail_at_eof(Self::NAME, tail.len(), false);
        self.separator = None;
    }
}

/// Whitespace-trimming stream filter.
///
/// Leading whitespace is dropped, each internal run of whitespace collapses to
/// its first character, and the trailing run is dropped. A stream containing
/// only whitespace produces no output.
///
/// # Examples
///
/// ```
/// use filters::TrimSpaces;
/// use std::io::Read;
///
/// let mut filter = TrimSpaces::new(&b"  a\t\tb  "[..]);
/// let mut output = String::new();
/// filter.read_to_string(&mut output).unwrap();
/// assert_eq!(output, "a\tb");
/// ```
#[derive(Debug)]
pub struct TrimSpaces<R> {
    inner: TextFilter<R, SpaceCollapser>,
}

impl<R> TrimSpaces<R> {
    /// Wraps `upstream`.
    pub fn new(upstream: R) -> Self {
        Self {
            inner: TextFilter::with_transform(upstream, SpaceCollapser::new()),
        }
    }

    /// Number of raw bytes held back because they end inside a character.
    pub fn carried_len(&self) -> usize {
        self.inner.carried_len()
    }

    /// Consumes the filter and returns the upstream reader.
    pub fn into_inner(self) -> R {
        self.inner.into_inner()
    }
}

impl<R: Read> Read for TrimSpaces<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}
