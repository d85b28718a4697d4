use std::io::{self, Read};

use crate::text::{CharTransform, TextFilter};

/// Direction of a case-folding filter.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum CaseDirection {
    /// Map characters to their upper-case form.
    Upper,
    /// Map characters to their lower-case form.
    Lower,
}

impl CaseDirection {
    /// Appends the UTF-8 encoding of `ch` mapped in this direction.
    ///
    /// Uses the full Unicode mapping, so a single character may expand into
    /// several (`ß` becomes `SS`).
    pub fn push_mapped(self, ch: char, out: &mut Vec<u8>) {
        let mut encoded = [0u8; 4];
        match self {
            Self::Upper => {
                for mapped in ch.to_uppercase() {
                    out.extend_from_slice(mapped.encode_utf8(&mut encoded).as_bytes());
                }
            }
            Self::Lower => {
                for mapped in ch.to_lowercase() {
                    out.extend_from_slice(mapped.encode_utf8(&mut encoded).as_bytes());
                }
            }
        }
    }
}

/// [`CharTransform`] that maps each character's case.
///
/// Invalid byte sequences and an unfinished trailing sequence are passed
/// through untouched.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CaseMapper {
    direction: CaseDirection,
}

impl CaseMapper {
    /// Creates a mapper for `direction`.
    #[must_use]
    pub const fn new(direction: CaseDirection) -> Self {
        Self { direction }
    }

    /// Returns the configured direction.
    #[must_use]
    pub const fn direction(&self) -> CaseDirection {
        self.direction
    }
}

impl CharTransform for CaseMapper {
    const NAME: &'static str = "case_fold";

    fn push_char(&mut self, ch: char, raw: &[u8], out: &mut Vec<u8>) {
        if ch.is_ascii() {
            let byte = raw[0];
            out.push(match self.direction {
                CaseDirection::Upper => byte.to_ascii_uppercase(),
                CaseDirection::Lower => byte.to_ascii_lowercase(),
            });
        } else {
            self.direction.push_mapped(ch, out);
        }
    }

    fn push_invalid(&mut self, raw: &[u8], out: &mut Vec<u8>) {
        out.extend_from_slice(raw);
    }

    fn finish(&mut self, tail: &[u8], out: &mut Vec<u8>) {
        crate::trace::trace_tail_at_eof(Self::NAME, tail.len(), true);
        out.extend_from_slice(tail);
    }
}

/// Case-folding stream filter.
///
/// Reads UTF-8 text from `upstream` and yields it with every character mapped
/// to upper or lower case. Output does not depend on how callers or the
/// upstream reader chunk the stream.
///
/// # Examples
///
/// ```
/// use filters::{CaseDirection, CaseFold};
/// use std::io::Read;
///
/// let mut filter = CaseFold::new(&b"HeLLo"[..], CaseDirection::Lower);
/// let mut output = String::new();
/// filter.read_to_string(&mut output).unwrap();
/// assert_eq!(output, "hello");
/// ```
#[derive(Debug)]
pub struct CaseFold<R> {
    inner: TextFilter<R, CaseMapper>,
}

impl<R> CaseFold<R> {
    /// Wraps `upstream`, folding case in `direction`.
    pub fn new(upstream: R, direction: CaseDirection) -> Self {
        Self {
            inner: TextFilter::with_transform(upstream, CaseMapper::new(direction)),
        }
    }

    /// Shorthand for [`CaseDirection::Upper`].
    pub fn upper(upstream: R) -> Self {
        Self::new(upstream, CaseDirection::Upper)
    }

    /// Shorthand for [`CaseDirection::Lower`].
    pub fn lower(upstream: R) -> Self {
        Self::new(upstream, CaseDirection::Lower)
    }

    /// Returns the configured direction.
    pub fn direction(&self) -> CaseDirection {
        self.inner.transform().direction()
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

impl<R: Read> Read for CaseFold<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::{CaseDirection, CaseFold};
    use std::io::Read;
    use test_support::{ChunkedReader, drain_with_sizes};

    fn fold(input: &[u8], direction: CaseDirection) -> Vec<u8> {
        let mut output = Vec::new();
        CaseFold::new(input, direction)
            .read_to_end(&mut output)
            .expect("drain succeeds");
        output
    }

    #[test]
    fn upper_and_lower_ascii() {
        assert_eq!(fold(b"HeLLo", CaseDirection::Upper), b"HELLO");
        assert_eq!(fold(b"HeLLo", CaseDirection::Lower), b"hello");
    }

    #[test]
    fn non_ascii_letters_are_mapped() {
        assert_eq!(
            fold("Привет, Мир".as_bytes(), CaseDirection::Upper),
            "ПРИВЕТ, МИР".as_bytes()
        );
        assert_eq!(
            fold("ÉCOLE Ÿ".as_bytes(), CaseDirection::Lower),
            "école ÿ".as_bytes()
        );
    }

    #[test]
    fn expanding_mappings_are_emitted_whole() {
        assert_eq!(fold("straße".as_bytes(), CaseDirection::Upper), b"STRASSE");
    }

    #[test]
    fn characters_without_case_are_unchanged() {
        let input = "123 🦀 «¿?»".as_bytes();
        assert_eq!(fold(input, CaseDirection::Upper), input);
        assert_eq!(fold(input, CaseDirection::Lower), input);
    }

    #[test]
    fn one_byte_caller_reads_reassemble_expanded_output() {
        let filter = CaseFold::upper("ßé".as_bytes());
        let output = drain_with_sizes(filter, &[1]).expect("drain succeeds");
        assert_eq!(output, "SSÉ".as_bytes());
    }

    #[test]
    fn character_split_across_upstream_reads() {
        let text = "aЖb".as_bytes();
        let upstream = ChunkedReader::new([&text[..2], &text[2..]]);
        let mut filter = CaseFold::upper(upstream);

        let mut output = Vec::new();
        filter.read_to_end(&mut output).expect("drain succeeds");
        assert_eq!(output, "AЖB".as_bytes());
    }

    #[test]
    fn invalid_bytes_pass_through() {
        assert_eq!(
            fold(&[b'a', 0xC0, b'b'], CaseDirection::Upper),
            vec![b'A', 0xC0, b'B']
        );
    }

    #[test]
    fn truncated_final_character_is_kept_verbatim() {
        let mut input = b"ab".to_vec();
        input.extend_from_slice(&"€".as_bytes()[..2]);

        let mut expected = b"AB".to_vec();
        expected.extend_from_slice(&"€".as_bytes()[..2]);

        assert_eq!(fold(&input, CaseDirection::Upper), expected);
    }

    #[test]
    fn direction_is_reported() {
        assert_eq!(CaseFold::lower(&b""[..]).direction(), CaseDirection::Lower);
        assert_eq!(CaseFold::upper(&b""[..]).direction(), CaseDirection::Upper);
    }
}
