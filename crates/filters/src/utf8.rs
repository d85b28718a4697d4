//! UTF-8 boundary classification.
//!
//! A UTF-8 character spans 1-4 bytes, so a read boundary can fall inside a
//! character. [`decode_next`] distinguishes a complete character, a byte
//! sequence that can never become valid, and a prefix that may still be
//! completed by the next read.

use std::str;

/// Longest encoded form of a single character.
pub(crate) const MAX_SEQUENCE_LEN: usize = 4;

/// Outcome of decoding the first character of a byte slice.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Decoded {
    /// A complete character occupying `len` bytes.
    Char { ch: char, len: usize },
    /// `len` bytes that cannot start any valid character.
    Invalid { len: usize },
    /// The slice is empty or ends inside a character.
    Incomplete,
}

/// Decodes the first character of `bytes`.
pub(crate) fn decode_next(bytes: &[u8]) -> Decoded {
    let window = &bytes[..bytes.len().min(MAX_SEQUENCE_LEN)];
    let (valid, error) = match str::from_utf8(window) {
        Ok(text) => (text, None),
        Err(error) => {
            let (head, _) = window.split_at(error.valid_up_to());
            (str::from_utf8(head).unwrap_or_default(), Some(error))
        }
    };

    if let Some(ch) = valid.chars().next() {
        return Decoded::Char {
            ch,
            len: ch.len_utf8(),
        };
    }

    match error.and_then(|error| error.error_len()) {
        Some(len) => Decoded::Invalid { len },
        None => Decoded::Incomplete,
    }
}

#[cfg(test)]
mod tests {
    use super::{Decoded, decode_next};

    #[test]
    fn ascii_decodes_as_single_byte() {
        assert_eq!(decode_next(b"ab"), Decoded::Char { ch: 'a', len: 1 });
    }

    #[test]
    fn multi_byte_characters_report_their_width() {
        assert_eq!(
            decode_next("é".as_bytes()),
            Decoded::Char { ch: 'é', len: 2 }
        );
        assert_eq!(
            decode_next("€x".as_bytes()),
            Decoded::Char { ch: '€', len: 3 }
        );
        assert_eq!(
            decode_next("🦀🦀".as_bytes()),
            Decoded::Char { ch: '🦀', len: 4 }
        );
    }

    #[test]
    fn every_strict_prefix_is_incomplete() {
        let crab = "🦀".as_bytes();
        for end in 0..crab.len() {
            assert_eq!(decode_next(&crab[..end]), Decoded::Incomplete, "prefix {end}");
        }
    }

    #[test]
    fn stray_continuation_byte_is_invalid() {
        assert_eq!(decode_next(&[0x80, b'a']), Decoded::Invalid { len: 1 });
    }

    #[test]
    fn broken_sequence_is_invalid_not_incomplete() {
        // Lead byte of a 3-byte sequence followed by ASCII.
        assert_eq!(decode_next(&[0xE2, b'a', b'b']), Decoded::Invalid { len: 1 });
        assert_eq!(decode_next(&[0xFF]), Decoded::Invalid { len: 1 });
    }

    #[test]
    fn valid_first_character_ignores_later_breakage() {
        assert_eq!(
            decode_next(&[b'x', 0xF0, 0x9F]),
            Decoded::Char { ch: 'x', len: 1 }
        );
    }
}
