//! Splits raw input into the units the write loop acts on.

use crate::fmt::{Csi, scan_csi};

/// Longest escape passed through, and so the longest tail carried between writes.
/// A longer run of parameters is painted like any other text, whether or not a
/// chunk boundary falls inside it, so chunking never changes the output.
pub const MAX_CARRY: usize = 64;

/// One unit of input at the current scan position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Newline,
    Tab,
    /// A recognized color/erase sequence of this many bytes.
    Escape(usize),
    /// One visible character of this many bytes: a whole code point, or a single
    /// byte that is not valid UTF-8.
    Char(usize),
    /// The rest of the input is a valid prefix of a character or escape.
    Incomplete,
}

/// Classifies the unit at the start of `input`, which must not be empty.
///
/// With `eof` set, nothing is reported as [`Token::Incomplete`]: truncated prefixes
/// fall back to single bytes.
#[must_use]
pub fn next_token(input: &[u8], eof: bool) -> Token {
    let can_wait = !eof && input.len() <= MAX_CARRY;
    match input[0] {
        b'\n' => Token::Newline,
        b'\t' => Token::Tab,
        0x1b => match scan_csi(input) {
            Csi::Match(len) if len <= MAX_CARRY => Token::Escape(len),
            Csi::Partial if can_wait => Token::Incomplete,
            Csi::Match(_) | Csi::Partial | Csi::NoMatch => Token::Char(1),
        },
        lead => {
            let width = utf8_width(lead);
            if width <= 1 {
                return Token::Char(1);
            }
            let end = width.min(input.len());
            match std::str::from_utf8(&input[..end]) {
                Ok(_) => Token::Char(width),
                Err(e) if e.error_len().is_none() && can_wait => Token::Incomplete,
                Err(_) => Token::Char(1),
            }
        }
    }
}

/// Encoded length announced by a leading byte; `0` for bytes that cannot start a
/// character.
const fn utf8_width(lead: u8) -> usize {
    match lead {
        0x00..=0x7f => 1,
        0xc2..=0xdf => 2,
        0xe0..=0xef => 3,
        0xf0..=0xf4 => 4,
        _ => 0,
    }
}
