//! The filter proper: every visible character of the input is wrapped in its own
//! 256-color SGR sequence, while newlines, tabs, and escapes already present in the
//! input keep their meaning.
//!
//! A `ColorStream` is `Send` whenever its sink is, but it is not meant to be shared:
//! `seed`, `offset`, and the carried tail are plain fields with no lock around them.
//! Writers that share one instance must serialize through their own `Mutex`, which
//! also serializes their output. Independent instances share nothing but, possibly,
//! the caller's sink, and that sink must then cope with concurrent writes itself.

mod scan;

pub use scan::{MAX_CARRY, Token, next_token};

use crate::fmt::{Color, Gradient};
use crate::internal;
use std::borrow::Cow;
use std::io::{self, Read, Write};

/// Columns a tab advances; it is emitted as this many spaces.
pub const TAB_WIDTH: usize = 8;

const TAB: &[u8; TAB_WIDTH] = b"        ";

/// Exclusive upper bound of a randomly chosen seed.
pub const SEED_RANGE: u64 = 256;

/// Streaming colorizer over any [`Write`] sink.
///
/// ```
/// use std::io::Write;
/// use rainbow::ColorStream;
///
/// let mut stream = ColorStream::new(Vec::new(), Some(1));
/// stream.write_all(b"hi\n").unwrap();
/// stream.finish().unwrap();
/// assert_eq!(stream.seed(), 2);
/// assert_eq!(
///     stream.into_inner(),
///     b"\x1b[38;5;154mh\x1b[0m\x1b[38;5;154mi\x1b[0m\n".to_vec(),
/// );
/// ```
#[derive(Debug)]
pub struct ColorStream<W: Write> {
    sink: W,
    /// Phase of the current line; advances by exactly one per newline.
    seed: u64,
    /// Column within the current line; reset by every newline.
    offset: usize,
    gradient: Gradient,
    /// Trailing prefix of a character or escape split across writes.
    carry: Vec<u8>,
}

impl<W: Write> ColorStream<W> {
    /// A `None` seed is replaced once, here, by a random value below [`SEED_RANGE`].
    /// `Some(0)` is kept as is.
    #[must_use]
    pub fn new(sink: W, seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(random_seed);
        Self {
            sink,
            seed,
            offset: 0,
            gradient: Gradient::default(),
            carry: Vec::new(),
        }
    }

    #[must_use]
    pub const fn with_gradient(mut self, gradient: Gradient) -> Self {
        self.gradient = gradient;
        self
    }

    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    #[must_use]
    pub const fn gradient(&self) -> &Gradient {
        &self.gradient
    }

    #[must_use]
    pub const fn get_ref(&self) -> &W {
        &self.sink
    }

    pub const fn get_mut(&mut self) -> &mut W {
        &mut self.sink
    }

    /// Drops any carried tail; call [`Self::finish`] first to keep it.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.sink
    }

    /// Copies `source` through the filter until it is exhausted, then resolves the
    /// carried tail and flushes. Returns the number of bytes read.
    ///
    /// # Errors
    /// The first read or sink failure. Output written before it stays written.
    pub fn paint<R: Read + ?Sized>(&mut self, source: &mut R) -> Result<u64, crate::Error> {
        internal::debug("PAINT", &format!("Painting with seed {}", self.seed));
        let copied = io::copy(source, self)?;
        self.finish()?;
        internal::debug("PAINT", &format!("Painted {copied} bytes"));
        Ok(copied)
    }

    /// Ends the stream: a tail still waiting for more bytes is emitted as single bytes,
    /// then the sink is flushed.
    ///
    /// # Errors
    /// Any sink failure.
    pub fn finish(&mut self) -> io::Result<()> {
        self.process(&[], true)?;
        self.sink.flush()
    }

    fn process(&mut self, data: &[u8], eof: bool) -> io::Result<()> {
        let input: Cow<'_, [u8]> = if self.carry.is_empty() {
            Cow::Borrowed(data)
        } else {
            let mut joined = std::mem::take(&mut self.carry);
            joined.extend_from_slice(data);
            Cow::Owned(joined)
        };

        let mut i = 0;
        while i < input.len() {
            let rest = &input[i..];
            match next_token(rest, eof) {
                Token::Newline => {
                    self.offset = 0;
                    self.seed = self.seed.wrapping_add(1);
                    self.sink.write_all(b"\n")?;
                    i += 1;
                }
                Token::Tab => {
                    self.offset += TAB_WIDTH;
                    self.sink.write_all(TAB)?;
                    i += 1;
                }
                Token::Escape(len) => {
                    self.sink.write_all(&rest[..len])?;
                    i += len;
                }
                Token::Char(len) => {
                    let color = self.gradient.color_at(self.seed, self.offset);
                    self.colorize(&rest[..len], color)?;
                    self.offset += 1;
                    i += len;
                }
                Token::Incomplete => {
                    self.carry.extend_from_slice(rest);
                    break;
                }
            }
        }
        Ok(())
    }

    fn colorize(&mut self, glyph: &[u8], color: Color) -> io::Result<()> {
        self.sink.write_all(color.fg_ansi256().as_bytes())?;
        self.sink.write_all(glyph)?;
        self.sink.write_all(Color::RESET.as_bytes())
    }
}

impl<W: Write> Write for ColorStream<W> {
    /// Consumes all of `data`. A character or escape cut off at the end is held back
    /// until the next call (or [`ColorStream::finish`]) completes it.
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.process(data, false)?;
        Ok(data.len())
    }

    /// Flushes the sink only; the carried tail waits for more input.
    fn flush(&mut self) -> io::Result<()> {
        self.sink.flush()
    }
}

fn random_seed() -> u64 {
    fastrand::u64(..SEED_RANGE)
}
