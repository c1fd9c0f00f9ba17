//! Painted text targets the 6×6×6 cube of the 256-color palette, which every terminal
//! that understands SGR renders the same way.

use std::fmt;

/// A dedicated type prevents mixing up raw u8 triples and documents color intent at the type level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// `const` so the diagnostic palette can be compile-time constants.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Nearest cell of the color cube, in `16..=231`.
    #[must_use]
    pub const fn palette_index(self) -> u8 {
        color_index(self.r, self.g, self.b)
    }

    /// `ESC[38;5;<n>m` for the cube cell of this color; prefixes every painted character.
    #[must_use]
    pub fn fg_ansi256(self) -> String {
        format!("\x1b[38;5;{}m", self.palette_index())
    }

    /// 24-bit form, only used for diagnostic tags on stderr.
    #[must_use]
    pub fn fg_ansi(self) -> String {
        format!("\x1b[38;2;{};{};{}m", self.r, self.g, self.b)
    }

    /// Terminates any active SGR styling so subsequent text returns to the terminal default.
    pub const RESET: &'static str = "\x1b[0m";

    #[must_use]
    pub const fn cyan() -> Self {
        Self::new(139, 233, 253)
    }

    #[must_use]
    pub const fn yellow() -> Self {
        Self::new(241, 250, 140)
    }

    #[must_use]
    pub const fn red() -> Self {
        Self::new(255, 85, 85)
    }

    #[must_use]
    pub const fn purple() -> Self {
        Self::new(189, 147, 249)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

/// Maps an RGB triple onto the color cube: `16 + 36*bucket(r) + 6*bucket(g) + bucket(b)`.
///
/// Every `u8` channel lands in a bucket of `0..=5`, so the result is always in `16..=231`.
#[must_use]
pub const fn color_index(r: u8, g: u8, b: u8) -> u8 {
    16 + 36 * bucket(r) + 6 * bucket(g) + bucket(b)
}

#[allow(clippy::cast_possible_truncation)]
const fn bucket(value: u8) -> u8 {
    (6 * value as u16 / 256) as u8
}
