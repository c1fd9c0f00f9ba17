//! The rainbow itself: three sinusoids 120° apart, sampled along a phase that advances
//! by one per line and by `1 / spread` per column.

use super::Color;
use std::f64::consts::PI;

/// How fast the hue cycles per unit of phase.
pub const DEFAULT_FREQ: f64 = 0.1;

/// Columns per unit of phase. Larger values stretch each band across more characters.
pub const DEFAULT_SPREAD: f64 = 3.0;

/// Frequency and spread of the hue function. Validated on construction so the
/// write loop never divides by zero or samples `NaN`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gradient {
    freq: f64,
    spread: f64,
}

impl Default for Gradient {
    fn default() -> Self {
        Self {
            freq: DEFAULT_FREQ,
            spread: DEFAULT_SPREAD,
        }
    }
}

impl Gradient {
    /// # Errors
    /// Returns [`crate::Error::InvalidGradient`] when either value is not finite or
    /// `spread` is not strictly positive.
    pub fn new(freq: f64, spread: f64) -> Result<Self, crate::Error> {
        if !freq.is_finite() {
            return Err(crate::Error::InvalidGradient(format!(
                "frequency must be finite, got {freq}"
            )));
        }
        if !spread.is_finite() || spread <= 0.0 {
            return Err(crate::Error::InvalidGradient(format!(
                "spread must be a positive number, got {spread}"
            )));
        }
        Ok(Self { freq, spread })
    }

    #[must_use]
    pub const fn freq(&self) -> f64 {
        self.freq
    }

    #[must_use]
    pub const fn spread(&self) -> f64 {
        self.spread
    }

    /// Samples the three channels at phase `x`, truncating (not rounding) to integers.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn phase(&self, x: f64) -> Color {
        let channel = |shift: f64| ((self.freq * x + shift).sin() * 127.0 + 128.0) as u8;
        Color::new(channel(0.0), channel(2.0 * PI / 3.0), channel(4.0 * PI / 3.0))
    }

    /// Color of column `offset` on the line whose phase is `seed`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn color_at(&self, seed: u64, offset: usize) -> Color {
        self.phase(seed as f64 + offset as f64 / self.spread)
    }
}

/// [`Gradient::phase`] with the default frequency.
#[must_use]
pub fn hue_phase(x: f64) -> Color {
    Gradient::default().phase(x)
}
