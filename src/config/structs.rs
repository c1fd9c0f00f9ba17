//! Configuration struct definitions.

use crate::fmt::{DEFAULT_FREQ, DEFAULT_SPREAD, Gradient};
use serde::Deserialize;

/// Settings that concern the process rather than the painting.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Minimum diagnostic level (trace, debug, info, warn, error).
    pub level: String,
    /// Color the diagnostic tags on stderr.
    pub colors: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            colors: true,
        }
    }
}

/// Shape of the rainbow.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PaintConfig {
    /// Starting phase; a random one is picked when absent.
    pub seed: Option<u64>,
    /// Hue frequency.
    pub freq: f64,
    /// Columns per unit of phase.
    pub spread: f64,
}

impl Default for PaintConfig {
    fn default() -> Self {
        Self {
            seed: None,
            freq: DEFAULT_FREQ,
            spread: DEFAULT_SPREAD,
        }
    }
}

impl PaintConfig {
    /// # Errors
    /// [`crate::Error::InvalidGradient`] when `freq` or `spread` is out of range.
    pub fn gradient(&self) -> Result<Gradient, crate::Error> {
        Gradient::new(self.freq, self.spread)
    }
}
