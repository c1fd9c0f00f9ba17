//! TOML configuration loading.
//!
//! Separated from struct definitions so that the loading logic (path resolution,
//! file I/O) stays independent of the serde schema.

mod structs;

pub use structs::{GeneralConfig, PaintConfig};

use crate::internal;
use crate::level::Level;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Every field has a default, so an empty or missing file still paints.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub paint: PaintConfig,
}

impl Config {
    /// Loads `<config_dir>/rainbow/rainbow.toml`, falling back to defaults when it
    /// does not exist.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined, the file can't be read,
    /// or TOML parsing hits a syntax error.
    pub fn load() -> Result<Self, crate::Error> {
        let path = Self::get_config_path()?;
        Self::load_from(&path)
    }

    /// Loads configuration from an explicit path instead of the default location.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        if !path.exists() {
            internal::debug(
                "CONFIG",
                &format!("{} not found, using defaults", path.display()),
            );
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        internal::info("CONFIG", &format!("Config loaded from {}", path.display()));
        Ok(config)
    }

    /// XDG-style path, e.g. `~/.config/rainbow/rainbow.toml` on Linux.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("rainbow").join("rainbow.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// An unrecognized level string falls back to `warn` rather than failing the run.
    #[must_use]
    pub fn parse_level(&self) -> Level {
        self.general.level.parse().unwrap_or(Level::Warn)
    }
}
