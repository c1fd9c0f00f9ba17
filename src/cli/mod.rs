//! CLI module for rainbow.
//!
//! This module provides the command-line interface using Clap.

pub mod util;

use clap::Parser;
use std::path::PathBuf;

/// Diagnostic level for CLI arguments.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for crate::level::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Self::Trace,
            LogLevel::Debug => Self::Debug,
            LogLevel::Info => Self::Info,
            LogLevel::Warn => Self::Warn,
            LogLevel::Error => Self::Error,
        }
    }
}

/// rainbow - Paint text in rainbow colors.
#[derive(Debug, Parser)]
#[command(
    name = "rainbow",
    version,
    about = "Paint text in rainbow colors",
    long_about = "Paints TEXT, or stdin when no TEXT is given, in a rainbow gradient of \
                  256-color escapes. Escapes already in the input pass through untouched."
)]
pub struct Cli {
    /// Words to paint, joined by single spaces and followed by a newline
    #[arg(trailing_var_arg = true)]
    pub text: Vec<String>,

    /// Starting phase of the rainbow (random when omitted)
    #[arg(short, long, value_name = "N")]
    pub seed: Option<u64>,

    /// Hue frequency
    #[arg(short = 'F', long, value_name = "F", allow_negative_numbers = true)]
    pub freq: Option<f64>,

    /// Columns per unit of phase
    #[arg(short = 'p', long, value_name = "S")]
    pub spread: Option<f64>,

    /// Config file (defaults to <config dir>/rainbow/rainbow.toml)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Diagnostic level on stderr
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,
}

pub use util::{input_source, load_config, paint, resolve_gradient, run};
