#![forbid(unsafe_code)]

//! `rainbow` - Paint text streams in rainbow gradients on the terminal.
//!
//! Every visible character of the input is wrapped in its own 256-color escape,
//! with the hue drifting along each line and shifting from one line to the next:
//! - Arbitrary chunk boundaries never split a character or an escape
//! - Escapes already present in the input pass through untouched
//! - Tabs become eight spaces, newlines are kept as they are
//!
//! # Example
//!
//! ```
//! use rainbow::{ColorStream, strip_escapes};
//!
//! let mut painted = Vec::new();
//! let mut stream = ColorStream::new(&mut painted, None);
//! stream.paint(&mut "hello\tworld\n".as_bytes()).unwrap();
//!
//! assert_eq!(strip_escapes(&painted), b"hello        world\n");
//! ```
//!
//! # Features
//!
//! - `cli` (default): Enables the `rainbow` binary and its argument parsing

pub mod config;
pub mod error;
pub mod fmt;
pub mod internal;
pub mod level;
pub mod stream;

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;

pub use config::Config;
pub use error::Error;
pub use fmt::{Color, Gradient, color_index, hue_phase, strip_escapes};
pub use level::Level;
pub use stream::ColorStream;
