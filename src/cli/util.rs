//! Wiring between parsed arguments, config, and the filter.

use super::Cli;
use crate::config::Config;
use crate::fmt::Gradient;
use crate::internal;
use crate::stream::ColorStream;
use std::io::{self, Cursor, Read, Write};

/// Words on the command line become one line of input; otherwise stdin is painted.
#[must_use]
pub fn input_source(text: &[String]) -> Box<dyn Read> {
    if text.is_empty() {
        Box::new(io::stdin().lock())
    } else {
        Box::new(Cursor::new(format!("{}\n", text.join(" ")).into_bytes()))
    }
}

/// `--config` wins over the default location.
///
/// # Errors
/// See [`Config::load`] and [`Config::load_from`].
pub fn load_config(cli: &Cli) -> Result<Config, crate::Error> {
    cli.config
        .as_deref()
        .map_or_else(Config::load, Config::load_from)
}

/// Flags override the config file field by field.
///
/// # Errors
/// [`crate::Error::InvalidGradient`] for an unusable frequency or spread.
pub fn resolve_gradient(cli: &Cli, config: &Config) -> Result<Gradient, crate::Error> {
    Gradient::new(
        cli.freq.unwrap_or(config.paint.freq),
        cli.spread.unwrap_or(config.paint.spread),
    )
}

/// Paints `source` into `sink` with the seed and gradient resolved from `cli` and
/// `config`. Returns the number of bytes read.
///
/// # Errors
/// An invalid gradient, or the first read/write failure.
pub fn paint<R, W>(
    cli: &Cli,
    config: &Config,
    source: &mut R,
    sink: W,
) -> Result<u64, crate::Error>
where
    R: Read + ?Sized,
    W: Write,
{
    let gradient = resolve_gradient(cli, config)?;
    let mut stream =
        ColorStream::new(sink, cli.seed.or(config.paint.seed)).with_gradient(gradient);
    internal::debug(
        "CLI",
        &format!(
            "seed={} freq={} spread={}",
            stream.seed(),
            gradient.freq(),
            gradient.spread()
        ),
    );
    stream.paint(source)
}

/// Paints the process input onto stdout.
///
/// # Errors
/// See [`paint`].
pub fn run(cli: &Cli, config: &Config) -> Result<u64, crate::Error> {
    let mut source = input_source(&cli.text);
    paint(cli, config, &mut source, io::stdout().lock())
}
