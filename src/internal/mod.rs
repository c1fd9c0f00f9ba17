//! Rainbow's own diagnostics. Stdout carries nothing but painted text, so every
//! diagnostic goes to stderr as `[LEVEL] SCOPE  message`.
//!
//! Uses `OnceLock` so the logger is initialized exactly once, even if the binary
//! and tests race to call `init`.

use crate::config::Config;
use crate::fmt::Color;
use crate::level::Level;
use std::io::{self, Write};
use std::sync::OnceLock;

static DIAGNOSTICS: OnceLock<Diagnostics> = OnceLock::new();

/// Scope names are padded to this width so messages line up.
const SCOPE_WIDTH: usize = 8;

#[derive(Debug, Clone, Copy)]
struct Diagnostics {
    min_level: Level,
    colors: bool,
}

impl Diagnostics {
    fn format(self, level: Level, scope: &str, msg: &str) -> String {
        let tag = format!("[{:^5}]", level.as_str().to_uppercase());
        if !self.colors {
            return format!("{tag} {scope:<width$}  {msg}", width = SCOPE_WIDTH);
        }
        let color = match level {
            Level::Trace | Level::Debug => Color::purple(),
            Level::Info => Color::cyan(),
            Level::Warn => Color::yellow(),
            Level::Error => Color::red(),
        };
        format!(
            "{}{tag}{} \x1b[2m{scope:<width$}\x1b[0m  {msg}",
            color.fg_ansi(),
            Color::RESET,
            width = SCOPE_WIDTH,
        )
    }
}

/// Only the first call takes effect; later calls are no-ops.
pub fn init(min_level: Level, colors: bool) {
    let was_init = DIAGNOSTICS.get().is_some();
    DIAGNOSTICS.get_or_init(|| Diagnostics { min_level, colors });
    if !was_init {
        trace("INTERNAL", &format!("Diagnostics at level {min_level}"));
    }
}

/// Initializes from `[general]`, with `level_override` (the CLI flag) taking precedence.
pub fn init_with_config(config: &Config, level_override: Option<Level>) {
    init(
        level_override.unwrap_or_else(|| config.parse_level()),
        config.general.colors,
    );
    if level_override.is_none()
        && let Err(e) = config.general.level.parse::<Level>()
    {
        warn("CONFIG", &format!("{e}, using warn"));
    }
}

/// Pre-init calls silently vanish, so library users who never call `init` see nothing.
fn log(level: Level, scope: &str, msg: &str) {
    if let Some(diag) = DIAGNOSTICS.get()
        && level >= diag.min_level
    {
        let _ = writeln!(io::stderr().lock(), "{}", diag.format(level, scope, msg));
    }
}

pub fn trace(scope: &str, msg: &str) {
    log(Level::Trace, scope, msg);
}

pub fn debug(scope: &str, msg: &str) {
    log(Level::Debug, scope, msg);
}

pub fn info(scope: &str, msg: &str) {
    log(Level::Info, scope, msg);
}

pub fn warn(scope: &str, msg: &str) {
    log(Level::Warn, scope, msg);
}

/// Always emitted once initialized: no minimum level filters out errors.
pub fn error(scope: &str, msg: &str) {
    log(Level::Error, scope, msg);
}
