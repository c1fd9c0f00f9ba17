//! Paints its arguments, or stdin when there are none, onto stdout.
//!
//! Usage:
//!   rainbow [OPTIONS] [TEXT]...
//!   echo hello | rainbow --seed 42

use clap::Parser;
use rainbow::cli::{self, Cli};
use rainbow::internal;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Cli::parse();

    // Diagnostics level and colors come from config, so it loads before anything can be reported
    let config = match cli::load_config(&args) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            return ExitCode::FAILURE;
        }
    };

    internal::init_with_config(&config, args.log_level.map(Into::into));

    match cli::run(&args, &config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            internal::error("CLI", &e.to_string());
            ExitCode::FAILURE
        }
    }
}
