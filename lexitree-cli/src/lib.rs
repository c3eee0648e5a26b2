//! Lexitree CLI library
//!
//! This library provides the command-line interface for the lexitree
//! text parser: argument handling, input resolution and report output.

pub mod commands;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};

/// Initialize logging based on verbosity level.
///
/// Nothing is installed when `quiet` is set, so core warnings about
/// unparsed spans are silenced too.
pub fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .try_init();
}
