//! Diagnostic logging setup.
//!
//! The full-screen chat owns the terminal, so it only logs when a file is
//! given. The non-interactive commands log to stderr.

use std::error::Error;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directive (e.g. `nimdie=debug`).
pub const LOG_FILTER_ENV: &str = "NIMDIE_LOG";

const DEFAULT_FILTER: &str = "warn";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    File(&'a Path),
    Stderr,
    Disabled,
}

impl<'a> LogTarget<'a> {
    /// Pick a target for a command: an explicit file always wins, otherwise
    /// interactive sessions stay silent.
    pub fn for_command(log_file: Option<&'a Path>, interactive: bool) -> Self {
        match log_file {
            Some(path) => LogTarget::File(path),
            None if interactive => LogTarget::Disabled,
            None => LogTarget::Stderr,
        }
    }
}

pub fn init_tracing(target: LogTarget<'_>) -> Result<(), Box<dyn Error>> {
    let filter = || {
        EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    };

    match target {
        LogTarget::Disabled => Ok(()),
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter())
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init()
            .map_err(|err| -> Box<dyn Error> { err }),
        LogTarget::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter())
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init()
                .map_err(|err| -> Box<dyn Error> { err })
        }
    }
}
