//! Tracing setup.
//!
//! The TUI owns the terminal, so events are only collected when a log file
//! is configured. Without one, every `tracing` macro is a no-op.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directive, e.g. `LOTTLE_LOG=debug`
pub const LOG_ENV: &str = "LOTTLE_LOG";

const DEFAULT_FILTER: &str = "info";

pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Appends plain-text (no ANSI) log lines to `log_file` when given.
pub fn init_logging(log_file: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let Some(path) = log_file else {
        return Ok(());
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|err| err as Box<dyn std::error::Error>)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_log_file_is_a_noop() {
        assert!(init_logging(None).is_ok());
    }

    #[test]
    fn default_filter_is_info() {
        std::env::remove_var(LOG_ENV);
        assert_eq!(env_filter().to_string(), "info");
    }
}
