//! Logging setup.
//!
//! The library only emits `tracing` events; this module installs the subscriber.
//! While the TUI owns the terminal, output goes to the configured log file or
//! is dropped entirely.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Settings;
use crate::error::{AppError, EXIT_RUNTIME};

/// Where log lines are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Plain CLI commands.
    Stderr,
    /// Interactive TUI.
    Terminal,
}

pub fn init(settings: &Settings, target: LogTarget) -> Result<(), AppError> {
    let filter = EnvFilter::try_new(&settings.log_filter).map_err(|e| {
        AppError::new(
            EXIT_RUNTIME,
            format!("Invalid log filter '{}': {e}", settings.log_filter),
        )
    })?;

    let registry = tracing_subscriber::registry().with(filter);

    // `try_init` fails only if a subscriber is already installed; keep the first one.
    match (target, &settings.log_file) {
        (_, Some(path)) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| {
                    AppError::new(
                        EXIT_RUNTIME,
                        format!("Failed to open log file '{}': {e}", path.display()),
                    )
                })?;
            let _ = registry
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .try_init();
        }
        (LogTarget::Stderr, None) => {
            let _ = registry
                .with(fmt::layer().with_writer(std::io::stderr))
                .try_init();
        }
        (LogTarget::Terminal, None) => {
            let _ = registry
                .with(fmt::layer().with_writer(std::io::sink))
                .try_init();
        }
    }

    Ok(())
}
