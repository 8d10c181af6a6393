//! Runtime settings read from the environment.
//!
//! A `.env` file in the working directory is loaded first if present.

use std::path::PathBuf;

use crate::error::{AppError, EXIT_INPUT};

/// Default directory recursion depth for finding resume files.
pub const DEFAULT_SEARCH_DEPTH: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// `tracing` filter directive (`CAREERCRAFT_LOG`).
    pub log_filter: String,
    /// Log destination while the TUI owns the terminal (`CAREERCRAFT_LOG_FILE`).
    pub log_file: Option<PathBuf>,
    /// Resume discovery depth (`CAREERCRAFT_SEARCH_DEPTH`).
    pub search_depth: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            log_file: None,
            search_depth: DEFAULT_SEARCH_DEPTH,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup (used by tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let defaults = Self::default();

        let log_filter = lookup("CAREERCRAFT_LOG")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.log_filter);

        let log_file = lookup("CAREERCRAFT_LOG_FILE")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        let search_depth = match lookup("CAREERCRAFT_SEARCH_DEPTH") {
            Some(raw) => raw.trim().parse::<usize>().map_err(|e| {
                AppError::new(
                    EXIT_INPUT,
                    format!("CAREERCRAFT_SEARCH_DEPTH must be a non-negative integer (got '{raw}'): {e}"),
                )
            })?,
            None => defaults.search_depth,
        };

        Ok(Self {
            log_filter,
            log_file,
            search_depth,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let settings = Settings::from_lookup(|_| None).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn reads_all_keys() {
        let settings = Settings::from_lookup(|key| match key {
            "CAREERCRAFT_LOG" => Some("careercraft=debug".to_string()),
            "CAREERCRAFT_LOG_FILE" => Some("/tmp/cc.log".to_string()),
            "CAREERCRAFT_SEARCH_DEPTH" => Some(" 2 ".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(settings.log_filter, "careercraft=debug");
        assert_eq!(settings.log_file, Some(PathBuf::from("/tmp/cc.log")));
        assert_eq!(settings.search_depth, 2);
    }

    #[test]
    fn bad_depth_is_an_input_error() {
        let err = Settings::from_lookup(|key| {
            (key == "CAREERCRAFT_SEARCH_DEPTH").then(|| "deep".to_string())
        })
        .unwrap_err();
        assert_eq!(err.exit_code(), EXIT_INPUT);
    }
}
