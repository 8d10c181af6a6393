//! Error types.
//!
//! Two layers:
//! - [`ValidationError`]: recoverable form/upload rejections raised by the wizard.
//!   Front-ends show them inline and stay on the current screen.
//! - [`AppError`]: process-level failures carrying the exit code `main` returns.

use thiserror::Error;

/// Exit code for bad user input (flags, paths, rejected uploads).
pub const EXIT_INPUT: u8 = 2;
/// Exit code for terminal and I/O failures.
pub const EXIT_RUNTIME: u8 = 4;

/// Rejections produced by wizard transitions and resume validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingRequiredField(&'static str),

    #[error("Please add some skills or upload your resume.")]
    NoSkillsOrResume,

    #[error("Invalid file type '{mime}'. Please upload a PDF, DOCX, or TXT file.")]
    UnsupportedType { mime: String },

    #[error("File too large ({size_bytes} bytes). Please upload a file smaller than {} MB.", .limit_bytes / (1024 * 1024))]
    TooLarge { size_bytes: u64, limit_bytes: u64 },

    #[error("Cannot {action} from the {screen} screen.")]
    OutOfOrder {
        action: &'static str,
        screen: &'static str,
    },
}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::new(EXIT_INPUT, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn too_large_message_reports_limit_in_megabytes() {
        let err = ValidationError::TooLarge {
            size_bytes: 6 * 1024 * 1024,
            limit_bytes: 5 * 1024 * 1024,
        };
        assert!(err.to_string().contains("smaller than 5 MB"));
    }

    #[test]
    fn validation_errors_map_to_input_exit_code() {
        let app: AppError = ValidationError::NoSkillsOrResume.into();
        assert_eq!(app.exit_code(), EXIT_INPUT);
    }
}
