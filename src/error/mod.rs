// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for the commitgate application.
//!
//! These cover operational failures only. A commit message that breaks a
//! rule is an ordinary outcome and is reported through
//! [`ValidationResult`](crate::rules::ValidationResult) instead.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for commitgate operations.
#[derive(Error, Debug)]
pub enum GateError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Message acquisition errors
    #[error("{0}")]
    Input(#[from] InputError),

    // Git errors
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    // Hook errors
    #[error("Hook error: {0}")]
    Hook(#[from] HookError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    #[error("Configuration file already exists: {path}")]
    AlreadyExists { path: PathBuf },
}

/// Errors raised while obtaining the commit message to check.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("No commit message provided")]
    MissingMessage,

    #[error("File '{path}' could not be read: {message}")]
    Unreadable { path: PathBuf, message: String },
}

/// Git-related errors.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a git repository")]
    NotARepository,

    #[error("Failed to open repository: {message}")]
    OpenFailed { message: String },

    #[error("Invalid commit reference: {reference}")]
    InvalidReference { reference: String },
}

impl From<git2::Error> for GitError {
    fn from(err: git2::Error) -> Self {
        GitError::OpenFailed {
            message: err.message().to_string(),
        }
    }
}

/// Hook-related errors.
#[derive(Error, Debug)]
pub enum HookError {
    #[error("Failed to install hook '{hook}': {message}")]
    InstallFailed { hook: String, message: String },

    #[error("Hook already exists: {hook} (use --force to replace it)")]
    AlreadyExists { hook: String },

    #[error("Failed to remove hook '{hook}': {message}")]
    RemoveFailed { hook: String, message: String },
}

/// Result type alias for commitgate operations.
pub type Result<T> = std::result::Result<T, GateError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| GateError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::NotFound {
            path: PathBuf::from("/path/to/config"),
        };
        assert!(err.to_string().contains("/path/to/config"));
    }

    #[test]
    fn test_input_error_display() {
        let err: GateError = InputError::Unreadable {
            path: PathBuf::from(".git/COMMIT_EDITMSG"),
            message: "No such file or directory".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "File '.git/COMMIT_EDITMSG' could not be read: No such file or directory"
        );
    }

    #[test]
    fn test_gate_error_from_config_error() {
        let config_err = ConfigError::InvalidValue {
            key: "rules.max_subject_length".to_string(),
            message: "must be greater than zero".to_string(),
        };
        let err: GateError = config_err.into();
        assert!(err.to_string().contains("rules.max_subject_length"));
    }

    #[test]
    fn test_context() {
        let result: std::result::Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::Other, "boom"));
        let err = result.context("init").unwrap_err();
        assert_eq!(err.to_string(), "init: boom");
    }
}
