// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! commitgate - Conventional Commits gate
//!
//! Checks a single commit message against the Conventional Commits
//! convention and reports the first rule it breaks. Meant to run as a
//! `commit-msg` hook.
//!
//! # Rules
//!
//! Only the subject line (the first non-blank line) is checked, in order:
//!
//! - Merge commits (`Merge ...`) are always accepted
//! - Shape must be `type(scope)!: subject` with a known type
//! - Subject text must not be empty or end with a period
//! - Subject line must be at most 72 characters
//! - Subject text must start lowercase and use the imperative mood
//!
//! # Example
//!
//! ```
//! use commitgate::validate;
//!
//! let result = validate("feat(auth): add login functionality");
//! assert!(result.is_valid());
//!
//! let result = validate("fix: fixed the bug");
//! assert_eq!(result.code(), Some("subject-imperative"));
//! ```

// Module declarations
pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod hooks;
pub mod input;
pub mod rules;

// Re-exports for convenience
pub use config::GateConfig;
pub use error::{GateError, Result};
pub use rules::{validate, ValidationResult, Validator, Violation};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of commitgate.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }
}
