// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Validation result types.

use crate::cli::args::OutputFormat;
use crate::commit::CommitType;
use console::style;
use thiserror::Error;

/// The rule a commit message broke.
///
/// The `Display` output is the diagnostic shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error("Commit message is empty")]
    EmptyMessage,

    #[error(
        "Commit message does not follow Conventional Commits format.\n\
         \n\
         Expected format: <type>(<scope>): <subject>\n\
         \n\
         Examples:\n  \
         feat(auth): add login functionality\n  \
         fix(api): resolve null pointer exception\n  \
         docs(readme): update installation guide\n\
         \n\
         Valid types: {types}\n\
         \n\
         Your message: {subject}",
        types = CommitType::list()
    )]
    InvalidFormat { subject: String },

    #[error("Invalid commit type '{commit_type}'.\nValid types: {types}", types = CommitType::list())]
    InvalidType { commit_type: String },

    #[error("Subject cannot be empty")]
    EmptySubject,

    #[error("Subject should not end with a period")]
    TrailingPeriod,

    #[error("Subject line is too long ({length} chars). Keep it under {max} characters.")]
    SubjectTooLong { length: usize, max: usize },

    #[error("Subject should start with lowercase letter")]
    UppercaseStart,

    #[error(
        "Subject should use imperative mood (e.g., 'add' not 'added' or 'adding').\n\
         Your first word: '{word}'"
    )]
    NotImperative { word: String },
}

impl Violation {
    /// Stable identifier for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            Violation::EmptyMessage => "empty-message",
            Violation::InvalidFormat { .. } => "invalid-format",
            Violation::InvalidType { .. } => "invalid-type",
            Violation::EmptySubject => "subject-empty",
            Violation::TrailingPeriod => "subject-trailing-period",
            Violation::SubjectTooLong { .. } => "subject-max-length",
            Violation::UppercaseStart => "subject-case",
            Violation::NotImperative { .. } => "subject-imperative",
        }
    }
}

/// Result of validating a commit message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// The subject line that was checked, if the message had one.
    pub subject: Option<String>,
    /// The first rule violated, if any.
    pub violation: Option<Violation>,
}

impl ValidationResult {
    /// A passing result.
    pub fn accepted(subject: Option<String>) -> Self {
        Self {
            subject,
            violation: None,
        }
    }

    /// A failing result.
    pub fn rejected(subject: Option<String>, violation: Violation) -> Self {
        Self {
            subject,
            violation: Some(violation),
        }
    }

    /// Check if the validation passed.
    pub fn is_valid(&self) -> bool {
        self.violation.is_none()
    }

    /// The diagnostic for a failing result.
    pub fn error(&self) -> Option<String> {
        self.violation.as_ref().map(|v| v.to_string())
    }

    /// The code of the violated rule.
    pub fn code(&self) -> Option<&'static str> {
        self.violation.as_ref().map(Violation::code)
    }

    /// Print the result. Passing text goes to stdout, failing text to stderr.
    pub fn print(&self, format: Option<OutputFormat>, emoji: bool) {
        match format {
            Some(OutputFormat::Json) => println!("{}", self.to_json()),
            _ => self.print_text(emoji),
        }
    }

    fn print_text(&self, emoji: bool) {
        match &self.violation {
            None => {
                let marker = if emoji { "✅ " } else { "" };
                println!(
                    "{}{}",
                    marker,
                    style("Commit message is valid").green().bold()
                );
            }
            Some(violation) => {
                let marker = if emoji { "❌ " } else { "" };
                eprintln!(
                    "{}{}",
                    marker,
                    style("Invalid commit message:").for_stderr().red().bold()
                );
                eprintln!("\n{}\n", violation);
            }
        }
    }

    /// Render the result as a JSON document.
    pub fn to_json(&self) -> String {
        let json = serde_json::json!({
            "valid": self.is_valid(),
            "code": self.code(),
            "error": self.error(),
            "subject": self.subject,
        });

        serde_json::to_string_pretty(&json).unwrap_or_default()
    }
}
