// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine for commit validation.

use crate::commit::subject_line;
use crate::config::RulesConfig;

use super::builtin::*;
use super::validator::{ValidationResult, Violation};

/// Rule engine for validating commit messages.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    rules: RulesConfig,
}

impl Validator {
    /// Create a new validator with the given rule configuration.
    pub fn new(rules: RulesConfig) -> Self {
        Self { rules }
    }

    /// Validate a raw commit message.
    ///
    /// Only the subject line is checked. Rules run in a fixed order and the
    /// first one that fails decides the result.
    pub fn validate(&self, message: &str) -> ValidationResult {
        let Some(subject) = subject_line(message) else {
            tracing::debug!("Rejected: message is empty");
            return ValidationResult::rejected(None, Violation::EmptyMessage);
        };

        let owned = Some(subject.to_string());

        if is_merge_commit(subject) {
            tracing::debug!("Accepted merge commit without further checks");
            return ValidationResult::accepted(owned);
        }

        match self.check_subject(subject) {
            Some(violation) => {
                tracing::debug!("Rejected by rule '{}'", violation.code());
                ValidationResult::rejected(owned, violation)
            }
            None => ValidationResult::accepted(owned),
        }
    }

    fn check_subject(&self, subject: &str) -> Option<Violation> {
        let parsed = match check_format(subject) {
            Ok(parsed) => parsed,
            Err(violation) => return Some(violation),
        };

        tracing::debug!(
            "Parsed subject: type={}, scope={:?}, breaking={}",
            parsed.raw_type,
            parsed.scope,
            parsed.breaking
        );

        check_type(&parsed)
            .or_else(|| check_subject_not_empty(&parsed))
            .or_else(|| check_subject_trailing_period(&parsed))
            .or_else(|| check_max_subject_length(subject, self.rules.max_subject_length))
            .or_else(|| check_subject_case(&parsed))
            .or_else(|| check_imperative_mood(&parsed))
    }
}

/// Validate a commit message with the default rules.
pub fn validate(message: &str) -> ValidationResult {
    Validator::default().validate(message)
}
