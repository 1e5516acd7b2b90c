// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in validation rules.
//!
//! Each check looks at one property of the subject line and returns the
//! violation it found, if any. The engine runs them in a fixed order and
//! stops at the first failure.

use crate::commit::ParsedSubject;

use super::validator::Violation;

/// Prefix of the subject line git writes for merge commits.
pub const MERGE_PREFIX: &str = "Merge ";

/// First-word endings treated as non-imperative.
const NON_IMPERATIVE_ENDINGS: &[&str] = &["ed", "ing"];

/// Check if the subject line is a merge commit.
pub fn is_merge_commit(subject: &str) -> bool {
    subject.starts_with(MERGE_PREFIX)
}

/// Check the subject line shape and extract its fields.
pub fn check_format(subject: &str) -> Result<ParsedSubject, Violation> {
    ParsedSubject::parse(subject).ok_or_else(|| Violation::InvalidFormat {
        subject: subject.to_string(),
    })
}

/// Check the type token is one of the accepted commit types.
pub fn check_type(parsed: &ParsedSubject) -> Option<Violation> {
    match parsed.commit_type() {
        Some(_) => None,
        None => Some(Violation::InvalidType {
            commit_type: parsed.raw_type.to_lowercase(),
        }),
    }
}

/// Check the subject text is not empty.
pub fn check_subject_not_empty(parsed: &ParsedSubject) -> Option<Violation> {
    parsed.text.is_empty().then_some(Violation::EmptySubject)
}

/// Check if subject ends with a period.
pub fn check_subject_trailing_period(parsed: &ParsedSubject) -> Option<Violation> {
    parsed.text.ends_with('.').then_some(Violation::TrailingPeriod)
}

/// Check the length of the whole subject line, in characters.
pub fn check_max_subject_length(subject: &str, max: usize) -> Option<Violation> {
    let length = subject.chars().count();

    if length > max {
        Some(Violation::SubjectTooLong { length, max })
    } else {
        None
    }
}

/// Check if subject starts with lowercase.
pub fn check_subject_case(parsed: &ParsedSubject) -> Option<Violation> {
    let first_char = parsed.text.chars().next()?;
    first_char.is_uppercase().then_some(Violation::UppercaseStart)
}

/// Check the first word does not look like past or progressive tense.
///
/// This is a suffix test only, so words like "bring" or "bed" are rejected too.
pub fn check_imperative_mood(parsed: &ParsedSubject) -> Option<Violation> {
    let word = parsed.first_word()?;

    if NON_IMPERATIVE_ENDINGS
        .iter()
        .any(|ending| word.ends_with(ending))
    {
        Some(Violation::NotImperative { word })
    } else {
        None
    }
}
