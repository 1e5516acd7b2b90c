// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Subject line extraction and parsing.

use lazy_static::lazy_static;
use regex::Regex;

use super::types::CommitType;

lazy_static! {
    /// Regex for the `type(scope)!: subject` shape of a subject line.
    ///
    /// Only the type alternation is case-insensitive; scopes must be lowercase.
    static ref SUBJECT_REGEX: Regex = Regex::new(&format!(
        r"^(?P<type>(?i:{}))(?:\((?P<scope>[a-z0-9-]+)\))?(?P<breaking>!)?: (?P<subject>.+)$",
        CommitType::all()
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join("|")
    ))
    .expect("subject regex is valid");
}

/// Return the subject line of a raw commit message.
///
/// This is the first line that is non-empty after trimming, returned trimmed.
pub fn subject_line(message: &str) -> Option<&str> {
    message.lines().map(str::trim).find(|line| !line.is_empty())
}

/// The fields of a subject line that matched the conventional shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSubject {
    /// The type token exactly as written (may be mixed case).
    pub raw_type: String,
    /// Optional scope.
    pub scope: Option<String>,
    /// Whether the `!` breaking marker was present.
    pub breaking: bool,
    /// Free text after `": "`.
    pub text: String,
}

impl ParsedSubject {
    /// Parse a subject line, returning `None` if it does not have the expected shape.
    pub fn parse(line: &str) -> Option<Self> {
        let captures = SUBJECT_REGEX.captures(line)?;

        Some(Self {
            raw_type: captures.name("type")?.as_str().to_string(),
            scope: captures.name("scope").map(|m| m.as_str().to_string()),
            breaking: captures.name("breaking").is_some(),
            text: captures
                .name("subject")
                .map(|m| m.as_str().to_string())
                .unwrap_or_default(),
        })
    }

    /// Resolve the type token against the valid type set.
    pub fn commit_type(&self) -> Option<CommitType> {
        self.raw_type.parse().ok()
    }

    /// The first whitespace-separated word of the subject text, lowercased.
    pub fn first_word(&self) -> Option<String> {
        self.text.split_whitespace().next().map(str::to_lowercase)
    }
}
