// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Where the commit message to check comes from.

use crate::error::{GateError, InputError, Result};
use crate::git;
use std::path::PathBuf;

/// A source of a raw commit message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageSource {
    /// A message passed directly on the command line.
    Literal(String),
    /// A file holding the message, such as the path git passes to commit-msg.
    File(PathBuf),
    /// The message of an existing commit.
    Revision(String),
}

impl MessageSource {
    /// Pick a source, preferring a literal message, then a file, then a revision.
    ///
    /// Empty values count as absent.
    pub fn select(
        message: Option<String>,
        file: Option<PathBuf>,
        rev: Option<String>,
    ) -> Option<Self> {
        message
            .filter(|m| !m.is_empty())
            .map(MessageSource::Literal)
            .or_else(|| {
                file.filter(|f| !f.as_os_str().is_empty())
                    .map(MessageSource::File)
            })
            .or_else(|| rev.filter(|r| !r.is_empty()).map(MessageSource::Revision))
    }

    /// Read the raw message.
    pub fn read(&self) -> Result<String> {
        match self {
            MessageSource::Literal(message) => Ok(message.clone()),
            MessageSource::File(path) => {
                tracing::debug!("Reading commit message from {:?}", path);
                std::fs::read_to_string(path).map_err(|e| {
                    GateError::Input(InputError::Unreadable {
                        path: path.clone(),
                        message: e.to_string(),
                    })
                })
            }
            MessageSource::Revision(reference) => {
                tracing::debug!("Reading commit message of {}", reference);
                git::get_commit_message(reference)
            }
        }
    }
}
