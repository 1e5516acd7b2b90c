// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message model.
//!
//! This module knows the accepted commit types and how to pull the
//! conventional fields out of a subject line.

mod message;
mod types;

pub use message::{subject_line, ParsedSubject};
pub use types::CommitType;
