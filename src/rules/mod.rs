// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine module for commit validation.
//!
//! This module checks a commit message against the Conventional Commits
//! subject rules and reports the first one it breaks.

mod builtin;
mod engine;
mod validator;

pub use builtin::*;
pub use engine::{validate, Validator};
pub use validator::{ValidationResult, Violation};
