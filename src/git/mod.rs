// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git integration module.
//!
//! Reads commit messages from revisions and locates the hooks directory.

mod repo;

pub use repo::{get_commit_message, open_repo, Repository};
