// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Embeds git metadata shown by `commitgate version`.

use vergen::EmitBuilder;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Without git (e.g. a crates.io tarball) vergen emits placeholder values.
    EmitBuilder::builder()
        .git_sha(false)
        .git_commit_date()
        .emit()?;
    Ok(())
}
