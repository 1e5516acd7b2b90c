// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Hook script generation.

/// Marker line identifying hooks written by commitgate.
pub const HOOK_MARKER: &str = "# Generated by commitgate";

/// The commit-msg hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitMsgHook;

impl CommitMsgHook {
    /// File name of the hook inside the hooks directory.
    pub fn filename(&self) -> &'static str {
        "commit-msg"
    }

    /// File name used to keep a replaced foreign hook.
    pub fn backup_filename(&self) -> String {
        format!("{}.backup", self.filename())
    }

    /// Generate the hook script.
    pub fn generate(&self) -> String {
        format!(
            "#!/bin/sh\n\
             {marker} v{version}\n\
             # Checks the commit message against Conventional Commits.\n\
             exec commitgate \"$1\"\n",
            marker = HOOK_MARKER,
            version = crate::version::VERSION,
        )
    }

    /// Check if a script was generated by commitgate.
    pub fn is_ours(script: &str) -> bool {
        script.contains(HOOK_MARKER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_script() {
        let script = CommitMsgHook.generate();
        assert!(script.starts_with("#!/bin/sh\n"));
        assert!(script.contains("exec commitgate \"$1\""));
        assert!(CommitMsgHook::is_ours(&script));
    }

    #[test]
    fn test_foreign_script() {
        assert!(!CommitMsgHook::is_ours("#!/bin/sh\nnpx commitlint --edit \"$1\"\n"));
    }
}
